use crate::utils::parser;
use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "carcons",
    author = "Andrew C. R. Martin",
    version,
    about = "CARCONS - Score a point mutation by Conservation and Allowed Residues across an alignment of functional orthologues.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Number of standard deviations above the mean weighted diversity used as the threshold [default: 1.0]
    #[arg(short = 'n', long = "num-sd", value_name = "FLOAT")]
    pub num_sd: Option<f64>,

    /// Substitution matrix to use: a path, an installed name, or a bundled one ('pam250', 'blosum62') [default: pet91]
    #[arg(short, long, value_name = "NAME_OR_PATH")]
    pub matrix: Option<String>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S num-sd=2.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Alignment column to score (1-based)
    #[arg(value_name = "POSITION", value_parser = parser::parse_position)]
    pub position: usize,

    /// Proposed replacement residue (one-letter code)
    #[arg(value_name = "MUTATION", value_parser = parser::parse_mutation)]
    pub mutation: char,

    /// FASTA alignment with the query sequence first [default: standard input]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the score to [default: standard output]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}
