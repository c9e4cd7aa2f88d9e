use crate::cli::Cli;
use crate::config::{self, AppConfig};
use crate::error::{CliError, Result};
use carcons::core::io::fasta::FastaFile;
use carcons::core::io::traits::AlignmentFile;
use carcons::core::matrix::SubstitutionMatrix;
use carcons::core::models::alignment::AlignmentSet;
use carcons::workflows;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = config::build_config(cli)?;
    let score = compute_score(&app)?;
    write_score(app.output_path.as_deref(), score)
}

fn compute_score(app: &AppConfig) -> Result<f64> {
    info!("Loading substitution matrix from {}", &app.matrix);
    let matrix = app.matrix.load()?;
    info!(
        matrix = matrix.name(),
        residues = matrix.alphabet().len(),
        max_score = matrix.max_score(),
        "Substitution matrix loaded."
    );

    let alignment = read_alignment(app.input_path.as_deref())?;
    info!(
        "Read alignment of {} sequences; query '{}' has {} columns.",
        alignment.len(),
        alignment.query().header(),
        alignment.query().len()
    );

    let report = workflows::score::run(&alignment, &matrix, &app.core_config)?;
    info!(
        mean = report.statistics.mean,
        standard_deviation = report.statistics.standard_deviation,
        threshold = report.threshold,
        mutant_diversity = report.mutation.mutant_diversity,
        self_identity = report.mutation.self_identity,
        score = report.score(),
        "CAR score computed."
    );
    Ok(report.score())
}

fn read_alignment(path: Option<&Path>) -> Result<AlignmentSet> {
    match path {
        Some(path) => {
            info!("Loading alignment from {:?}", path);
            FastaFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })
        }
        None => read_alignment_stream(&mut io::stdin().lock()),
    }
}

fn read_alignment_stream(reader: &mut impl BufRead) -> Result<AlignmentSet> {
    info!("Reading alignment from standard input.");
    Ok(FastaFile::read_from(reader)?)
}

pub fn format_score(score: f64) -> String {
    format!("{:.3}\n", score)
}

fn emit_score(writer: &mut impl Write, score: f64) -> Result<()> {
    writer.write_all(format_score(score).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_score(path: Option<&Path>, score: f64) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing score to {:?}", path);
            let mut file = fs::File::create(path)?;
            emit_score(&mut file, score)
        }
        None => emit_score(&mut io::stdout().lock(), score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::capture;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    const MATRIX: &str = "\
# identity-like test matrix
   A  C  D  E  F  W
A 10  0  0  0  0  0
C  0 10  0  0  0  0
D  0  0 10  0  0  0
E  0  0  0 10  5  0
F  0  0  0  5 10  2
W  0  0  0  0  2 10
";

    const ALIGNMENT: &str = ">query\nACDE\n>o1\nACDE\n>o2\nACDF\n>o3\nACWF\n";

    struct Fixture {
        _dir: TempDir,
        config: PathBuf,
        matrix: PathBuf,
        alignment: PathBuf,
        output: PathBuf,
    }

    fn fixture(alignment: &str) -> Fixture {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let matrix = dir.path().join("test.mat");
        let alignment_path = dir.path().join("aln.fasta");
        let output = dir.path().join("score.txt");
        fs::write(
            &config,
            format!("data-dir = {:?}\n", dir.path().display().to_string()),
        )
        .unwrap();
        fs::write(&matrix, MATRIX).unwrap();
        fs::write(&alignment_path, alignment).unwrap();
        Fixture {
            _dir: dir,
            config,
            matrix,
            alignment: alignment_path,
            output,
        }
    }

    fn cli(f: &Fixture, position: &str, mutation: &str) -> Cli {
        Cli::try_parse_from([
            "carcons",
            "-c",
            f.config.to_str().unwrap(),
            "-m",
            f.matrix.to_str().unwrap(),
            position,
            mutation,
            f.alignment.to_str().unwrap(),
            f.output.to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn format_score_uses_three_decimals_and_newline() {
        assert_eq!(format_score(0.123456), "0.123\n");
        assert_eq!(format_score(-0.25), "-0.250\n");
        assert_eq!(format_score(1.0), "1.000\n");
    }

    #[test]
    fn run_writes_score_to_output_file() {
        let f = fixture(ALIGNMENT);
        run(&cli(&f, "4", "E")).unwrap();

        // Weighted diversities at column 4: 0.0, 0.5 * 0.75, 0.5 * 0.5.
        let weighted: [f64; 3] = [0.0, 0.375, 0.25];
        let mean: f64 = weighted.iter().sum::<f64>() / 3.0;
        let sd = (weighted.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / 2.0).sqrt();
        let expected = format_score(mean + sd);

        assert_eq!(fs::read_to_string(&f.output).unwrap(), expected);
    }

    #[test]
    fn run_is_repeatable() {
        let f = fixture(ALIGNMENT);
        run(&cli(&f, "4", "W")).unwrap();
        let first = fs::read_to_string(&f.output).unwrap();
        run(&cli(&f, "4", "W")).unwrap();
        assert_eq!(fs::read_to_string(&f.output).unwrap(), first);
    }

    #[test]
    fn run_reports_position_outside_alignment_without_writing() {
        let f = fixture(ALIGNMENT);
        let result = run(&cli(&f, "9", "E"));
        assert!(matches!(
            result,
            Err(CliError::Engine(
                carcons::engine::error::EngineError::ColumnOutOfRange { column: 8, .. }
            ))
        ));
        assert!(!f.output.exists());
    }

    #[test]
    fn run_reports_too_few_sequences() {
        let f = fixture(">query\nACDE\n>o1\nACDF\n");
        let result = run(&cli(&f, "1", "A"));
        assert!(matches!(
            result,
            Err(CliError::Engine(
                carcons::engine::error::EngineError::InsufficientData(_)
            ))
        ));
        assert!(!f.output.exists());
    }

    #[test]
    fn run_reports_unparseable_alignment_file() {
        let f = fixture("ACDE\n");
        let result = run(&cli(&f, "1", "A"));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn run_reports_malformed_matrix() {
        let f = fixture(ALIGNMENT);
        fs::write(&f.matrix, "A C\n1 2\n").unwrap();
        let result = run(&cli(&f, "1", "A"));
        assert!(matches!(result, Err(CliError::Matrix(_))));
    }

    #[test]
    fn alignment_stream_is_read_like_a_file() {
        let aln = read_alignment_stream(&mut ALIGNMENT.as_bytes()).unwrap();
        assert_eq!(aln.len(), 4);
        assert_eq!(aln.query().header(), "query");
    }

    #[test]
    fn malformed_alignment_stream_is_an_alignment_error() {
        let result = read_alignment_stream(&mut "ACDE\n>q\nACDE\n".as_bytes());
        assert!(matches!(result, Err(CliError::Alignment(_))));
    }

    #[test]
    fn score_stream_holds_only_the_score_while_logs_go_to_console() {
        let f = fixture(ALIGNMENT);
        let app = config::build_config(&cli(&f, "4", "E")).unwrap();
        let (subscriber, log) = capture(3, false);

        let mut stdout_stand_in: Vec<u8> = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            let score = compute_score(&app).unwrap();
            emit_score(&mut stdout_stand_in, score).unwrap();
        });

        let printed = String::from_utf8(stdout_stand_in).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.trim_end().parse::<f64>().is_ok(), "{:?}", printed);
        assert!(log.contents().contains("CAR score computed."));
    }

    #[test]
    fn run_with_default_matrix_uses_bundled_fallback() {
        let f = fixture(ALIGNMENT);
        let data_dir = tempdir().unwrap();
        let data_arg = format!("data-dir={}", data_dir.path().display());
        let cli = Cli::try_parse_from([
            "carcons",
            "-c",
            f.config.to_str().unwrap(),
            "-S",
            data_arg.as_str(),
            "4",
            "F",
            f.alignment.to_str().unwrap(),
            f.output.to_str().unwrap(),
        ])
        .unwrap();

        run(&cli).unwrap();

        let written = fs::read_to_string(&f.output).unwrap();
        assert!(written.ends_with('\n'));
        assert_eq!(written.trim_end().split('.').nth(1).map(str::len), Some(3));
    }
}
