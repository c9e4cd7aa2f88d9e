use crate::error::{CliError, Result};
use carcons::core::matrix::{MatrixLoadError, ScoreTable};
use directories::ProjectDirs;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CARCONS_DATA";

const MATRIX_DIR: &str = "matrices";
const MATRIX_EXTENSION: &str = "mat";
const CONFIG_FILE: &str = "config.toml";

/// Matrix used when neither the command line nor a config file names one.
pub const DEFAULT_MATRIX: &str = "pet91";
const PET91_FALLBACK: &str = "pam250";

const BUNDLED_MATRICES: &[(&str, &str)] = &[
    ("pam250", include_str!("../data/matrices/pam250.mat")),
    ("blosum62", include_str!("../data/matrices/blosum62.mat")),
];

/// Where a substitution matrix is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSource {
    File(PathBuf),
    Bundled {
        name: &'static str,
        text: &'static str,
    },
}

impl MatrixSource {
    fn bundled(name: &str) -> Option<Self> {
        BUNDLED_MATRICES
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|&(name, text)| Self::Bundled { name, text })
    }

    pub fn load(&self) -> std::result::Result<ScoreTable, MatrixLoadError> {
        match self {
            Self::File(path) => ScoreTable::load(path),
            Self::Bundled { name, text } => ScoreTable::read_from(name, &mut text.as_bytes()),
        }
    }
}

impl fmt::Display for MatrixSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundled { name, .. } => write!(f, "bundled matrix '{}'", name),
        }
    }
}

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn data_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a matrix argument. Values that look like paths are used as
    /// given. Logical names are looked up under the data directory first and
    /// then among the bundled matrices. An uninstalled PET91 falls back to
    /// the bundled Dayhoff PAM250.
    pub fn resolve_matrix(&self, name_or_path: &str) -> Result<MatrixSource> {
        let path = Path::new(name_or_path);
        if path.is_absolute() || name_or_path.contains(['/', '\\']) || path.is_file() {
            if !path.is_file() {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Provided matrix path does not exist: {}", name_or_path),
                )));
            }
            return Ok(MatrixSource::File(path.to_path_buf()));
        }

        if name_or_path.is_empty() {
            return Err(CliError::Argument(
                "Matrix name cannot be empty.".to_string(),
            ));
        }

        let name = name_or_path.to_ascii_lowercase();
        let installed = self
            .base_path
            .join(MATRIX_DIR)
            .join(format!("{}.{}", name, MATRIX_EXTENSION));
        if installed.is_file() {
            debug!("Resolved matrix '{}' to {:?}", name_or_path, &installed);
            return Ok(MatrixSource::File(installed));
        }

        if let Some(source) = MatrixSource::bundled(&name) {
            debug!("Using bundled matrix '{}'", name);
            return Ok(source);
        }

        if name == DEFAULT_MATRIX {
            if let Some(source) = MatrixSource::bundled(PET91_FALLBACK) {
                warn!(
                    "PET91 is not installed at {:?}; using the bundled {} matrix instead.",
                    installed, PET91_FALLBACK
                );
                return Ok(source);
            }
        }

        Err(CliError::Data(format!(
            "Substitution matrix '{}' not found at {:?} and is not bundled. Hint: Place the matrix file there, set {} to your data directory, or pass a path with --matrix.",
            name_or_path, installed, DATA_DIR_ENV
        )))
    }

    pub fn default_config_file() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn determine_data_path() -> Result<PathBuf> {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => Ok(PathBuf::from(custom)),
            _ => Self::project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    CliError::Data("Could not determine default data directory path.".to_string())
                }),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "bioinf", "carcons")
    }
}
