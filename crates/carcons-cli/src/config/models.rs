use crate::data::MatrixSource;
use carcons::engine::config::ScoringConfig;
use std::path::PathBuf;

pub struct AppConfig {
    /// Alignment source; `None` reads standard input.
    pub input_path: Option<PathBuf>,
    /// Score destination; `None` writes standard output.
    pub output_path: Option<PathBuf>,
    pub matrix: MatrixSource,
    pub core_config: ScoringConfig,
}
