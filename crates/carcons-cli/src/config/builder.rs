use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use carcons::engine::config::ScoringConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::from_default_location()?,
    };
    merge_config(cli, file_config)
}

fn merge_config(cli: &Cli, file_config: FileConfig) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(file_config, &cli.set_values)?;

    let num_sd = cli
        .num_sd
        .or(file_config.num_sd)
        .unwrap_or(defaults.num_sd);

    let data_manager = match file_config.data_dir {
        Some(dir) => DataManager::with_custom_path(dir),
        None => DataManager::new()?,
    };
    debug!("Using data directory {:?}", data_manager.data_path());

    let matrix_name = cli
        .matrix
        .as_deref()
        .or(file_config.matrix.as_deref())
        .unwrap_or(&defaults.matrix);
    let matrix = data_manager.resolve_matrix(matrix_name)?;

    let column = cli
        .position
        .checked_sub(1)
        .ok_or_else(|| CliError::Argument("Position must be 1 or greater.".to_string()))?;

    let core_config = ScoringConfigBuilder::new()
        .column(column)
        .mutant(cli.mutation as u8)
        .num_sd(num_sd)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: standard_stream_or_path(cli.input.as_ref()),
        output_path: standard_stream_or_path(cli.output.as_ref()),
        matrix,
        core_config,
    })
}

fn standard_stream_or_path(arg: Option<&PathBuf>) -> Option<PathBuf> {
    arg.filter(|path| path.as_os_str() != "-").cloned()
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "num-sd" => {
                config.num_sd = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "matrix" => {
                config.matrix = Some(value_str.trim().to_string());
            }
            "data-dir" => {
                config.data_dir = Some(PathBuf::from(value_str.trim()));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
