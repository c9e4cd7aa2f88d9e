pub struct DefaultsConfig {
    pub num_sd: f64,
    pub matrix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_sd: carcons::engine::config::DEFAULT_NUM_SD,
            matrix: crate::data::DEFAULT_MATRIX.to_string(),
        }
    }
}
