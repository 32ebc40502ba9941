/// Start-up configuration errors. Each names the offending variable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_env: {0}")]
    MissingEnv(&'static str),
    #[error("config.invalid_value: {0}")]
    InvalidValue(&'static str),
}
