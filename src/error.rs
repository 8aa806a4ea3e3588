use thiserror::Error;

/// Prio error types
#[derive(Error, Debug)]
pub enum PrioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data file error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for prio operations
pub type Result<T> = std::result::Result<T, PrioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = PrioError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_store() {
        let err = PrioError::Store("bad data".to_string());
        assert_eq!(err.to_string(), "Data file error: bad data");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = PrioError::from(json_err);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
