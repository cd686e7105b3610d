//! Error types for Folio

use thiserror::Error;

/// Error type for configuration loading and validation.
///
/// Rendering itself never fails; only startup paths return these.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `HeroConfig`
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but holds values the hero cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::InvalidConfig("mobile_breakpoint must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: mobile_breakpoint must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Json(_)));
    }
}
