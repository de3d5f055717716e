//! Error types for quicknotes.

use thiserror::Error;

/// Result type alias using quicknotes' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for note operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was blank; caught before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mutation targeted an id the backing store does not hold
    #[error("Note not found: {0}")]
    NotFound(uuid::Uuid),

    /// Payload the store cannot persist or transmit
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Backend unreachable or returned an unexpected failure
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Unavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("title is required".to_string());
        assert_eq!(err.to_string(), "Validation error: title is required");
    }

    #[test]
    fn test_error_display_not_found() {
        let id = Uuid::nil();
        let err = Error::NotFound(id);
        assert_eq!(err.to_string(), format!("Note not found: {}", id));
    }

    #[test]
    fn test_error_display_invalid_record() {
        let err = Error::InvalidRecord("unserializable field".to_string());
        assert_eq!(err.to_string(), "Invalid record: unserializable field");
    }

    #[test]
    fn test_error_display_unavailable() {
        let err = Error::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Store unavailable: connection refused");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing base URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing base URL");
    }

    #[test]
    fn test_not_found_with_random_uuid() {
        let id = Uuid::new_v4();
        let err = Error::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        let result = get_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::Unavailable("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Unavailable"));
    }
}
