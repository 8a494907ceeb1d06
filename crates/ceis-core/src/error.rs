//! Error types for the registration engine

use thiserror::Error;

/// Main error type for registration operations
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Photo exceeds the client-side size gate
    #[error("Photo too large: {size} bytes (limit {limit})")]
    PhotoTooLarge { size: u64, limit: u64 },

    /// Reading the picked photo file failed
    #[error("Photo read error: {0}")]
    PhotoRead(#[from] std::io::Error),

    /// Rasterizing or encoding an image failed
    #[error("Image encoding error: {0}")]
    ImageEncoding(String),

    /// Payload serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The submission request could not be transmitted
    #[error("Transmission error: {0}")]
    Transmission(String),
}

/// Result type alias using RegistrationError
pub type RegResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistrationError::PhotoTooLarge {
            size: 3_000_000,
            limit: 2_097_152,
        };
        assert_eq!(
            format!("{}", err),
            "Photo too large: 3000000 bytes (limit 2097152)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RegistrationError = io_err.into();
        assert!(matches!(err, RegistrationError::PhotoRead(_)));
    }
}
