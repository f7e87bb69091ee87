//! # Error Types
//!
//! Custom error types for the CRC-8 library using `thiserror`.

use thiserror::Error;

/// Main error type for CRC-8 computation and verification
#[derive(Debug, Error)]
pub enum Crc8Error {
    /// Input buffer did not hold exactly the number of bytes a word requires
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Received checksum does not match the computed one
    #[error("CRC mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CRC-8 operations
pub type Result<T> = std::result::Result<T, Crc8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = Crc8Error::InvalidInputLength { expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "invalid input length: expected 2 bytes, got 3");
    }

    #[test]
    fn test_mismatch_message_is_hex() {
        let err = Crc8Error::ChecksumMismatch { expected: 0x92, actual: 0x0A };
        assert_eq!(err.to_string(), "CRC mismatch: expected 0x92, got 0x0A");
    }
}
