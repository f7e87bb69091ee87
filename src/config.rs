//! # Configuration Module
//!
//! Loads the caller's choice of CRC-8 generator polynomial from TOML.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::crc::{crc8, SENSIRION_POLYNOMIAL, WORD_SIZE};
use crate::error::Result;

/// CRC-8 configuration
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Crc8Config {
    #[serde(default = "default_polynomial")]
    pub polynomial: u8,
}

fn default_polynomial() -> u8 { SENSIRION_POLYNOMIAL }

impl Default for Crc8Config {
    fn default() -> Self {
        Self { polynomial: default_polynomial() }
    }
}

impl Crc8Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sensirion_crc8::config::Crc8Config;
    ///
    /// let config = Crc8Config::load("config/crc8.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Crc8Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checksum a word with the configured polynomial
    pub fn checksum(&self, data: [u8; WORD_SIZE]) -> u8 {
        crc8(data, self.polynomial)
    }

    fn validate(&self) -> Result<()> {
        // A zero generator never injects feedback and detects nothing
        if self.polynomial == 0x00 {
            return Err(crate::error::Crc8Error::Config(
                toml::de::Error::custom("polynomial must be non-zero")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Crc8Error;

    #[test]
    fn test_default_config() {
        let config = Crc8Config::default();
        assert_eq!(config.polynomial, 0x31);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_polynomial_uses_default() {
        let config = Crc8Config::from_toml_str("").unwrap();
        assert_eq!(config, Crc8Config::default());
    }

    #[test]
    fn test_custom_polynomial() {
        let config = Crc8Config::from_toml_str("polynomial = 0xD5").unwrap();
        assert_eq!(config.polynomial, 0xD5);
        assert_eq!(config.checksum([0xBE, 0xEF]), 0x1F);
    }

    #[test]
    fn test_zero_polynomial_rejected() {
        let result = Crc8Config::from_toml_str("polynomial = 0");
        assert!(matches!(result, Err(Crc8Error::Config(_))));
    }

    #[test]
    fn test_out_of_range_polynomial_rejected() {
        let result = Crc8Config::from_toml_str("polynomial = 256");
        assert!(matches!(result, Err(Crc8Error::Config(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let toml_content = r#"
# Sensirion SCD4x
polynomial = 0x31
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Crc8Config::load(temp_file.path()).unwrap();
        assert_eq!(config.checksum([0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Crc8Config::load("/nonexistent/crc8.toml");
        assert!(matches!(result, Err(Crc8Error::Io(_))));
    }
}
