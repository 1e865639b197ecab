//! Error types for canal-config.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for configuration construction and filter compilation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is malformed or a value has the wrong type
    #[error("failed to decode config document from {origin}")]
    Decode {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// File was read but its content is not UTF-8 text
    #[error("failed to decode config document from {origin}: not valid UTF-8")]
    InvalidUtf8 {
        origin: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Table filter pattern is not a valid regex
    #[error("invalid table pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// True when the failure happened while reading the file.
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }

    /// True when the document was read but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ConfigError::Decode { .. } | ConfigError::InvalidUtf8 { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("/nope/canal.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io());
        assert!(!err.is_decode());
        assert!(err.to_string().contains("/nope/canal.toml"));
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }

    #[test]
    fn test_invalid_utf8_is_decode_kind() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ConfigError::InvalidUtf8 {
            origin: "bad.toml".to_string(),
            source,
        };
        assert!(err.is_decode());
        assert!(!err.is_io());
        assert!(err.to_string().contains("bad.toml"));
    }
}
