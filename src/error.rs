use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialise singleton state: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to construct {what}: {reason}")]
    Construction { what: &'static str, reason: String },
}

impl PatternError {
    pub fn construction(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Construction {
            what,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_message() {
        let err = PatternError::construction("StaticBlockSingleton", "no temp dir");
        assert_eq!(
            err.to_string(),
            "Failed to construct StaticBlockSingleton: no temp dir"
        );
    }

    #[test]
    fn test_io_conversion() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/definitely/not/here.bin")?)
        }

        assert!(matches!(open_missing(), Err(PatternError::Io(_))));
    }
}
