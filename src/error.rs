use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgChartsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl SvgChartsError {
    /// Short machine-readable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "Io",
            Self::JsonParse(_) => "JsonParse",
            Self::TomlParse(_) => "TomlParse",
        }
    }
}

pub type Result<T> = std::result::Result<T, SvgChartsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
