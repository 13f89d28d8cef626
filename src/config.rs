//! Extraction settings, loadable from TOML.
//!
//! ```toml
//! diagnostics = "stdout"   # "tracing" (default), "stdout" or "silent"
//! ```

use std::path::Path;

use crate::{
    error::LabelError,
    extract::sink::{LabelSink, SilentSink, TracingSink, WriterSink},
};

/// Where resolved labels are emitted during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diagnostics {
    #[default]
    Tracing,
    /// One line per label on standard output.
    Stdout,
    Silent,
}

impl Diagnostics {
    pub fn sink(self) -> Box<dyn LabelSink> {
        match self {
            Diagnostics::Tracing => Box::new(TracingSink),
            Diagnostics::Stdout => Box::new(WriterSink::stdout()),
            Diagnostics::Silent => Box::new(SilentSink),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    pub diagnostics: Diagnostics,
}

impl ExtractConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, LabelError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LabelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded extraction config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ExtractConfig::from_toml_str("").unwrap();
        assert_eq!(config.diagnostics, Diagnostics::Tracing);
    }

    #[test]
    fn parses_each_mode() {
        for (text, mode) in [
            ("tracing", Diagnostics::Tracing),
            ("stdout", Diagnostics::Stdout),
            ("silent", Diagnostics::Silent),
        ] {
            let config = ExtractConfig::from_toml_str(&format!("diagnostics = \"{text}\"")).unwrap();
            assert_eq!(config.diagnostics, mode);
        }
    }

    #[test]
    fn unknown_mode_is_config_error() {
        let err = ExtractConfig::from_toml_str("diagnostics = \"syslog\"").unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = ExtractConfig::from_toml_str("sentinel = \"NaN\"").unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.toml");
        std::fs::write(&path, "diagnostics = \"silent\"\n").unwrap();
        let config = ExtractConfig::from_path(&path).unwrap();
        assert_eq!(config.diagnostics, Diagnostics::Silent);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExtractConfig::from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, LabelError::Io(_)));
    }
}
