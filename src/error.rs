use thiserror::Error;

use crate::wave::error::WaveError;

/// Errors surfaced by label extraction, label lists and configuration.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The input cannot report its leading-axis size or one of its labels.
    #[error("invalid input: {reason}")]
    InvalidInput {
        reason: String,
        #[source]
        source: Option<WaveError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl LabelError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LabelError::InvalidInput {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn unreadable_wave(reason: impl Into<String>, source: WaveError) -> Self {
        LabelError::InvalidInput {
            reason: reason.into(),
            source: Some(source),
        }
    }
}
