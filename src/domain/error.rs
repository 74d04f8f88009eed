//! Domain error types.

/// A validation failure from the position calculator. These are ordinary
/// outcomes, not faults: the caller shows the message and clears any
/// previous result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("total exit percentage for active targets cannot exceed 100%")]
    ExitPercentExceeded,

    #[error("total allocation for active entries must be 100%")]
    AllocationMustBe100,

    #[error("entry price must be above the stop loss for a long trade")]
    EntryBelowStop,

    #[error("entry price must be below the stop loss for a short trade")]
    EntryAboveStop,

    #[error("target {slot} must be above the entry price")]
    TargetBelowEntry { slot: usize },

    #[error("target {slot} must be below the entry price")]
    TargetAboveEntry { slot: usize },
}

/// Top-level error type for tradesizer.
#[derive(Debug, thiserror::Error)]
pub enum TradesizerError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradesizerError> for std::process::ExitCode {
    fn from(err: &TradesizerError) -> Self {
        let code: u8 = match err {
            TradesizerError::Io(_) => 1,
            TradesizerError::ConfigParse { .. }
            | TradesizerError::ConfigMissing { .. }
            | TradesizerError::ConfigInvalid { .. } => 2,
            TradesizerError::Validation(_) => 3,
        };
        std::process::ExitCode::from(code)
    }
}
