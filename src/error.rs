/*!
Error types for volume validation and extraction
*/

use thiserror::Error;

/**
Errors reported at the extraction boundary.

All of these are detected synchronously before any cube is processed:
extraction either fully succeeds (possibly with an empty mesh) or does not
run at all, and no partial mesh is ever returned alongside an error.
*/
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    /// The volume cannot be extracted from: its sample buffer does not match
    /// its dimensions, a spacing component is not positive, or an axis has
    /// fewer than 2 samples (no cube can be formed).
    #[error("malformed volume: {reason}")]
    MalformedVolume {
        /// What was wrong with the volume
        reason: String,
    },

    /// Reserved for future threshold range constraints. Any real threshold is
    /// currently accepted, so this variant is never produced today.
    #[error("invalid threshold: {value}")]
    InvalidThreshold {
        /// The rejected threshold value
        value: f64,
    },
}

impl ExtractionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExtractionError::MalformedVolume {
            reason: reason.into(),
        }
    }
}
