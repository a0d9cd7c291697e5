//! Error types for tessera.
//!
//! Geometry never fails: degenerate rectangles and missing collaborators are
//! clamped or ignored. The only errors are configuration mistakes, which are
//! usually caught at development time.

use thiserror::Error;

/// Invalid widget configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid {field}: {value} (expected a finite, non-negative length)")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("Fixed thumb size {thumb} exceeds track length {track}")]
    ThumbExceedsTrack { thumb: f64, track: f64 },

    #[error("Invalid wheel scale: {0} (expected a finite number)")]
    InvalidWheelScale(f64),
}

impl ConfigError {
    /// Check that `value` is usable as a length.
    pub fn check_length(field: &'static str, value: f64) -> Result<f64, ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidLength { field, value })
        }
    }
}
