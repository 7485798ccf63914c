//! Error type shared by every filter operation.
//!
//! Only caller mistakes are reported: a non-empty signal that is empty, a
//! sampling rate that is not positive, a cutoff outside the range the
//! operation accepts, a zero tap count. Degenerate but well-defined inputs
//! (all-pass or all-block masks) are not errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FilterError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FilterError::InvalidArgument(msg.into())
    }
}

/// Reject a sampling rate that is zero, negative, or not finite.
pub(crate) fn check_sfreq(fs: f64) -> Result<()> {
    if fs.is_finite() && fs > 0.0 {
        Ok(())
    } else {
        Err(FilterError::invalid(format!("sampling rate must be > 0, got {fs}")))
    }
}
