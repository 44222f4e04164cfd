//! Structured errors for frame construction and filtering.

use thiserror::Error;

/// Errors raised when wrapping raw buffers as frames or filtering them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// The raw buffer does not match the declared dimensions.
    #[error("buffer holds {actual} samples but a {width}x{height} frame needs {needed}")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
        needed: usize,
    },

    /// Median filtering needs an odd, non-zero kernel.
    #[error("median kernel size must be odd and non-zero, got {0}")]
    KernelSize(u32),
}
