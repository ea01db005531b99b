// src/exit.rs
//! Standardized process exit codes for `wtf`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::WtfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WtfExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, worker pool).
    Error = 1,
    /// Input validation failed (missing input, bad config, corrupt checkpoint, existing output).
    InvalidInput = 2,
}

impl WtfExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Classifies a failure, looking through `anyhow` context for a [`WtfError`].
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<WtfError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for WtfExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
