//! Typed fatal errors with distinct process exit codes.

use thiserror::Error;

/// Fatal viewer failures. Every variant terminates the process; the binary
/// maps each to its own exit code via [`ViewerError::exit_code`]. There are
/// no retries or degraded modes anywhere.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The OBJ loader failed. The message carries the loader's full
    /// diagnostic chain, including the offending path.
    #[error("mesh load failed: {0}")]
    MeshLoad(String),

    /// The windowing event loop could not be created or aborted.
    #[error("event loop failure: {0}")]
    EventLoop(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// No usable surface/adapter/device, or an unrecoverable surface error.
    #[error("GPU initialization failed: {0}")]
    Gpu(String),

    /// Shader or pipeline failed validation at setup time.
    #[error("shader validation failed: {0}")]
    Shader(String),
}

impl ViewerError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MeshLoad(_) => 1,
            Self::EventLoop(_) => 2,
            Self::WindowCreation(_) => 3,
            Self::Gpu(_) => 4,
            Self::Shader(_) => 5,
        }
    }
}
