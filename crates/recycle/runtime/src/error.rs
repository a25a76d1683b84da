use thiserror::Error;

/// Errors from the runtime's own machinery (configuration, telemetry and the
/// receipt journal). Contract failures are never reported here; they travel
/// inside [`crate::CallResult`].
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("receipt hash mismatch at sequence {sequence}")]
    ReceiptHashMismatch { sequence: u64 },

    #[error("receipt chain broken at sequence {sequence}: previous hash does not match")]
    ReceiptChainBroken { sequence: u64 },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
