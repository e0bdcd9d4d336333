use std::io;

/// Errors from the hashing front end.
///
/// Producer failures (`Io`, `Serialize`) abandon the running context; no
/// partial digest is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'bits' must be between 8 and 2^24, got {bits}")]
    InvalidBits { bits: u32 },
    #[error(transparent)]
    Hash(#[from] sb_hash::Error),
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("failed to serialize input")]
    Serialize(#[from] serde_json::Error),
}
