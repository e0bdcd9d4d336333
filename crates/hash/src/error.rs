//! Core error type.

use crate::Variant;

/// Precondition failures. Every one is detected before the sponge state is
/// touched, so an `Err` never leaves a half-finished digest behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested output length is outside what the variant accepts.
    #[error("invalid output length: {requested} bytes (expected {min}..={max})")]
    InvalidOutputLength {
        /// Bytes requested by the caller.
        requested: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },
    /// An XOF reader was requested from a fixed-digest variant.
    #[error("{variant} has a fixed output length and cannot be read incrementally")]
    NotExtendable {
        /// The variant bound to the context.
        variant: Variant,
    },
    /// A variant name did not match any supported instance.
    #[error("unknown hash variant")]
    UnknownVariant,
}
