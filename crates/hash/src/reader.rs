//! Incremental SHAKE output.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::sponge::Sponge;

/// Squeezes SHAKE output on demand.
///
/// Obtained from [`Context::into_reader`](crate::Context::into_reader).
/// Successive reads continue the same output stream, so reading `a` bytes
/// and then `b` bytes yields the same bytes as one `finish(a + b)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XofReader {
    sponge: Sponge,
}

impl XofReader {
    pub(crate) fn new(sponge: Sponge) -> Self {
        Self { sponge }
    }

    /// Fill `out` with the next `out.len()` output bytes.
    pub fn read(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out);
    }
}

impl fmt::Debug for XofReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("XofReader").field(&"<redacted>").finish()
    }
}
