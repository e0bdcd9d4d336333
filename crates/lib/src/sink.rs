//! `std::io::Write` adapter that feeds a sponge.

use std::io::{self, Write};

use sb_hash::Context;
use tracing::debug;

use crate::{Error, Selection};

/// Byte sink for producers that push their output through `io::Write`
/// (serializers, `io::copy`, formatters).
///
/// The skip counter discards the first `skip` calls to [`write`] whole,
/// regardless of their length. This lets a caller drop a header that an
/// upstream serializer always emits first.
///
/// [`write`]: Write::write
pub struct HashWriter {
    ctx: Context,
    output_len: usize,
    skip: usize,
}

impl HashWriter {
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self { ctx: selection.start(), output_len: selection.output_len(), skip: 0 }
    }

    /// Discard the next `skip` write calls.
    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Write calls still to be discarded.
    #[inline]
    #[must_use]
    pub fn pending_skip(&self) -> usize {
        self.skip
    }

    /// Finalize and return the raw digest.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        Ok(self.ctx.finish(self.output_len)?)
    }
}

impl Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.skip > 0 {
            self.skip -= 1;
            debug!(len = buf.len(), remaining = self.skip, "skipped write");
        } else {
            self.ctx.update(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for HashWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashWriter")
            .field("ctx", &self.ctx)
            .field("output_len", &self.output_len)
            .field("skip", &self.skip)
            .finish()
    }
}
