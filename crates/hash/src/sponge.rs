//! Byte-oriented Keccak sponge and the streaming [`Context`].
//!
//! The sponge keeps a single cursor into the rate portion of the state. It
//! is shared by absorption and squeezing: the permutation runs every time
//! the cursor wraps from `rate - 1` back to 0, and once more at
//! finalization.

use core::fmt;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::{
    Error, PLEN, Variant, XofReader,
    lane::{read_byte, xor_block, xor_byte},
    permutation::keccak_f1600,
};

/// Keccak state plus cursor. Capacity bytes (`rate..200`) are only ever
/// touched by the permutation.
#[derive(Clone, Default, Zeroize)]
pub(crate) struct Sponge {
    state: [u64; PLEN],
    rate: usize,
    index: usize,
}

impl Sponge {
    pub(crate) const fn new(rate: usize) -> Self {
        Self { state: [0; PLEN], rate, index: 0 }
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.index += 1;
        if self.index == self.rate {
            self.index = 0;
            keccak_f1600(&mut self.state);
        }
    }

    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        while let Some((&byte, rest)) = data.split_first() {
            if self.index == 0 && data.len() >= self.rate {
                let (block, rest) = data.split_at(self.rate);
                xor_block(&mut self.state, block);
                keccak_f1600(&mut self.state);
                data = rest;
                continue;
            }
            xor_byte(&mut self.state, self.index, byte);
            self.advance();
            data = rest;
        }
    }

    /// Close absorption: domain suffix at the cursor, `0x80` on the last rate
    /// byte (the two land on the same byte when the cursor is at
    /// `rate - 1`), one permutation, cursor back to 0.
    pub(crate) fn pad(&mut self, domain_suffix: u8) {
        xor_byte(&mut self.state, self.index, domain_suffix);
        xor_byte(&mut self.state, self.rate - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.index = 0;
    }

    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        for b in out {
            *b = read_byte(&self.state, self.index);
            self.advance();
        }
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// A running SHA-3 or SHAKE computation.
///
/// Created by [`start`](crate::start) (or [`Context::new`]), fed with
/// [`update`](Self::update), and consumed by exactly one of
/// [`finish`](Self::finish), [`finish_into`](Self::finish_into) or
/// [`into_reader`](Self::into_reader). The state is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Context {
    sponge: Sponge,
    #[zeroize(skip)]
    variant: Variant,
}

impl Context {
    /// Bind a fresh zero state to `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let params = variant.params();
        trace!(%variant, rate = params.rate_bytes(), "sponge start");
        Self { sponge: Sponge::new(params.rate_bytes()), variant }
    }

    /// The variant this context was started with.
    #[inline]
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Absorb `data`. May be called any number of times; the result only
    /// depends on the concatenation of all chunks.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.sponge.absorb(data.as_ref());
    }

    /// Builder-style [`update`](Self::update).
    #[must_use]
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data);
        self
    }

    /// Pad and squeeze without checking `out` against the variant.
    pub(crate) fn squeeze_unchecked(&mut self, out: &mut [u8]) {
        trace!(variant = %self.variant, out_len = out.len(), "sponge finish");
        self.sponge.pad(self.variant.params().domain_suffix);
        self.sponge.squeeze(out);
    }

    /// Finalize into `out`.
    ///
    /// For SHA3 variants `out` must be exactly the digest size; for SHAKE it
    /// must hold `1..=MAX_XOF_BYTES` bytes. The check happens before any
    /// padding, so on error `out` is untouched.
    pub fn finish_into(mut self, out: &mut [u8]) -> Result<(), Error> {
        self.variant.check_output_buf(out.len())?;
        self.squeeze_unchecked(out);
        Ok(())
    }

    /// Finalize and return the digest.
    ///
    /// `output_len` is only consulted for SHAKE; SHA3 variants always return
    /// their fixed digest size.
    #[cfg(feature = "alloc")]
    pub fn finish(mut self, output_len: usize) -> Result<Vec<u8>, Error> {
        let len = self.variant.output_len(output_len)?;
        let mut out = vec![0u8; len];
        self.squeeze_unchecked(&mut out);
        Ok(out)
    }

    /// Finalize a SHAKE context into a reader that squeezes on demand.
    pub fn into_reader(mut self) -> Result<XofReader, Error> {
        if !self.variant.is_xof() {
            return Err(Error::NotExtendable { variant: self.variant });
        }
        trace!(variant = %self.variant, "sponge finish (reader)");
        self.sponge.pad(self.variant.params().domain_suffix);
        Ok(XofReader::new(core::mem::take(&mut self.sponge)))
    }

    #[cfg(test)]
    pub(crate) fn sponge(&self) -> &Sponge {
        &self.sponge
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("variant", &self.variant)
            .field("state", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutes_exactly_on_wrap() {
        let rate = Variant::Sha3_256.params().rate_bytes();
        let mut s = Sponge::new(rate);
        s.absorb(&[0u8; 135]);
        // zero bytes XOR nothing in; state only moves through the permutation
        assert_eq!(s.state, [0; PLEN]);
        assert_eq!(s.index(), 135);
        s.absorb(&[0u8]);
        assert_eq!(s.index(), 0);
        assert_ne!(s.state, [0; PLEN]);
    }

    #[test]
    fn empty_update_is_noop() {
        let mut a = Context::new(Variant::Sha3_384);
        a.update(b"abc");
        let mut b = a.clone();
        b.update([0u8; 0]);
        b.update(b"");
        assert_eq!(a.sponge().state, b.sponge().state);
        assert_eq!(a.sponge().index(), b.sponge().index());
    }

    #[test]
    fn block_fast_path_matches_bytewise() {
        let data: [u8; 500] = core::array::from_fn(|i| (i * 7 + 3) as u8);
        for v in Variant::ALL {
            let mut fast = Context::new(v);
            fast.update(data);
            let mut slow = Context::new(v);
            for b in data {
                slow.update([b]);
            }
            assert_eq!(fast.sponge().state, slow.sponge().state, "{v}");
            assert_eq!(fast.sponge().index(), slow.sponge().index(), "{v}");
        }
    }

    #[test]
    fn chunking_is_invisible() {
        let mut a = Context::new(Variant::Shake128);
        a.update(b"AB");
        a.update(b"C");
        let b = Context::new(Variant::Shake128).chain(b"ABC");
        assert_eq!(a.sponge().state, b.sponge().state);
        assert_eq!(a.sponge().index(), b.sponge().index());
    }

    #[test]
    fn finish_into_rejects_wrong_fixed_size() {
        let mut out = [0xEEu8; 31];
        let err = Context::new(Variant::Sha3_256).finish_into(&mut out).unwrap_err();
        assert_eq!(err, Error::InvalidOutputLength { requested: 31, min: 32, max: 32 });
        assert!(out.iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn reader_rejected_for_fixed_digest() {
        let err = Context::new(Variant::Sha3_512).into_reader().unwrap_err();
        assert_eq!(err, Error::NotExtendable { variant: Variant::Sha3_512 });
    }

    #[test]
    fn debug_is_redacted() {
        let ctx = Context::new(Variant::Shake256).chain(b"secret");
        let s = alloc::format!("{ctx:?}");
        assert!(s.contains("Shake256"));
        assert!(s.contains("<redacted>"));
    }
}
