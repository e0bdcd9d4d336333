//! Mapping a requested digest size in bits onto a sponge variant.

use sb_hash::{Context, Variant};
use tracing::debug;

use crate::Error;

/// Smallest accepted `bits` value.
pub const MIN_BITS: u32 = 8;

/// Largest accepted `bits` value (2^24).
pub const MAX_BITS: u32 = 1 << 24;

/// A variant together with the number of output bytes to squeeze.
///
/// Always valid once constructed: the output length has already been checked
/// against the variant, so finishing a context started from a `Selection`
/// cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    variant: Variant,
    output_len: usize,
}

impl Selection {
    /// 224, 256, 384 and 512 select the SHA3 function of that size. Any other
    /// value in `MIN_BITS..=MAX_BITS` selects SHAKE256 squeezed to
    /// `bits / 8` bytes (a partial trailing byte is dropped).
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        if !(MIN_BITS..=MAX_BITS).contains(&bits) {
            return Err(Error::InvalidBits { bits });
        }
        let variant = match bits {
            224 => Variant::Sha3_224,
            256 => Variant::Sha3_256,
            384 => Variant::Sha3_384,
            512 => Variant::Sha3_512,
            _ => Variant::Shake256,
        };
        let selection = Self::with_variant(variant, (bits / 8) as usize)?;
        debug!(bits, %variant, output_len = selection.output_len, "selected variant");
        Ok(selection)
    }

    /// Pick `variant` explicitly. `output_len` is only used by SHAKE.
    pub fn with_variant(variant: Variant, output_len: usize) -> Result<Self, Error> {
        let output_len = variant.output_len(output_len)?;
        Ok(Self { variant, output_len })
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Digest size in bytes.
    #[inline]
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Start a context for this selection.
    #[must_use]
    pub fn start(&self) -> Context {
        sb_hash::start(self.variant)
    }
}
