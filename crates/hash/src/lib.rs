//! Keccak-f[1600] sponge and the FIPS 202 hash family.
//!
//! | Function | Rate (bytes) | Output |
//! |----------|--------------|--------|
//! | SHAKE128 | 168 | caller-chosen |
//! | SHAKE256 | 136 | caller-chosen |
//! | SHA3-224 | 144 | 28 bytes |
//! | SHA3-256 | 136 | 32 bytes |
//! | SHA3-384 | 104 | 48 bytes |
//! | SHA3-512 | 72 | 64 bytes |
//!
//! All six share one byte-oriented sponge ([`Context`]); they differ only in
//! rate, output length and the domain suffix XORed in at finalization.
//!
//! ```
//! use sb_hash::{Variant, start};
//!
//! let mut ctx = start(Variant::Sha3_256);
//! ctx.update(b"ab");
//! ctx.update(b"c");
//! let mut md = [0u8; 32];
//! ctx.finish_into(&mut md).unwrap();
//! assert_eq!(&md[..4], &[0x3a_u8, 0x98, 0x5d, 0xa7]);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

mod error;
mod lane;
mod permutation;
mod reader;
mod sponge;
mod variant;

pub use error::Error;
pub use permutation::keccak_f1600;
pub use reader::XofReader;
pub use sponge::Context;
pub use variant::{Variant, VariantParams};

/// Number of 64-bit lanes in the Keccak state.
pub const PLEN: usize = 25;

/// Keccak state size in bytes.
pub const STATE_BYTES: usize = PLEN * 8;

pub const SHAKE128_RATE: usize = 168;
pub const SHAKE256_RATE: usize = 136;
pub const SHA3_224_RATE: usize = 144;
pub const SHA3_256_RATE: usize = 136;
pub const SHA3_384_RATE: usize = 104;
pub const SHA3_512_RATE: usize = 72;

/// Largest SHAKE output accepted in one request: 2^24 bits.
pub const MAX_XOF_BYTES: usize = 1 << 21;

const SHAKE_PAD: u8 = 0x1F;
const SHA3_PAD: u8 = 0x06;

/// Start a streaming computation.
#[inline]
#[must_use]
pub fn start(variant: Variant) -> Context {
    Context::new(variant)
}

/// One-shot digest of `data`.
///
/// `output_len` is the SHAKE output size in bytes and is ignored for SHA3.
/// It is validated before any input is absorbed.
#[cfg(feature = "alloc")]
pub fn digest(
    data: impl AsRef<[u8]>, variant: Variant, output_len: usize,
) -> Result<alloc::vec::Vec<u8>, Error> {
    variant.output_len(output_len)?;
    start(variant).chain(data).finish(output_len)
}

/// One-shot digest of `data` into `out`. See [`Context::finish_into`].
pub fn digest_into(data: impl AsRef<[u8]>, variant: Variant, out: &mut [u8]) -> Result<(), Error> {
    variant.check_output_buf(out.len())?;
    start(variant).chain(data).finish_into(out)
}

macro_rules! fixed_digest {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $len:literal) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(input: impl AsRef<[u8]>) -> [u8; $len] {
            let mut out = [0u8; $len];
            start(Variant::$variant).chain(input).squeeze_unchecked(&mut out);
            out
        }
    };
}

fixed_digest!(
    /// SHA3-224(input) -> 28 bytes.
    sha3_224, Sha3_224, 28
);
fixed_digest!(
    /// SHA3-256(input) -> 32 bytes.
    sha3_256, Sha3_256, 32
);
fixed_digest!(
    /// SHA3-384(input) -> 48 bytes.
    sha3_384, Sha3_384, 48
);
fixed_digest!(
    /// SHA3-512(input) -> 64 bytes.
    sha3_512, Sha3_512, 64
);

/// SHAKE128(input), squeezed to fill `output`.
pub fn shake128(input: impl AsRef<[u8]>, output: &mut [u8]) -> Result<(), Error> {
    digest_into(input, Variant::Shake128, output)
}

/// SHAKE256(input), squeezed to fill `output`.
pub fn shake256(input: impl AsRef<[u8]>, output: &mut [u8]) -> Result<(), Error> {
    digest_into(input, Variant::Shake256, output)
}

const _: () = {
    assert!(Variant::Shake128.params().rate_bytes() == SHAKE128_RATE);
    assert!(Variant::Shake256.params().rate_bytes() == SHAKE256_RATE);
    assert!(Variant::Sha3_224.params().rate_bytes() == SHA3_224_RATE);
    assert!(Variant::Sha3_256.params().rate_bytes() == SHA3_256_RATE);
    assert!(Variant::Sha3_384.params().rate_bytes() == SHA3_384_RATE);
    assert!(Variant::Sha3_512.params().rate_bytes() == SHA3_512_RATE);
};
