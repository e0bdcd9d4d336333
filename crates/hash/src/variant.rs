//! SHA-3 / SHAKE parameter table.

use core::{fmt, str::FromStr};

use crate::{Error, MAX_XOF_BYTES, SHA3_PAD, SHAKE_PAD, STATE_BYTES};

/// One of the six FIPS 202 instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Shake128,
    Shake256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

/// Sponge parameters bound to a [`Variant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantParams {
    /// Rate in bits. Rate plus capacity is always 1600.
    pub rate_bits: usize,
    /// Digest size in bits, or 0 for an XOF.
    pub fixed_output_bits: usize,
    /// Domain separation suffix XORed in at finalization.
    pub domain_suffix: u8,
}

impl VariantParams {
    /// Rate in bytes.
    #[inline]
    #[must_use]
    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits / 8
    }

    /// Capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity_bytes(&self) -> usize {
        STATE_BYTES - self.rate_bytes()
    }

    /// Fixed digest size in bytes, `None` for an XOF.
    #[inline]
    #[must_use]
    pub const fn fixed_output_bytes(&self) -> Option<usize> {
        match self.fixed_output_bits {
            0 => None,
            bits => Some(bits / 8),
        }
    }
}

impl Variant {
    /// Every variant, XOFs first.
    pub const ALL: [Self; 6] = [
        Self::Shake128,
        Self::Shake256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Parameters for this variant.
    #[must_use]
    pub const fn params(self) -> VariantParams {
        let (rate_bits, fixed_output_bits, domain_suffix) = match self {
            Self::Shake128 => (1344, 0, SHAKE_PAD),
            Self::Shake256 => (1088, 0, SHAKE_PAD),
            Self::Sha3_224 => (1152, 224, SHA3_PAD),
            Self::Sha3_256 => (1088, 256, SHA3_PAD),
            Self::Sha3_384 => (832, 384, SHA3_PAD),
            Self::Sha3_512 => (576, 512, SHA3_PAD),
        };
        VariantParams { rate_bits, fixed_output_bits, domain_suffix }
    }

    /// Whether the output length is chosen at finalization.
    #[inline]
    #[must_use]
    pub const fn is_xof(self) -> bool {
        matches!(self, Self::Shake128 | Self::Shake256)
    }

    /// Canonical lowercase name, e.g. `sha3-256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shake128 => "shake128",
            Self::Shake256 => "shake256",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        }
    }

    /// Resolve the number of bytes `finish` will produce.
    ///
    /// Fixed-digest variants ignore `requested` and always yield their digest
    /// size. XOFs accept `1..=MAX_XOF_BYTES`.
    pub const fn output_len(self, requested: usize) -> Result<usize, Error> {
        match self.params().fixed_output_bytes() {
            Some(len) => Ok(len),
            None if requested >= 1 && requested <= MAX_XOF_BYTES => Ok(requested),
            None => Err(Error::InvalidOutputLength { requested, min: 1, max: MAX_XOF_BYTES }),
        }
    }

    /// Check that a caller buffer of `len` bytes is a valid output target.
    ///
    /// Unlike [`output_len`](Self::output_len) this is strict for fixed
    /// digests: the buffer must be exactly the digest size.
    pub const fn check_output_buf(self, len: usize) -> Result<(), Error> {
        match self.params().fixed_output_bytes() {
            Some(fixed) if len == fixed => Ok(()),
            Some(fixed) => Err(Error::InvalidOutputLength { requested: len, min: fixed, max: fixed }),
            None => match self.output_len(len) {
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the canonical names case-insensitively, with an optional `-`
    /// or `_` between the family and the size (`SHA3_256`, `sha3256`,
    /// `Shake128`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (xof, rest) = if let Some(rest) = strip_prefix_ignore_case(s, "shake") {
            (true, rest)
        } else if let Some(rest) = strip_prefix_ignore_case(s, "sha3") {
            (false, rest)
        } else {
            return Err(Error::UnknownVariant);
        };
        let size = rest.strip_prefix(['-', '_']).unwrap_or(rest);
        match (xof, size) {
            (true, "128") => Ok(Self::Shake128),
            (true, "256") => Ok(Self::Shake256),
            (false, "224") => Ok(Self::Sha3_224),
            (false, "256") => Ok(Self::Sha3_256),
            (false, "384") => Ok(Self::Sha3_384),
            (false, "512") => Ok(Self::Sha3_512),
            _ => Err(Error::UnknownVariant),
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

const _: () = {
    let mut i = 0;
    while i < Variant::ALL.len() {
        let p = Variant::ALL[i].params();
        assert!(p.rate_bits % 64 == 0);
        assert!(p.rate_bits + p.capacity_bytes() * 8 == 1600);
        // capacity is twice the security level
        assert!(p.fixed_output_bits == 0 || p.capacity_bytes() * 8 == 2 * p.fixed_output_bits);
        assert!(Variant::ALL[i].is_xof() == (p.fixed_output_bits == 0));
        assert!(Variant::ALL[i].is_xof() == (p.domain_suffix == SHAKE_PAD));
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_in_bytes() {
        let rates: [usize; 6] = Variant::ALL.map(|v| v.params().rate_bytes());
        assert_eq!(rates, [168, 136, 144, 136, 104, 72]);
    }

    #[test]
    fn fixed_output_sizes() {
        let sizes = Variant::ALL.map(|v| v.params().fixed_output_bytes());
        assert_eq!(sizes, [None, None, Some(28), Some(32), Some(48), Some(64)]);
    }

    #[test]
    fn suffixes() {
        for v in Variant::ALL {
            let expected = if v.is_xof() { 0x1F } else { 0x06 };
            assert_eq!(v.params().domain_suffix, expected, "{v}");
        }
    }

    #[test]
    fn params_are_idempotent() {
        for v in Variant::ALL {
            assert_eq!(v.params(), v.params());
        }
    }

    #[test]
    fn output_len_forced_for_fixed() {
        assert_eq!(Variant::Sha3_256.output_len(0), Ok(32));
        assert_eq!(Variant::Sha3_512.output_len(7), Ok(64));
    }

    #[test]
    fn output_len_bounds_for_xof() {
        assert_eq!(Variant::Shake128.output_len(1), Ok(1));
        assert_eq!(Variant::Shake256.output_len(MAX_XOF_BYTES), Ok(MAX_XOF_BYTES));
        assert!(matches!(
            Variant::Shake128.output_len(0),
            Err(Error::InvalidOutputLength { requested: 0, .. })
        ));
        assert!(Variant::Shake256.output_len(MAX_XOF_BYTES + 1).is_err());
    }

    #[test]
    fn output_buf_strict_for_fixed() {
        assert!(Variant::Sha3_224.check_output_buf(28).is_ok());
        assert_eq!(
            Variant::Sha3_224.check_output_buf(32),
            Err(Error::InvalidOutputLength { requested: 32, min: 28, max: 28 })
        );
        assert!(Variant::Shake128.check_output_buf(1000).is_ok());
        assert!(Variant::Shake128.check_output_buf(0).is_err());
    }

    #[test]
    fn parse_names() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(v));
        }
        assert_eq!("SHA3_256".parse::<Variant>(), Ok(Variant::Sha3_256));
        assert_eq!("Shake-128".parse::<Variant>(), Ok(Variant::Shake128));
        assert_eq!("sha3-1024".parse::<Variant>(), Err(Error::UnknownVariant));
        assert_eq!("keccak256".parse::<Variant>(), Err(Error::UnknownVariant));
        assert_eq!("".parse::<Variant>(), Err(Error::UnknownVariant));
    }

    #[test]
    fn separator_only_between_family_and_size() {
        assert_eq!("sha3_512".parse::<Variant>(), Ok(Variant::Sha3_512));
        assert_eq!("SHAKE256".parse::<Variant>(), Ok(Variant::Shake256));
        let bad_names =
            ["sha3_2_56", "s-h-a-k-e-128", "sha3--256", "-sha3-256", "sha3-256-", "shake_", "sha3"];
        for bad in bad_names {
            assert_eq!(bad.parse::<Variant>(), Err(Error::UnknownVariant), "{bad}");
        }
        // multi-byte input must not split a char
        assert_eq!("shaké128".parse::<Variant>(), Err(Error::UnknownVariant));
    }
}
