//! Hashing options shared by the library entry points and the CLI.

use serde::{Deserialize, Serialize};

use crate::{Convert, Error, Selection};

/// `bits` picks the function (see [`Selection::from_bits`]), `convert` the
/// output encoding, and `skip` how many leading serializer write calls
/// [`sha3_value`](crate::sha3_value) discards. Byte and reader inputs
/// ignore `skip`.
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// let opts: secretbase::HashOptions = serde_json::from_str(r#"{"bits": 512}"#).unwrap();
/// assert_eq!(opts.bits, 512);
/// assert_eq!(opts.convert, secretbase::Convert::Hex);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashOptions {
    pub bits: u32,
    pub convert: Convert,
    pub skip: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self { bits: 256, convert: Convert::Hex, skip: 0 }
    }
}

impl HashOptions {
    #[must_use]
    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    #[must_use]
    pub fn convert(mut self, convert: Convert) -> Self {
        self.convert = convert;
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Validate `bits` and resolve the variant.
    pub fn selection(&self) -> Result<Selection, Error> {
        Selection::from_bits(self.bits)
    }
}
