//! Digest output encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a digest is handed back to the caller.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Convert {
    /// The digest bytes unchanged.
    Raw,
    /// Lowercase hex, two characters per byte, no separators.
    #[default]
    Hex,
    /// Native-endian 32-bit words; a trailing partial word is dropped.
    Words,
}

/// An encoded digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Raw(Vec<u8>),
    Hex(String),
    Words(Vec<i32>),
}

impl Output {
    /// Encode `digest` according to `convert`.
    #[must_use]
    pub fn encode(digest: Vec<u8>, convert: Convert) -> Self {
        match convert {
            Convert::Raw => Self::Raw(digest),
            Convert::Hex => Self::Hex(hex::encode(&digest)),
            Convert::Words => Self::Words(
                digest
                    .chunks_exact(4)
                    .map(|w| i32::from_ne_bytes([w[0], w[1], w[2], w[3]]))
                    .collect(),
            ),
        }
    }

    /// The encoding that produced this output.
    #[must_use]
    pub fn convert(&self) -> Convert {
        match self {
            Self::Raw(_) => Convert::Raw,
            Self::Hex(_) => Convert::Hex,
            Self::Words(_) => Convert::Words,
        }
    }

    #[must_use]
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Hex(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_words(&self) -> Option<&[i32]> {
        match self {
            Self::Words(w) => Some(w),
            _ => None,
        }
    }
}

/// Hex for `Raw` and `Hex`, space-separated integers for `Words`.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(b) => f.write_str(&hex::encode(b)),
            Self::Hex(s) => f.write_str(s),
            Self::Words(words) => {
                for (i, w) in words.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{w}")?;
                }
                Ok(())
            }
        }
    }
}
