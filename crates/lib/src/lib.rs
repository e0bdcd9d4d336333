//! `secretbase` -- SHA-3 and SHAKE digests of bytes, text, readers and
//! serializable values.
//!
//! The sponge itself lives in [`sb_hash`]; this crate decides which variant
//! to run from a size in bits, turns inputs into byte streams and encodes the
//! result.
//!
//! | `bits` | Function |
//! |--------|----------|
//! | 224, 256, 384, 512 | SHA3 of that size |
//! | any other value in 8..=2^24 | SHAKE256, `bits / 8` bytes |
//!
//! ```
//! use secretbase::{HashOptions, sha3_str};
//!
//! let md = sha3_str("secret base", &HashOptions::default()).unwrap();
//! assert_eq!(md.to_string().len(), 64);
//! ```

#![deny(unsafe_code)]

mod convert;
mod error;
mod options;
mod select;
mod sink;

use std::io::{self, Read};

use serde::Serialize;
use tracing::debug;

pub use convert::{Convert, Output};
pub use error::Error;
pub use options::HashOptions;
pub use sb_hash::{self as hash, Variant};
pub use select::{MAX_BITS, MIN_BITS, Selection};
pub use sink::HashWriter;

/// Hash `data` directly. `options.skip` does not apply: there are no write
/// calls to skip.
pub fn sha3_bytes(data: impl AsRef<[u8]>, options: &HashOptions) -> Result<Output, Error> {
    let selection = options.selection()?;
    let md = selection.start().chain(data).finish(selection.output_len())?;
    Ok(Output::encode(md, options.convert))
}

/// Hash the UTF-8 bytes of `s`, without terminator or length prefix.
pub fn sha3_str(s: &str, options: &HashOptions) -> Result<Output, Error> {
    sha3_bytes(s.as_bytes(), options)
}

/// Hash everything `reader` yields.
///
/// `options.skip` does not apply: how a reader splits its bytes into reads
/// is not part of its content, so the digest only depends on the bytes.
pub fn sha3_reader<R: Read>(mut reader: R, options: &HashOptions) -> Result<Output, Error> {
    let mut sink = HashWriter::new(options.selection()?);
    let n = io::copy(&mut reader, &mut sink)?;
    debug!(bytes = n, "reader drained");
    Ok(Output::encode(sink.finish()?, options.convert))
}

/// Hash the JSON serialization of `value`, streamed straight into the
/// sponge without an intermediate buffer.
///
/// Each fragment the serializer emits is one write call for
/// `options.skip`. A `&str` passed here is hashed as a quoted JSON string;
/// use [`sha3_str`] to hash its raw bytes.
pub fn sha3_value<T: Serialize + ?Sized>(value: &T, options: &HashOptions) -> Result<Output, Error> {
    let mut sink = HashWriter::new(options.selection()?).with_skip(options.skip);
    serde_json::to_writer(&mut sink, value)?;
    Ok(Output::encode(sink.finish()?, options.convert))
}
