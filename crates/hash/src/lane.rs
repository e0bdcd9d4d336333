//! Byte addressing into the lane array.
//!
//! FIPS 202 maps state byte `i` to lane `i / 8`, with byte `i % 8` of that
//! lane in little-endian position (byte 0 is the least significant). Both
//! absorb and squeeze go through these helpers, so this mapping is the one
//! place the byte order is decided.

use crate::PLEN;

/// Bit shift that places byte `index % 8` inside its lane.
#[inline(always)]
const fn shift(index: usize) -> u32 {
    ((index & 7) << 3) as u32
}

/// XOR `byte` into state byte `index`.
#[inline(always)]
pub(crate) fn xor_byte(state: &mut [u64; PLEN], index: usize, byte: u8) {
    state[index >> 3] ^= u64::from(byte) << shift(index);
}

/// Read state byte `index`.
#[inline(always)]
pub(crate) fn read_byte(state: &[u64; PLEN], index: usize) -> u8 {
    (state[index >> 3] >> shift(index)) as u8
}

/// XOR one full rate block into the leading lanes.
///
/// `block.len()` must be a multiple of 8; every SHA-3 and SHAKE rate is.
#[inline]
pub(crate) fn xor_block(state: &mut [u64; PLEN], block: &[u8]) {
    debug_assert!(block.len() % 8 == 0);
    for (b, s) in block.chunks_exact(8).zip(state.iter_mut()) {
        *s ^= u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }
}
