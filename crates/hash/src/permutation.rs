//! Keccak-f[1600] permutation (FIPS 202 §3.3).
//!
//! Lanes are indexed `x + 5 * y`, so a "column" is every fifth lane and a
//! "row" is five consecutive lanes.

use crate::PLEN;

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Iota round constants.
pub const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets for lanes `1..25` (lane 0 is never rotated).
pub const RHO: [u32; PLEN - 1] = [
    1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Pi destination walk. Starting with lane 1 in hand, each step swaps the
/// carried lane into `PI[i]` and picks up what was there.
pub const PI: [usize; PLEN - 1] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

#[inline(always)]
fn theta(s: &mut [u64; PLEN]) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = s[x] ^ s[x + 5] ^ s[x + 10] ^ s[x + 15] ^ s[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..PLEN).step_by(5) {
            s[x + y] ^= d;
        }
    }
}

#[inline(always)]
fn rho(s: &mut [u64; PLEN]) {
    for (lane, &r) in s[1..].iter_mut().zip(RHO.iter()) {
        *lane = lane.rotate_left(r);
    }
}

#[inline(always)]
fn pi(s: &mut [u64; PLEN]) {
    let mut carry = s[1];
    for &dst in &PI {
        core::mem::swap(&mut s[dst], &mut carry);
    }
}

#[inline(always)]
fn chi(s: &mut [u64; PLEN]) {
    for y in (0..PLEN).step_by(5) {
        let row = [s[y], s[y + 1], s[y + 2], s[y + 3], s[y + 4]];
        for x in 0..5 {
            s[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

/// Apply the 24-round Keccak-f[1600] permutation to `state` in place.
pub fn keccak_f1600(state: &mut [u64; PLEN]) {
    for rc in RC {
        theta(state);
        rho(state);
        pi(state);
        chi(state);
        // iota
        state[0] ^= rc;
    }
}
