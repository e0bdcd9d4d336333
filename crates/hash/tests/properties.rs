//! Structural properties of the sponge that hold for any input.

#![cfg(feature = "alloc")]

use proptest::prelude::*;
use sb_hash::{Variant, digest, start};

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chunking_does_not_change_digest(
        variant in any_variant(),
        msg in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(msg.len() + 1)).collect();
        points.sort_unstable();

        let mut ctx = start(variant);
        let mut prev = 0;
        for p in points {
            ctx.update(&msg[prev..p]);
            prev = p;
        }
        ctx.update(&msg[prev..]);

        prop_assert_eq!(ctx.finish(40).unwrap(), digest(&msg, variant, 40).unwrap());
    }

    #[test]
    fn xof_output_is_a_prefix(
        shake128 in any::<bool>(),
        msg in prop::collection::vec(any::<u8>(), 0..300),
        n in 1usize..400,
        k in 0usize..400,
    ) {
        let variant = if shake128 { Variant::Shake128 } else { Variant::Shake256 };
        let short = digest(&msg, variant, n).unwrap();
        let long = digest(&msg, variant, n + k).unwrap();
        prop_assert_eq!(short.len(), n);
        prop_assert_eq!(long.len(), n + k);
        prop_assert_eq!(&long[..n], &short[..]);
    }

    #[test]
    fn fixed_digest_lengths(variant in any_variant(), msg in prop::collection::vec(any::<u8>(), 0..300)) {
        let md = digest(&msg, variant, 123).unwrap();
        let expected = variant.params().fixed_output_bytes().unwrap_or(123);
        prop_assert_eq!(md.len(), expected);
    }
}

/// Flipping one input bit should flip about half of the output bits.
#[test]
fn avalanche() {
    let base: Vec<u8> = (0..64u8).collect();
    for variant in Variant::ALL {
        let reference = digest(&base, variant, 64).unwrap();
        let total_bits = reference.len() * 8;
        let mut flipped_sum = 0usize;
        let trials = base.len() * 8;
        for bit in 0..trials {
            let mut msg = base.clone();
            msg[bit / 8] ^= 1 << (bit % 8);
            let md = digest(&msg, variant, 64).unwrap();
            let flipped: u32 = md.iter().zip(&reference).map(|(a, b)| (a ^ b).count_ones()).sum();
            // each individual flip stays well away from 0% and 100%
            assert!(flipped as usize > total_bits / 4, "{variant} bit={bit} flipped={flipped}");
            assert!((flipped as usize) < total_bits * 3 / 4, "{variant} bit={bit} flipped={flipped}");
            flipped_sum += flipped as usize;
        }
        let mean = flipped_sum as f64 / trials as f64;
        let half = total_bits as f64 / 2.0;
        assert!((mean - half).abs() < half * 0.05, "{variant} mean={mean} expected≈{half}");
    }
}

#[test]
fn domain_suffix_separates_same_rate_variants() {
    // SHA3-256 and SHAKE256 share rate 136; only the suffix differs
    let sha = digest(b"separation", Variant::Sha3_256, 0).unwrap();
    let shake = digest(b"separation", Variant::Shake256, 32).unwrap();
    assert_ne!(sha, shake);
}

#[test]
fn contexts_are_independent_across_threads() {
    let handles: Vec<_> = Variant::ALL
        .into_iter()
        .map(|v| std::thread::spawn(move || (v, digest(v.name(), v, 32).unwrap())))
        .collect();
    for h in handles {
        let (v, md) = h.join().unwrap();
        assert_eq!(md, digest(v.name(), v, 32).unwrap());
    }
}
