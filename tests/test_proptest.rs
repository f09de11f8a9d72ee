/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use proptest::prelude::*;
use rice_codes::prelude::*;

fn code() -> impl Strategy<Value = Codes> {
    prop_oneof![
        (1..64_usize).prop_map(|log2_b| Codes::Modular { log2_b }),
        (0..64_usize).prop_map(|log2_b| Codes::Masked { log2_b }),
        (0..64_usize).prop_map(|log2_b| Codes::Implicit { log2_b }),
    ]
}

proptest! {
    #[test]
    fn test_round_trip(code in code(), q in 0..500_u64, r in any::<u64>()) {
        let log2_b = code.log2_b();
        let q = q.min(u64::MAX >> log2_b);
        let value = (q << log2_b) | (r & ((1_u64 << log2_b) - 1));
        let bits = code.encode(value).unwrap();
        prop_assert_eq!(bits.len(), code.len(value));
        prop_assert_eq!(bits.leading_ones() as u64, q);
        prop_assert_eq!(code.decode(&bits).unwrap(), value);
    }

    #[test]
    fn test_monotonic_length(code in code(), a in 0..1_000_000_u64, b in 0..1_000_000_u64) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(code.len(lo) <= code.len(hi));
    }

    #[test]
    fn test_zero(code in code()) {
        let bits = code.encode(0).unwrap();
        prop_assert_eq!(bits.leading_ones(), 0);
        prop_assert_eq!(code.decode(&bits).unwrap(), 0);
    }

    #[test]
    fn test_layouts_agree(log2_b in 1..64_usize, q in 0..200_u64, r in any::<u64>()) {
        let q = q.min(u64::MAX >> log2_b);
        let value = (q << log2_b) | (r & ((1_u64 << log2_b) - 1));
        let bits = Codes::Masked { log2_b }.encode(value).unwrap();
        prop_assert_eq!(Codes::Modular { log2_b }.decode(&bits).unwrap(), value);
        prop_assert_eq!(Codes::Implicit { log2_b }.decode(&bits).unwrap(), value);
    }

    #[test]
    fn test_decode_never_panics(code in code(), bits in prop::collection::vec(any::<bool>(), 0..200)) {
        if let Ok(value) = code.decode(&bits) {
            // A decoded string is never longer than the canonical codeword
            prop_assert!(code.len(value) >= bits.len());
        }
    }

    #[test]
    fn test_masked_is_canonical(log2_b in 0..64_usize, bits in prop::collection::vec(any::<bool>(), 0..200)) {
        let code = Codes::Masked { log2_b };
        if let Ok(value) = code.decode(&bits) {
            let codeword = code.encode(value).unwrap();
            prop_assert_eq!(codeword.as_slice(), &bits[..]);
        }
    }

    #[test]
    fn test_signed_round_trip(log2_b in 50..64_usize, value in any::<i64>()) {
        let code = Codes::Masked { log2_b };
        let bits = code.encode_signed(value).unwrap();
        prop_assert_eq!(code.decode_signed(&bits).unwrap(), value);
    }

    #[test]
    fn test_bit_string_text(bits in prop::collection::vec(any::<bool>(), 0..100)) {
        let bits = BitString::from(bits);
        prop_assert_eq!(bits.to_string().parse::<BitString>().unwrap(), bits.clone());
        prop_assert_eq!(format!("{:#}", bits).parse::<BitString>().unwrap(), bits);
    }

    #[test]
    fn test_codes_text(code in code()) {
        prop_assert_eq!(code.to_string().parse::<Codes>().unwrap(), code);
    }
}
