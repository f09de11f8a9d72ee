/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "fuzz")]

use arbitrary::{Arbitrary, Unstructured};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rice_codes::fuzz::codes::*;

#[test]
fn test_fuzz_harness_random_inputs() {
    let mut rng = SmallRng::seed_from_u64(0);
    for len in [0, 16, 256, 4096] {
        for _ in 0..50 {
            let mut data = vec![0_u8; len];
            rng.fill_bytes(&mut data);
            let mut u = Unstructured::new(&data);
            if let Ok(case) = FuzzCase::arbitrary(&mut u) {
                harness(case);
            }
        }
    }
}
