/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rice_codes::prelude::*;
use std::hint::black_box;

const LOG2_B: usize = 6;
const N: usize = 10_000;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let values = sample_implied_rice(LOG2_B, &mut r)
        .expect("valid log2_b")
        .take(N)
        .collect::<Vec<_>>();

    for code in [
        Codes::Modular { log2_b: LOG2_B },
        Codes::Masked { log2_b: LOG2_B },
        Codes::Implicit { log2_b: LOG2_B },
    ] {
        let codewords = values
            .iter()
            .map(|&value| code.encode(value).unwrap())
            .collect::<Vec<_>>();
        c.bench_function(&format!("decode {}", code), |b| {
            b.iter(|| {
                for bits in &codewords {
                    black_box(code.decode(black_box(bits)).unwrap());
                }
            })
        });

        let mut writer = BitStringWriter::new();
        for &value in &values {
            code.write(&mut writer, value).unwrap();
        }
        let stream = writer.into_inner();
        c.bench_function(&format!("read {}", code), |b| {
            b.iter(|| {
                let mut reader = stream.reader();
                for _ in 0..N {
                    black_box(code.read(&mut reader).unwrap());
                }
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
