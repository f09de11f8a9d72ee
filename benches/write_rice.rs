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
use std::time::Duration;

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
        c.bench_function(&format!("encode {}", code), |b| {
            b.iter(|| {
                for &value in &values {
                    black_box(code.encode(black_box(value)).unwrap());
                }
            })
        });

        c.bench_function(&format!("write {}", code), |b| {
            b.iter(|| {
                let mut writer = BitStringWriter::new();
                for &value in &values {
                    code.write(&mut writer, black_box(value)).unwrap();
                }
                black_box(writer.into_inner())
            })
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1));
    targets = criterion_benchmark
}
criterion_main!(benches);
