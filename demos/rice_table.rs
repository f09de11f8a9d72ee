/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Prints a table comparing implicit Rice codewords for a few values of
//! `log2_b` on values of the form 2^i + 3i.

use rice_codes::prelude::*;

const N: u32 = 16;
const LOG2_BS: [usize; 4] = [10, 12, 13, 14];

fn main() -> Result<(), RiceError> {
    println!(
        " {:^40} | {:^40} | {:^40} | {:^40} | {:^40} ",
        LOG2_BS[0], LOG2_BS[1], LOG2_BS[2], LOG2_BS[3], "bin"
    );
    for i in 0..N {
        let value = (1_u64 << i) + 3 * i as u64;
        let mut row = String::new();
        for log2_b in LOG2_BS {
            let bits = Codes::Implicit { log2_b }.encode(value)?;
            row.push_str(&format!(" {:^#40} |", bits));
        }
        println!("{} {:^#40b} ", row, value);
    }
    Ok(())
}
