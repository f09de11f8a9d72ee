/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rice_codes::prelude::*;
use std::error::Error;

const LOG2_BS: [usize; 4] = [10, 12, 13, 14];

fn table_line(i: u32) -> Result<String, RiceError> {
    let value = (1_u64 << i) + 3 * i as u64;
    let mut row = String::new();
    for log2_b in LOG2_BS {
        let bits = Codes::Implicit { log2_b }.encode(value)?;
        row.push_str(&format!(" {:^#40} |", bits));
    }
    Ok(format!("{} {:^#40b} ", row, value))
}

#[test]
fn test_scenarios() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    for (log2_b, value, expected) in [
        (10, 1_u64, "0b00000000001"),
        (10, 4, "0b00000000100"),
        (12, 1, "0b0000000000001"),
        (14, (1 << 15) + 45, "0b11000000000101101"),
    ] {
        let code = Codes::Implicit { log2_b };
        let bits = code.encode(value)?;
        assert_eq!(format!("{:#}", bits), expected);
        assert_eq!(code.decode(expected.parse::<BitString>()?)?, value);
    }
    Ok(())
}

#[test]
fn test_table_lines() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    assert_eq!(
        table_line(0)?,
        "              0b00000000001               |             0b0000000000001              |             0b00000000000001             |            0b000000000000001             |                   0b1                    "
    );
    assert_eq!(
        table_line(5)?,
        "              0b00000101111               |             0b0000000101111              |             0b00000000101111             |            0b000000000101111             |                 0b101111                 "
    );
    // Longer than the column
    assert_eq!(
        table_line(15)?,
        " 0b1111111111111111111111111111111100000101101 |         0b111111110000000101101          |           0b111100000000101101           |           0b11000000000101101            |            0b1000000000101101            "
    );
    Ok(())
}

#[test]
fn test_table_round_trip() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    for i in 0..16 {
        let value = (1_u64 << i) + 3 * i;
        for log2_b in LOG2_BS {
            let code = Codes::Implicit { log2_b };
            let text = format!("{:#}", code.encode(value)?);
            assert_eq!(code.decode(text.parse::<BitString>()?)?, value);
        }
    }
    Ok(())
}
