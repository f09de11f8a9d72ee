/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{ParamError, RiceError};
use crate::prelude::*;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use arbitrary::Arbitrary;

/// Largest quotient written by the harness.
const MAX_QUOTIENT: u64 = 300;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Encode(Codes, u64),
    Decode(Codes, Vec<bool>),
    Parse(String),
}

fn clamp(code: &mut Codes, value: &mut u64) {
    let log2_b = code.log2_b() % 64;
    *code = match *code {
        Codes::Modular { .. } => Codes::Modular { log2_b },
        Codes::Masked { .. } => Codes::Masked { log2_b },
        Codes::Implicit { .. } => Codes::Implicit { log2_b },
    };
    let q = (*value >> log2_b).min(MAX_QUOTIENT).min(u64::MAX >> log2_b);
    *value = (q << log2_b) | (*value & ((1_u64 << log2_b) - 1));
}

fn unsupported(code: Codes) -> bool {
    matches!(code, Codes::Modular { log2_b: 0 })
}

pub fn harness(data: FuzzCase) {
    let mut data = data;
    for command in &mut data.commands {
        match command {
            RandomCommand::Encode(code, value) => clamp(code, value),
            RandomCommand::Decode(code, _) => clamp(code, &mut 0),
            RandomCommand::Parse(_) => {}
        }
    }

    tracing::debug!(?data, "fuzz case");

    let mut writer = BitStringWriter::new();
    let mut writes = Vec::new();
    for command in &data.commands {
        match command {
            RandomCommand::Encode(code, value) => {
                let (code, value) = (*code, *value);
                let result = code.encode(value);
                if unsupported(code) {
                    assert_eq!(
                        result,
                        Err(RiceError::from(ParamError::UnsupportedLog2B { log2_b: 0 }))
                    );
                    continue;
                }
                let bits = result.unwrap();
                assert_eq!(bits.len(), code.len(value));
                assert_eq!(code.decode(&bits).unwrap(), value);
                if code.log2_b() > 0 {
                    let log2_b = code.log2_b();
                    for other in [
                        Codes::Modular { log2_b },
                        Codes::Masked { log2_b },
                        Codes::Implicit { log2_b },
                    ] {
                        assert_eq!(other.encode(value).unwrap(), bits);
                    }
                }
                assert_eq!(code.write(&mut writer, value).unwrap(), bits.len());
                writes.push((code, value));
            }
            RandomCommand::Decode(code, bits) => {
                let code = *code;
                let result = code.decode(&*bits);
                if unsupported(code) {
                    assert!(result.is_err());
                    continue;
                }
                if let Ok(value) = result {
                    match code {
                        // Masked codewords are unique
                        Codes::Masked { .. } => {
                            assert_eq!(code.encode(value).unwrap().as_slice(), &bits[..]);
                        }
                        Codes::Modular { log2_b } if bits.len() > log2_b => {
                            assert_eq!(code.encode(value).unwrap().as_slice(), &bits[..]);
                        }
                        _ => assert!(code.len(value) >= bits.len()),
                    }
                }
            }
            RandomCommand::Parse(s) => {
                if let Ok(code) = s.parse::<Codes>() {
                    assert_eq!(code.to_string().parse::<Codes>().unwrap(), code);
                }
            }
        }
    }

    // All codewords can be read back from a single stream
    let bits = writer.into_inner();
    let mut reader = bits.reader();
    for (code, value) in writes {
        assert_eq!(code.read(&mut reader).unwrap(), value);
    }
    assert_eq!(reader.bits_left(), 0);
}
