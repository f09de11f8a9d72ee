/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{MalformedError, Result};
use crate::traits::*;

/// An implementation of [`BitRead`] for a slice of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStringReader<'a> {
    bits: &'a [bool],
    bit_index: usize,
}

impl<'a> BitStringReader<'a> {
    /// Create a new [`BitStringReader`] positioned on the first bit of `bits`.
    #[must_use]
    pub fn new(bits: &'a [bool]) -> Self {
        Self { bits, bit_index: 0 }
    }

    /// Return the number of bits read so far.
    #[must_use]
    #[inline(always)]
    pub fn bit_pos(&self) -> usize {
        self.bit_index
    }

    fn too_short(&self, n: usize) -> MalformedError {
        MalformedError::TooShort {
            len: self.bits.len(),
            min: self.bit_index + n,
        }
    }
}

impl BitRead for BitStringReader<'_> {
    #[inline]
    fn read_bit(&mut self) -> Result<bool> {
        let bit = *self.bits.get(self.bit_index).ok_or(self.too_short(1))?;
        self.bit_index += 1;
        Ok(bit)
    }

    fn read_bits(&mut self, n: usize) -> Result<u64> {
        debug_assert!(n <= 64);
        if n > self.bits_left() {
            return Err(self.too_short(n).into());
        }
        let value = self.bits[self.bit_index..self.bit_index + n]
            .iter()
            .fold(0_u64, |acc, &bit| (acc << 1) | bit as u64);
        self.bit_index += n;
        Ok(value)
    }

    #[inline(always)]
    fn bits_left(&self) -> usize {
        self.bits.len() - self.bit_index
    }

    fn read_unary(&mut self) -> Result<u64> {
        let rest = &self.bits[self.bit_index..];
        match rest.iter().position(|&bit| !bit) {
            Some(ones) => {
                self.bit_index += ones + 1;
                Ok(ones as u64)
            }
            None => {
                self.bit_index = self.bits.len();
                Err(MalformedError::MissingTerminator {
                    ones: rest.len() as u64,
                }
                .into())
            }
        }
    }
}
