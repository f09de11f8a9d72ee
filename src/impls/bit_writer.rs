/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::BitString;
use crate::error::{ParamError, Result};
use crate::traits::*;

/// An implementation of [`BitWrite`] accumulating bits in a [`BitString`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStringWriter {
    bits: BitString,
}

impl BitStringWriter {
    /// Create a new [`BitStringWriter`] with no bits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the bits written so far.
    pub fn into_inner(self) -> BitString {
        self.bits
    }
}

impl BitWrite for BitStringWriter {
    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<usize> {
        self.bits.vec_mut().push(bit);
        Ok(1)
    }

    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize> {
        debug_assert!(n <= 64);
        self.bits
            .vec_mut()
            .extend((0..n).rev().map(|i| (value >> i) & 1 == 1));
        Ok(n)
    }

    fn write_ones(&mut self, n: u64) -> Result<usize> {
        let too_large = ParamError::QuotientTooLarge { quotient: n };
        let len = usize::try_from(n).map_err(|_| too_large)?;
        let bits = self.bits.vec_mut();
        bits.try_reserve(len).map_err(|_| too_large)?;
        bits.resize(bits.len() + len, true);
        Ok(len)
    }
}
