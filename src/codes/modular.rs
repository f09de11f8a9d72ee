/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Modular Rice layout.
//!
//! Given 2^`log2_b` = *m*, the quotient *q* = ⌊*x* / *m*⌋ and the remainder *r*
//! = *x* mod *m* are computed by division, as for a general [Golomb
//! code](https://doi.org/10.1109/TIT.1966.1053907). The codeword is *q* ones,
//! a zero terminator, and *r* written in exactly `log2_b` bits.
//!
//! This layout does **not** support `log2_b` = 0: a remainder of width zero
//! cannot be split from the right of the codeword, which is how the layout
//! locates it. Both [`encode`] and [`decode`] reject `log2_b` = 0 with
//! [`ParamError::UnsupportedLog2B`]; use the [masked layout](super::masked)
//! when `log2_b` may be zero.
//!
//! Since the remainder occupies the last `log2_b` bits, a codeword made of
//! exactly `log2_b` bits is decoded as a bare remainder (*q* = 0, terminator
//! omitted). Any longer codeword must contain the terminator.
//!
//! For `log2_b` > 0 the codewords coincide with those of the [masked
//! layout](super::masked).

use num_traits::ToPrimitive;

use super::params::{check_log2_b, decode_with, encode_with, saturating_len, to_natural};
use crate::error::{MalformedError, ParamError, Result};
use crate::impls::BitString;
use crate::traits::*;

/// Returns the length of the modular Rice code for `n` with parameter `log2_b`.
///
/// The length saturates at `usize::MAX`.
#[must_use]
#[inline(always)]
pub fn len_modular(n: u64, log2_b: usize) -> usize {
    saturating_len(n, log2_b, log2_b)
}

/// Check that `log2_b` is in the domain of the modular layout, that is,
/// in [1 . . 64).
#[inline]
fn check_modular_log2_b(log2_b: usize) -> Result<()> {
    check_log2_b(log2_b)?;
    if log2_b == 0 {
        return Err(ParamError::UnsupportedLog2B { log2_b }.into());
    }
    Ok(())
}

/// Trait for reading modular Rice codes.
///
/// If exactly `log2_b` bits are left, they are read as a bare remainder.
pub trait ModularRead: BitRead {
    fn read_modular(&mut self, log2_b: usize) -> Result<u64> {
        check_modular_log2_b(log2_b)?;
        let len = self.bits_left();
        if len < log2_b {
            return Err(MalformedError::TooShort { len, min: log2_b }.into());
        }
        let q = if len == log2_b { 0 } else { self.read_unary()? };
        let r = self.read_bits(log2_b)?;
        let m = 1_u64 << log2_b;
        q.checked_mul(m)
            .and_then(|x| x.checked_add(r))
            .ok_or_else(|| MalformedError::Overflow.into())
    }
}

/// Trait for writing modular Rice codes.
pub trait ModularWrite: BitWrite {
    fn write_modular(&mut self, n: u64, log2_b: usize) -> Result<usize> {
        check_modular_log2_b(log2_b)?;
        let m = 1_u64 << log2_b;
        Ok(self.write_unary(n / m)? + self.write_bits(n % m, log2_b)?)
    }
}

impl<B: BitRead + ?Sized> ModularRead for B {}
impl<B: BitWrite + ?Sized> ModularWrite for B {}

/// Encode `value` with the modular layout.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if `value`
/// is negative or does not fit a `u64`, or if `log2_b` is zero or at least 64.
pub fn encode<V: ToPrimitive>(log2_b: usize, value: V) -> Result<BitString> {
    let value = to_natural(value)?;
    encode_with(|writer| writer.write_modular(value, log2_b))
}

/// Decode a bit string containing exactly one modular Rice codeword.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if
/// `log2_b` is zero or at least 64;
/// [`MalformedEncoding`](crate::error::RiceError::MalformedEncoding) if `bits`
/// is not a codeword.
pub fn decode(log2_b: usize, bits: impl AsRef<[bool]>) -> Result<u64> {
    check_modular_log2_b(log2_b)?;
    decode_with(bits.as_ref(), |reader| reader.read_modular(log2_b))
}
