/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implicit-terminator Rice layout.
//!
//! The quotient *q* = *x* >> `log2_b` is written as *q* ones with no separate
//! terminator, immediately followed by the remainder *r* = *x* & (2^`log2_b`
//! − 1) written in `log2_b` + 1 bits. Since *r* < 2^`log2_b`, the leading bit
//! of the remainder field is always zero, and the decoder uses it as the
//! boundary of the unary part.
//!
//! When decoding, the bits following the boundary are read as the remainder
//! even if there are fewer than `log2_b` of them (in particular, none).
//! More than `log2_b` bits after the boundary are rejected.
//!
//! The codewords produced coincide bit by bit with those of the [masked
//! layout](super::masked); the layouts differ in how codewords are decoded.

use num_traits::ToPrimitive;

use super::params::{check_log2_b, decode_with, encode_with, saturating_len, shift_add, to_natural};
use crate::error::Result;
use crate::impls::BitString;
use crate::traits::*;

/// Returns the length of the implicit Rice code for `n` with parameter
/// `log2_b`.
///
/// The length saturates at `usize::MAX`.
#[must_use]
#[inline(always)]
pub fn len_implicit(n: u64, log2_b: usize) -> usize {
    saturating_len(n, log2_b, log2_b)
}

/// Trait for reading implicit Rice codes.
///
/// The read consumes at most `log2_b` bits after the boundary.
pub trait ImplicitRead: BitRead {
    fn read_implicit(&mut self, log2_b: usize) -> Result<u64> {
        check_log2_b(log2_b)?;
        // Ones up to the leading zero of the remainder field
        let q = self.read_unary()?;
        let width = self.bits_left().min(log2_b);
        let r = self.read_bits(width)?;
        shift_add(q, log2_b, r)
    }
}

/// Trait for writing implicit Rice codes.
pub trait ImplicitWrite: BitWrite {
    fn write_implicit(&mut self, n: u64, log2_b: usize) -> Result<usize> {
        check_log2_b(log2_b)?;
        let r = n & ((1_u64 << log2_b) - 1);
        Ok(self.write_ones(n >> log2_b)? + self.write_bits(r, log2_b + 1)?)
    }
}

impl<B: BitRead + ?Sized> ImplicitRead for B {}
impl<B: BitWrite + ?Sized> ImplicitWrite for B {}

/// Encode `value` with the implicit layout.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if `value`
/// is negative or does not fit a `u64`, or if `log2_b` is at least 64.
pub fn encode<V: ToPrimitive>(log2_b: usize, value: V) -> Result<BitString> {
    let value = to_natural(value)?;
    encode_with(|writer| writer.write_implicit(value, log2_b))
}

/// Decode a bit string containing exactly one implicit Rice codeword.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if
/// `log2_b` is at least 64;
/// [`MalformedEncoding`](crate::error::RiceError::MalformedEncoding) if `bits`
/// is empty, contains no zero, or has more than `log2_b` bits after the first
/// zero.
pub fn decode(log2_b: usize, bits: impl AsRef<[bool]>) -> Result<u64> {
    check_log2_b(log2_b)?;
    decode_with(bits.as_ref(), |reader| reader.read_implicit(log2_b))
}
