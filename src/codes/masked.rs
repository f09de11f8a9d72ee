/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Masked Rice layout.
//!
//! The quotient *q* = *x* >> `log2_b` and the remainder *r* = *x* & (2^`log2_b`
//! − 1) are computed by shifting and masking. The codeword is *q* ones, a
//! zero terminator, and, only if `log2_b` > 0, *r* written in exactly
//! `log2_b` bits. For `log2_b` = 0 the remainder is always zero and no
//! remainder bits are written, so the code is exactly the unary code.
//!
//! This layout supports the whole range [0 . . 64) of `log2_b`. Writing a
//! value with a very large quotient requires writing the corresponding number
//! of ones, which might not be possible.

use num_traits::ToPrimitive;

use super::params::{check_log2_b, decode_with, encode_with, saturating_len, shift_add, to_natural};
use crate::error::Result;
use crate::impls::BitString;
use crate::traits::*;

/// Returns the length of the masked Rice code for `n` with parameter `log2_b`.
///
/// The length saturates at `usize::MAX`.
#[must_use]
#[inline(always)]
pub fn len_masked(n: u64, log2_b: usize) -> usize {
    saturating_len(n, log2_b, log2_b)
}

/// Trait for reading masked Rice codes.
pub trait MaskedRead: BitRead {
    #[inline]
    fn read_masked(&mut self, log2_b: usize) -> Result<u64> {
        check_log2_b(log2_b)?;
        let q = self.read_unary()?;
        let r = if log2_b > 0 {
            self.read_bits(log2_b)?
        } else {
            0
        };
        shift_add(q, log2_b, r)
    }
}

/// Trait for writing masked Rice codes.
pub trait MaskedWrite: BitWrite {
    #[inline]
    fn write_masked(&mut self, n: u64, log2_b: usize) -> Result<usize> {
        check_log2_b(log2_b)?;
        let mut written_bits = self.write_unary(n >> log2_b)?;
        if log2_b > 0 {
            written_bits += self.write_bits(n & ((1_u64 << log2_b) - 1), log2_b)?;
        }
        Ok(written_bits)
    }
}

impl<B: BitRead + ?Sized> MaskedRead for B {}
impl<B: BitWrite + ?Sized> MaskedWrite for B {}

/// Encode `value` with the masked layout.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if `value`
/// is negative or does not fit a `u64`, or if `log2_b` is at least 64.
pub fn encode<V: ToPrimitive>(log2_b: usize, value: V) -> Result<BitString> {
    let value = to_natural(value)?;
    encode_with(|writer| writer.write_masked(value, log2_b))
}

/// Decode a bit string containing exactly one masked Rice codeword.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if
/// `log2_b` is at least 64;
/// [`MalformedEncoding`](crate::error::RiceError::MalformedEncoding) if `bits`
/// is not a codeword.
pub fn decode(log2_b: usize, bits: impl AsRef<[bool]>) -> Result<u64> {
    check_log2_b(log2_b)?;
    decode_with(bits.as_ref(), |reader| reader.read_masked(log2_b))
}
