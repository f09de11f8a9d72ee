/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Validation of parameters and of decoded values.

Functions in this module are of no interest for the standard user: they
implement the checks shared by all layouts, so that every layout rejects the
same inputs with the same error.

*/

use num_traits::ToPrimitive;

use crate::error::{MalformedError, ParamError, Result};
use crate::impls::{BitString, BitStringReader, BitStringWriter};
use crate::traits::*;

/// Check that 2^`log2_b` fits a `u64`.
#[inline]
pub fn check_log2_b(log2_b: usize) -> Result<()> {
    if log2_b >= 64 {
        return Err(ParamError::Log2BTooLarge { log2_b }.into());
    }
    Ok(())
}

/// Convert `value` to a natural number, rejecting negative values and values
/// that do not fit a `u64`.
#[inline]
pub fn to_natural<V: ToPrimitive>(value: V) -> Result<u64> {
    Ok(value.to_u64().ok_or(ParamError::NotNatural)?)
}

/// Return `(q << log2_b) + r`, or [`MalformedError::Overflow`] if the result
/// does not fit a `u64`.
///
/// `log2_b` must be less than 64 and `r` less than 2^`log2_b`.
#[inline]
pub fn shift_add(q: u64, log2_b: usize, r: u64) -> Result<u64> {
    debug_assert!(log2_b < 64);
    if q > u64::MAX >> log2_b {
        return Err(MalformedError::Overflow.into());
    }
    Ok((q << log2_b) | r)
}

/// Return the length of a codeword made of the unary code of `n >> log2_b`
/// followed by `width` bits, saturating at `usize::MAX`.
///
/// Values of `log2_b` of 64 or more give a zero quotient.
#[must_use]
#[inline]
pub fn saturating_len(n: u64, log2_b: usize, width: usize) -> usize {
    let q = u32::try_from(log2_b)
        .ok()
        .and_then(|shift| n.checked_shr(shift))
        .unwrap_or(0);
    usize::try_from(q)
        .unwrap_or(usize::MAX)
        .saturating_add(1)
        .saturating_add(width)
}

/// Check that the whole bit string was consumed by a read.
#[inline]
pub fn check_consumed<R: BitRead + ?Sized>(reader: &R) -> Result<()> {
    match reader.bits_left() {
        0 => Ok(()),
        extra => Err(MalformedError::TrailingBits { extra }.into()),
    }
}

/// Decode a whole bit string with `read`, rejecting empty strings and
/// strings with bits left after the codeword.
pub(crate) fn decode_with(
    bits: &[bool],
    read: impl FnOnce(&mut BitStringReader<'_>) -> Result<u64>,
) -> Result<u64> {
    if bits.is_empty() {
        return Err(MalformedError::Empty.into());
    }
    let mut reader = BitStringReader::new(bits);
    let value = read(&mut reader)?;
    check_consumed(&reader)?;
    Ok(value)
}

/// Encode a value with `write` into a fresh [`BitString`].
pub(crate) fn encode_with(
    write: impl FnOnce(&mut BitStringWriter) -> Result<usize>,
) -> Result<BitString> {
    let mut writer = BitStringWriter::new();
    write(&mut writer)?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_natural() {
        assert_eq!(to_natural(5_u8).unwrap(), 5);
        assert_eq!(to_natural(5_i32).unwrap(), 5);
        assert_eq!(to_natural(u64::MAX).unwrap(), u64::MAX);
        assert_eq!(to_natural(-1_i64), Err(ParamError::NotNatural.into()));
        assert_eq!(
            to_natural(u64::MAX as u128 + 1),
            Err(ParamError::NotNatural.into())
        );
    }

    #[test]
    fn test_shift_add() {
        assert_eq!(shift_add(3, 2, 1).unwrap(), 13);
        assert_eq!(shift_add(u64::MAX, 0, 0).unwrap(), u64::MAX);
        assert_eq!(shift_add(1, 63, 5).unwrap(), (1 << 63) | 5);
        assert_eq!(shift_add(2, 63, 0), Err(MalformedError::Overflow.into()));
    }

    #[test]
    fn test_saturating_len() {
        assert_eq!(saturating_len(9, 2, 2), 5);
        assert_eq!(saturating_len(u64::MAX, 0, 0), usize::MAX);
        assert_eq!(saturating_len(u64::MAX, 63, 63), 65);
        assert_eq!(saturating_len(u64::MAX, 64, 64), 65);
    }

    #[test]
    fn test_check_log2_b() {
        assert!(check_log2_b(0).is_ok());
        assert!(check_log2_b(63).is_ok());
        assert_eq!(
            check_log2_b(64),
            Err(ParamError::Log2BTooLarge { log2_b: 64 }.into())
        );
    }
}
