/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{MalformedError, Result};

/// Sequential bit-by-bit reads, most significant bit first.
///
/// This trait specify basic operation over which codes can be implemented by
/// traits such as [`MaskedRead`](crate::codes::MaskedRead).
///
/// Running out of bits is always reported as a
/// [`MalformedEncoding`](crate::error::RiceError::MalformedEncoding): a reader
/// holds the whole codeword, so a short read means the codeword is truncated.
pub trait BitRead {
    /// Read a single bit.
    fn read_bit(&mut self) -> Result<bool>;

    /// Read `n` bits and return them in the lowest bits, the first bit read
    /// being the most significant one.
    ///
    /// Implementors should check the value of `n` when in test mode
    /// and panic if it is greater than 64. Reading zero bits returns zero.
    fn read_bits(&mut self, n: usize) -> Result<u64>;

    /// Return the number of bits that can still be read.
    fn bits_left(&self) -> usize;

    /// Read a run of ones terminated by a zero, and return the number of ones.
    ///
    /// The terminating zero is consumed. If the bits run out before a zero is
    /// found, the error is [`MalformedError::MissingTerminator`].
    #[inline]
    fn read_unary(&mut self) -> Result<u64> {
        let mut ones = 0;
        loop {
            if self.bits_left() == 0 {
                return Err(MalformedError::MissingTerminator { ones }.into());
            }
            if !self.read_bit()? {
                return Ok(ones);
            }
            ones += 1;
        }
    }
}

/// Sequential bit-by-bit writes, most significant bit first.
///
/// This trait specify basic operation over which codes can be implemented
/// by traits such as [`MaskedWrite`](crate::codes::MaskedWrite).
pub trait BitWrite {
    /// Write a single bit and return the number of bits written, that is, one.
    fn write_bit(&mut self, bit: bool) -> Result<usize>;

    /// Write the lowest `n` bits of `value`, most significant first, and
    /// return the number of bits written, that is, `n`.
    ///
    /// Implementors should check the value of `n` in test mode and panic if it
    /// is greater than 64. Bits of `value` above the lowest `n` are ignored.
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize>;

    /// Write a run of `n` ones and return the number of bits written, that
    /// is, `n`.
    fn write_ones(&mut self, n: u64) -> Result<usize>;

    /// Write `value` as a run of ones terminated by a zero and return the
    /// number of bits written, that is, `value` plus one.
    #[inline]
    fn write_unary(&mut self, value: u64) -> Result<usize> {
        Ok(self.write_ones(value)? + self.write_bit(false)?)
    }
}
