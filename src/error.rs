/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types.
//!
//! Every fallible operation of this crate returns a [`RiceError`], which has
//! exactly two kinds: the caller passed a parameter outside the domain of the
//! code ([`RiceError::InvalidParameter`]), or a bit string is not a valid
//! codeword ([`RiceError::MalformedEncoding`]). The inner enums give the
//! details.

use thiserror::Error;

/// Errors returned by encoding and decoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RiceError {
    /// The parameters of an encoding operation are outside the domain of the
    /// code.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    /// The bit string handed to a decoding operation is not a codeword.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] MalformedError),
}

/// Details of a [`RiceError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParamError {
    /// The value is negative, or does not fit a `u64`.
    #[error("value is not a natural number representable in 64 bits")]
    NotNatural,

    /// The divisor 2^`log2_b` does not fit a `u64`.
    #[error("log2_b = {log2_b} is too large (must be less than 64)")]
    Log2BTooLarge { log2_b: usize },

    /// The layout does not support this value of `log2_b`.
    #[error("log2_b = {log2_b} is not supported by this layout")]
    UnsupportedLog2B { log2_b: usize },

    /// The unary part of the codeword cannot be materialized.
    #[error("quotient {quotient} is too large to be written in unary")]
    QuotientTooLarge { quotient: u64 },
}

/// Details of a [`RiceError::MalformedEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedError {
    /// The bit string contains no bits.
    #[error("empty bit string")]
    Empty,

    /// The bit string ended while reading the unary part.
    #[error("missing terminator after {ones} ones")]
    MissingTerminator { ones: u64 },

    /// The bit string is shorter than the layout requires.
    ///
    /// `len` is the length of the whole bit string being read and `min` the
    /// length it would need to hold the codeword. When reading from a stream
    /// of concatenated codewords, both are positions in the stream, not
    /// lengths of the codeword.
    #[error("bit string too short: {len} bits, at least {min} required")]
    TooShort { len: usize, min: usize },

    /// The bit string continues after a complete codeword.
    #[error("{extra} trailing bits after the codeword")]
    TrailingBits { extra: usize },

    /// A textual bit string contains something other than `0` and `1`.
    #[error("invalid digit {digit:?} at position {pos}")]
    InvalidDigit { digit: char, pos: usize },

    /// The decoded value does not fit a `u64`.
    #[error("decoded value does not fit in 64 bits")]
    Overflow,
}

/// A specialized Result type for encoding and decoding operations.
pub type Result<T> = core::result::Result<T, RiceError>;
