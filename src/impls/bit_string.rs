/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use super::BitStringReader;
use crate::error::{MalformedError, Result, RiceError};

/// The radix marker prepended by the alternate form of [`Display`](fmt::Display)
/// and optionally accepted by [`FromStr`].
pub const RADIX_MARKER: &str = "0b";

/// An encoded value: an ordered sequence of bits.
///
/// The [`Display`](fmt::Display) implementation writes the bits as `0` and `1`
/// digits; the alternate form (`{:#}`) prepends [`RADIX_MARKER`], as in
/// `0b1101`. [`FromStr`] is dual, and accepts the digits with or without the
/// marker. Width, fill and alignment are honored, so codewords can be laid
/// out in tables.
///
/// With the `serde` feature, a bit string is serialized as its
/// [`Display`](fmt::Display) form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Create an empty bit string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of bits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Return whether the bit string contains no bits.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Return the number of leading ones, that is, the length of the unary
    /// part of a codeword.
    #[must_use]
    pub fn leading_ones(&self) -> usize {
        self.bits.iter().take_while(|&&bit| bit).count()
    }

    /// Return a [`BitStringReader`] positioned on the first bit.
    #[must_use]
    pub fn reader(&self) -> BitStringReader<'_> {
        BitStringReader::new(&self.bits)
    }

    pub(crate) fn vec_mut(&mut self) -> &mut Vec<bool> {
        &mut self.bits
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.bits
    }
}

impl AsRef<[bool]> for BitString {
    fn as_ref(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(RADIX_MARKER.len() + self.bits.len());
        if f.alternate() {
            s.push_str(RADIX_MARKER);
        }
        s.extend(self.bits.iter().map(|&bit| if bit { '1' } else { '0' }));
        f.pad(&s)
    }
}

impl FromStr for BitString {
    type Err = RiceError;

    /// Parse `0` and `1` digits, optionally preceded by [`RADIX_MARKER`].
    ///
    /// Positions in [`MalformedError::InvalidDigit`] are counted from the
    /// first digit, excluding the marker.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix(RADIX_MARKER).unwrap_or(s);
        digits
            .chars()
            .enumerate()
            .map(|(pos, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(RiceError::from(MalformedError::InvalidDigit { digit, pos })),
            })
            .collect()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        alloc::format!("{}", bits)
    }
}

impl TryFrom<String> for BitString {
    type Error = RiceError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
