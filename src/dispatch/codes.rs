/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Enumeration of all available layouts, with associated read and write
//! methods.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use num_traits::ToPrimitive;
use thiserror::Error;

use super::*;
use crate::codes::*;
use crate::impls::BitString;
use crate::utils::{ToInt, ToNat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
/// An enum whose variants represent all the available layouts, with their
/// parameter.
///
/// This enum is kept in sync with implementations in the
/// [`codes`](crate::codes) module. The layouts are independent: no variant
/// is ever rewritten into another, even when their codewords coincide.
///
/// Both [`Display`](fmt::Display) and [`FromStr`] are implemented for this
/// enum in a dual way (e.g., `Masked(4)`), which makes it possible to store a
/// code as a string in a configuration file, and then parse it back. With the
/// `serde` feature, the same string form is used for serialization.
pub enum Codes {
    Modular { log2_b: usize },
    Masked { log2_b: usize },
    Implicit { log2_b: usize },
}

impl Codes {
    /// Return the parameter of the code.
    #[must_use]
    pub fn log2_b(&self) -> usize {
        match self {
            Codes::Modular { log2_b } | Codes::Masked { log2_b } | Codes::Implicit { log2_b } => {
                *log2_b
            }
        }
    }

    /// Encode `value` into a fresh [`BitString`].
    pub fn encode<V: ToPrimitive>(&self, value: V) -> Result<BitString> {
        match *self {
            Codes::Modular { log2_b } => modular::encode(log2_b, value),
            Codes::Masked { log2_b } => masked::encode(log2_b, value),
            Codes::Implicit { log2_b } => implicit::encode(log2_b, value),
        }
    }

    /// Decode a bit string containing exactly one codeword.
    pub fn decode(&self, bits: impl AsRef<[bool]>) -> Result<u64> {
        let bits = bits.as_ref();
        let result = match *self {
            Codes::Modular { log2_b } => modular::decode(log2_b, bits),
            Codes::Masked { log2_b } => masked::decode(log2_b, bits),
            Codes::Implicit { log2_b } => implicit::decode(log2_b, bits),
        };
        if let Err(err) = &result {
            tracing::trace!(code = %self, len = bits.len(), %err, "rejected bit string");
        }
        result
    }

    /// Encode a signed value, mapping it first to a natural number with
    /// [`ToNat`] (0, −1, 1, −2, … become 0, 1, 2, 3, …).
    pub fn encode_signed(&self, value: i64) -> Result<BitString> {
        self.encode(value.to_nat())
    }

    /// Decode a signed value encoded by [`encode_signed`](Self::encode_signed).
    pub fn decode_signed(&self, bits: impl AsRef<[bool]>) -> Result<i64> {
        Ok(self.decode(bits)?.to_int())
    }
}

impl DynamicCodeRead for Codes {
    #[inline]
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        match *self {
            Codes::Modular { log2_b } => reader.read_modular(log2_b),
            Codes::Masked { log2_b } => reader.read_masked(log2_b),
            Codes::Implicit { log2_b } => reader.read_implicit(log2_b),
        }
    }
}

impl DynamicCodeWrite for Codes {
    #[inline]
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        match *self {
            Codes::Modular { log2_b } => writer.write_modular(value, log2_b),
            Codes::Masked { log2_b } => writer.write_masked(value, log2_b),
            Codes::Implicit { log2_b } => writer.write_implicit(value, log2_b),
        }
    }
}

impl CodeLen for Codes {
    #[inline]
    fn len(&self, value: u64) -> usize {
        match *self {
            Codes::Modular { log2_b } => len_modular(value, log2_b),
            Codes::Masked { log2_b } => len_masked(value, log2_b),
            Codes::Implicit { log2_b } => len_implicit(value, log2_b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Error type for parsing a code from a string.
pub enum CodeError {
    #[error("parse error: {0}")]
    ParseError(#[from] core::num::ParseIntError),
    #[error("unknown code: {0}")]
    UnknownCode(String),
}

impl fmt::Display for Codes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Codes::Modular { log2_b } => write!(f, "Modular({})", log2_b),
            Codes::Masked { log2_b } => write!(f, "Masked({})", log2_b),
            Codes::Implicit { log2_b } => write!(f, "Implicit({})", log2_b),
        }
    }
}

impl FromStr for Codes {
    type Err = CodeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let unknown = || CodeError::UnknownCode(s.to_string());
        let (name, arg) = s
            .strip_suffix(')')
            .and_then(|s| s.split_once('('))
            .ok_or_else(unknown)?;
        match name {
            "Modular" => Ok(Codes::Modular {
                log2_b: arg.parse()?,
            }),
            "Masked" => Ok(Codes::Masked {
                log2_b: arg.parse()?,
            }),
            "Implicit" => Ok(Codes::Implicit {
                log2_b: arg.parse()?,
            }),
            _ => Err(unknown()),
        }
    }
}

impl From<Codes> for String {
    fn from(code: Codes) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for Codes {
    type Error = CodeError;

    fn try_from(s: String) -> core::result::Result<Self, Self::Error> {
        s.parse()
    }
}
