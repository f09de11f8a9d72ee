/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dynamic selection of a layout.
//!
//! The traits in [`codes`](crate::codes), such as
//! [`MaskedRead`](crate::codes::MaskedRead), extend [`BitRead`] and
//! [`BitWrite`] with a method for each layout. The user can thus select at
//! compile time the desired layout.
//!
//! In many contexts, however, one does not want to commit to a specific
//! layout, but rather would like to write generic methods that accept some
//! code as an input and then use it to read or write values, or to compare
//! layouts on the same data. The traits [`DynamicCodeRead`] and
//! [`DynamicCodeWrite`] provide a method to read and write a code from a bit
//! stream, and [`CodeLen`] a method computing the length of a codeword. For
//! example, in this function we read a code and make no committment on which
//! layout we will be using:
//!```rust
//! use rice_codes::prelude::*;
//!
//! fn read_one<R: BitRead + ?Sized, C: DynamicCodeRead>(
//!     reader: &mut R,
//!     code: C,
//! ) -> Result<u64, RiceError> {
//!     code.read(reader)
//! }
//!
//! let bits: BitString = "0b11001".parse()?;
//! assert_eq!(read_one(&mut bits.reader(), Codes::Masked { log2_b: 2 })?, 9);
//! # Ok::<(), RiceError>(())
//!```
//!
//! The [`Codes`] enum, whose variants represent the available layouts,
//! implements all the traits above, and provides in addition whole-string
//! [`encode`](Codes::encode) and [`decode`](Codes::decode) methods, and
//! signed variants of both.

use crate::error::Result;
use crate::traits::*;

mod codes;
pub use codes::*;

/// Something that can decode a value from any bit stream.
pub trait DynamicCodeRead {
    /// Read a value
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64>;
}

/// Something that can encode a value to any bit stream.
pub trait DynamicCodeWrite {
    /// Write a value, returning the number of bits written.
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize>;
}

/// Something that can compute the length of a value encoded with a code.
pub trait CodeLen {
    /// Compute how many bits it takes to encode a value with this code.
    fn len(&self, value: u64) -> usize;
}
