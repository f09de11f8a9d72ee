/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit strings and of the bit streams over them.

A [`BitString`] is the encoded form of a value. To decode it, codes read from
a [`BitStringReader`], which implements [`BitRead`](crate::traits::BitRead)
over a slice of bits; to encode, codes write to a [`BitStringWriter`], which
implements [`BitWrite`](crate::traits::BitWrite) and yields a [`BitString`].

*/

mod bit_string;
pub use bit_string::*;

mod bit_reader;
pub use bit_reader::BitStringReader;

mod bit_writer;
pub use bit_writer::BitStringWriter;
