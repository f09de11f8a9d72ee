/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits and functions for reading and writing Rice codes.

Rice codes (AKA Golomb−Rice codes) are [Golomb
codes](https://doi.org/10.1109/TIT.1966.1053907) whose modulus is a power of
two 2^`log2_b`. A natural number *x* is split into a quotient *q* = ⌊*x* /
2^`log2_b`⌋, written in unary as a run of ones, and a remainder *x* mod
2^`log2_b`, written in binary with a fixed width.

This module provides three layouts of the same decomposition:

- [`modular`]: quotient and remainder by division; a zero terminator after
  the ones; a `log2_b`-bit remainder. Does not support `log2_b` = 0.
- [`masked`]: quotient and remainder by shifting and masking; a zero
  terminator after the ones; a `log2_b`-bit remainder, omitted when
  `log2_b` = 0.
- [`implicit`]: no terminator; the remainder is written in `log2_b` + 1
  bits, and its leading zero marks the end of the ones.

The first few codewords are:

| Arg | masked(0) | all layouts, `log2_b` = 1 | all layouts, `log2_b` = 2 |
|-----|----------:|--------------------------:|--------------------------:|
| 0   |         0 |                        00 |                       000 |
| 1   |        10 |                        01 |                       001 |
| 2   |       110 |                       100 |                       010 |
| 3   |      1110 |                       101 |                       011 |
| 4   |     11110 |                      1100 |                      1000 |
| 5   |    111110 |                      1101 |                      1001 |
| 6   |   1111110 |                     11100 |                      1010 |
| 7   |  11111110 |                     11101 |                      1011 |

Each layout is implemented as a pair of traits for reading and writing (e.g.,
[`MaskedRead`] and [`MaskedWrite`]) blanket-implemented for every
[`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite), respectively, and as a pair of
functions `encode` and `decode` in the layout module transforming a single
value into a [`BitString`](crate::impls::BitString) and back. The functions
reject trailing bits after the codeword.

*/

pub mod params;

pub mod modular;
pub use modular::{len_modular, ModularRead, ModularWrite};

pub mod masked;
pub use masked::{len_masked, MaskedRead, MaskedWrite};

pub mod implicit;
pub use implicit::{len_implicit, ImplicitRead, ImplicitWrite};
