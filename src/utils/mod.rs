/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers around the codes.

[`ToNat`] and [`ToInt`] map bijectively signed integers to natural numbers,
so that small absolute values get short codewords.

[`DbgBitReader`] and [`DbgBitWriter`] log through [`tracing`] all
operations performed by a [`BitRead`](crate::traits::BitRead) or
[`BitWrite`](crate::traits::BitWrite).

With the `implied` feature, [`sample_implied_rice`] samples the distribution
for which a Rice code is optimal.

*/

mod to_nat;
pub use to_nat::*;

mod dbg_codes;
pub use dbg_codes::*;

#[cfg(feature = "implied")]
mod implied;
#[cfg(feature = "implied")]
pub use implied::*;
