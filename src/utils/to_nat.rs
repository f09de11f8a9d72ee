/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Bijective mapping from signed integers to natural numbers.
///
/// The mapping sends 0, −1, 1, −2, 2, … to 0, 1, 2, 3, 4, …, that is, *x* ≥ 0
/// to 2*x* and *x* < 0 to −2*x* − 1.
pub trait ToNat {
    type Nat;
    fn to_nat(self) -> Self::Nat;
}

/// Inverse of [`ToNat`].
pub trait ToInt {
    type Int;
    fn to_int(self) -> Self::Int;
}

macro_rules! impl_zigzag {
    ($($int:ty => $nat:ty),*) => {$(
        impl ToNat for $int {
            type Nat = $nat;
            #[inline(always)]
            fn to_nat(self) -> $nat {
                ((self << 1) ^ (self >> (<$int>::BITS - 1))) as $nat
            }
        }

        impl ToInt for $nat {
            type Int = $int;
            #[inline(always)]
            fn to_int(self) -> $int {
                ((self >> 1) as $int) ^ -((self & 1) as $int)
            }
        }
    )*};
}

impl_zigzag!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let nats: [u64; 7] = [0, -1, 1, -2, 2, -3, 3].map(|x: i64| x.to_nat());
        assert_eq!(nats, [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(i64::MIN.to_nat(), u64::MAX);
        assert_eq!(i64::MAX.to_nat(), u64::MAX - 1);
        assert_eq!(u64::MAX.to_int(), i64::MIN);
    }
}
