/*
 * SPDX-FileCopyrightText: 2026 The rice-codes contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::RngCore;

use crate::codes::params::check_log2_b;
use crate::error::Result;

/// Returns an **infinite iterator** of samples from the implied distribution
/// of a Rice code with parameter `log2_b`, that is, the distribution in which
/// a codeword of length *l* has probability 2<sup>−*l*</sup>.
///
/// Under this distribution the quotient is geometric with ratio 1/2 and the
/// remainder is uniform, so a sample is obtained from the trailing zeros of a
/// random word and `log2_b` random bits. Quotients are capped so that the
/// value fits a `u64`.
///
/// # Errors
///
/// [`InvalidParameter`](crate::error::RiceError::InvalidParameter) if
/// `log2_b` is at least 64.
///
/// # Example
///
/// ```rust
/// use rice_codes::utils::sample_implied_rice;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let vals: Vec<u64> = sample_implied_rice(3, &mut rng)?.take(1000).collect();
///
/// assert_eq!(vals.len(), 1000);
/// # Ok::<(), rice_codes::error::RiceError>(())
/// ```
pub fn sample_implied_rice<R: RngCore + ?Sized>(
    log2_b: usize,
    rng: &mut R,
) -> Result<impl Iterator<Item = u64> + '_> {
    check_log2_b(log2_b)?;
    let max_q = u64::MAX >> log2_b;
    let mask = (1_u64 << log2_b) - 1;
    Ok(core::iter::repeat_with(move || {
        let q = (rng.next_u64().trailing_zeros() as u64).min(max_q);
        (q << log2_b) | (rng.next_u64() & mask)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_quotient_distribution() {
        let mut rng = SmallRng::seed_from_u64(0);
        let samples = sample_implied_rice(4, &mut rng)
            .unwrap()
            .take(10_000)
            .collect::<alloc::vec::Vec<_>>();
        let zero_q = samples.iter().filter(|&&x| x < 16).count();
        // P(q = 0) is 1/2
        assert!((4_000..6_000).contains(&zero_q));
    }

    #[test]
    fn test_large_log2_b() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(sample_implied_rice(64, &mut rng).is_err());
        assert_eq!(sample_implied_rice(63, &mut rng).unwrap().take(100).count(), 100);
    }
}
