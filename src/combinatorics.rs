//! Arbitrary-precision binomial coefficients.
//!
//! Boards at the documented classic maximum (30x16, 99 bombs) can produce
//! layout counts that exceed `u64`, so every count in this crate is a
//! [`num_bigint::BigUint`].

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `n choose k`, with `comb(n, k) = 0` for `k < 0` or `k > n`.
pub fn comb(n: i64, k: i64) -> BigUint {
    if k < 0 || k > n || n < 0 {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 0..k {
        result *= BigUint::from((n - i) as u64);
        result /= BigUint::from((i + 1) as u64);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(comb(5, 0), BigUint::from(1u32));
        assert_eq!(comb(5, 5), BigUint::from(1u32));
        assert_eq!(comb(5, 2), BigUint::from(10u32));
        assert_eq!(comb(5, -1), BigUint::zero());
        assert_eq!(comb(5, 6), BigUint::zero());
    }

    #[test]
    fn large_board_does_not_overflow_u64() {
        // 30x16 board, 99 bombs: C(480, 99) vastly exceeds u64::MAX.
        let c = comb(480, 99);
        assert!(c > BigUint::from(u64::MAX));
    }
}
