//! [`Solution`]: an exact distribution over (total bomb count, per-tile bomb
//! frequency) for a constrained area.

use crate::Tile;
use crate::combinatorics::comb;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::BTreeMap;

/// For each total bomb count `k`, the number of satisfying layouts `N_k`
/// and, for every tile mentioned by the area, how many of those `N_k`
/// layouts place a bomb on it (`F_k[t]`).
///
/// `Solution::identity()` (`{0 -> ({}, 1)}`) is the identity for
/// [`Solution::combine_disjoint`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    by_count: BTreeMap<u32, (BTreeMap<Tile, BigUint>, BigUint)>,
}

impl Solution {
    /// The empty-area solution: zero bombs, one (vacuous) layout.
    pub fn identity() -> Self {
        let mut by_count = BTreeMap::new();
        by_count.insert(0u32, (BTreeMap::new(), BigUint::one()));
        Solution { by_count }
    }

    /// A single-tile solution: `bombs` bombs on `tile`, one layout.
    pub fn single_tile(tile: Tile, bombs: u32) -> Self {
        let mut freq = BTreeMap::new();
        freq.insert(tile, BigUint::from(bombs));
        let mut by_count = BTreeMap::new();
        by_count.insert(bombs, (freq, BigUint::one()));
        Solution { by_count }
    }

    /// The solution for a single-equation area: for each `b` in `bombs`,
    /// `C(num_tiles, b)` layouts, each tile occurring in `C(num_tiles - 1, b
    /// - 1)` of them.
    pub fn from_single_equation(tiles: &std::collections::BTreeSet<Tile>, bombs: &[u32]) -> Self {
        let num_tiles = tiles.len() as i64;
        let mut by_count = BTreeMap::new();
        for &b in bombs {
            let n_k = comb(num_tiles, b as i64);
            if n_k.is_zero() {
                continue;
            }
            let per_tile = comb(num_tiles - 1, b as i64 - 1);
            let freq = tiles.iter().map(|&t| (t, per_tile.clone())).collect();
            by_count.insert(b, (freq, n_k));
        }
        Solution { by_count }
    }

    pub fn is_empty_area(&self) -> bool {
        self.by_count.values().all(|(freq, _)| freq.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeMap<Tile, BigUint>, &BigUint)> {
        self.by_count.iter().map(|(&k, (f, n))| (k, f, n))
    }

    /// `s₁ ⊕ s₂`: combine two alternatives for the *same* area by adding
    /// `N_k` and `F_k[t]` pointwise.
    pub fn combine_alternative(mut self, other: Solution) -> Solution {
        if self.by_count.is_empty() {
            return other;
        }
        for (k, (other_freq, other_n)) in other.by_count {
            let entry = self
                .by_count
                .entry(k)
                .or_insert_with(|| (BTreeMap::new(), BigUint::zero()));
            for (tile, count) in other_freq {
                *entry.0.entry(tile).or_insert_with(BigUint::zero) += count;
            }
            entry.1 += other_n;
        }
        self
    }

    /// `s₁ ⊗ s₂`: combine two solutions over *disjoint* areas. Every pair
    /// `(k₁, k₂)` produces `k₁+k₂ -> (F', N₁·N₂)` where `F'` carries `s₁`'s
    /// per-tile counts scaled by `N₂` and `s₂`'s scaled by `N₁`.
    pub fn combine_disjoint(&self, other: &Solution) -> Solution {
        let mut result = Solution::default();
        for (k1, (f1, n1)) in &self.by_count {
            for (k2, (f2, n2)) in &other.by_count {
                let mut freq = BTreeMap::new();
                for (tile, count) in f1 {
                    freq.insert(*tile, count * n2);
                }
                for (tile, count) in f2 {
                    freq.insert(*tile, count * n1);
                }
                let combined = Solution {
                    by_count: BTreeMap::from([(k1 + k2, (freq, n1 * n2))]),
                };
                result = result.combine_alternative(combined);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tiles: &[Tile]) -> std::collections::BTreeSet<Tile> {
        tiles.iter().copied().collect()
    }

    #[test]
    fn identity_is_identity_for_disjoint_combine() {
        let s = Solution::from_single_equation(&set(&[(0, 0)]), &[1]);
        assert_eq!(s.combine_disjoint(&Solution::identity()), s);
        assert_eq!(Solution::identity().combine_disjoint(&s), s);
    }

    #[test]
    fn single_equation_one_bomb_two_tiles() {
        let s = Solution::from_single_equation(&set(&[(0, 0), (1, 1)]), &[1]);
        let (k, freq, n) = s.iter().next().unwrap();
        assert_eq!(k, 1);
        assert_eq!(*n, BigUint::from(2u32));
        assert_eq!(freq[&(0, 0)], BigUint::from(1u32));
        assert_eq!(freq[&(1, 1)], BigUint::from(1u32));
    }

    #[test]
    fn combine_alternative_is_commutative_and_additive() {
        let a = Solution::from_single_equation(&set(&[(0, 0)]), &[0]);
        let b = Solution::from_single_equation(&set(&[(0, 0)]), &[1]);
        let ab = a.clone().combine_alternative(b.clone());
        let ba = b.combine_alternative(a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn disjoint_combine_multiplies_layout_counts() {
        let a = Solution::single_tile((0, 0), 1);
        let b = Solution::single_tile((1, 1), 1);
        let combined = a.combine_disjoint(&b);
        let (k, freq, n) = combined.iter().next().unwrap();
        assert_eq!(k, 2);
        assert_eq!(*n, BigUint::one());
        assert_eq!(freq[&(0, 0)], BigUint::one());
        assert_eq!(freq[&(1, 1)], BigUint::one());
    }
}
