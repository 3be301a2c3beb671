//! `BombEquation`: a subset-sum constraint over a set of tiles.

use crate::Tile;
use std::collections::BTreeSet;

/// "The number of bombs in `tiles` lies in `bombs`."
///
/// `tiles` is non-empty and `bombs` is a strictly ascending, deduplicated
/// sequence of integers in `[0, tiles.len()]`. Equality and hashing are
/// structural on `(tiles, bombs)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BombEquation {
    tiles: BTreeSet<Tile>,
    bombs: Vec<u32>,
}

impl BombEquation {
    /// Builds an equation, clamping `bombs` to `[0, tiles.len()]`, sorting
    /// and deduplicating. An empty `tiles` is legal: it arises from
    /// subtracting two fully-overlapping equations (a corner tile's empty
    /// neighbour set is the other source) and denotes a vacuous "0 bombs
    /// among 0 tiles" constraint when `bombs` ends up `[0]`, or a
    /// contradiction when `bombs` ends up empty.
    pub fn new(tiles: impl IntoIterator<Item = Tile>, bombs: impl IntoIterator<Item = i64>) -> Self {
        let tiles: BTreeSet<Tile> = tiles.into_iter().collect();
        let max = tiles.len() as i64;
        let mut bombs: Vec<u32> = bombs
            .into_iter()
            .filter(|&b| (0..=max).contains(&b))
            .map(|b| b as u32)
            .collect();
        bombs.sort_unstable();
        bombs.dedup();
        BombEquation { tiles, bombs }
    }

    pub fn tiles(&self) -> &BTreeSet<Tile> {
        &self.tiles
    }

    pub fn bombs(&self) -> &[u32] {
        &self.bombs
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// `B = {}` — the equation cannot be satisfied by any assignment.
    pub fn is_impossible(&self) -> bool {
        self.bombs.is_empty()
    }

    /// `|T| = 1 ∧ |B| = 1` — a single tile whose bomb status is decided.
    pub fn is_trivial(&self) -> bool {
        self.tiles.len() == 1 && self.bombs.len() == 1
    }

    /// `|T| > 1` and the equation carries no per-tile information beyond
    /// "all safe", "all bombs", or "each tile independently unknown".
    pub fn is_splittable(&self) -> bool {
        self.tiles.len() != 1
            && ((self.bombs.len() == 1
                && (self.bombs[0] == 0 || self.bombs[0] as usize == self.tiles.len()))
                || self.bombs.len() == self.tiles.len() + 1)
    }

    /// `|T| = 1 ∧ B = {0, 1}` — carries no information and must be discarded.
    pub fn is_inert(&self) -> bool {
        self.tiles.len() == 1 && self.bombs == [0, 1]
    }

    /// Decomposes a splittable equation into one single-tile equation per
    /// tile. Only valid when [`Self::is_splittable`] holds.
    pub fn split(&self) -> Vec<BombEquation> {
        debug_assert!(self.is_splittable());
        if self.bombs.len() > 1 {
            return self
                .tiles
                .iter()
                .map(|&t| BombEquation::new([t], [0, 1]))
                .collect();
        }
        let bomb = i64::from(self.bombs[0] != 0);
        self.tiles
            .iter()
            .map(|&t| BombEquation::new([t], [bomb]))
            .collect()
    }

    /// `e₁ ⊑ e₂` iff `T(e₁) ⊆ T(e₂) ∧ |B(e₁)| = 1`.
    pub fn subsumed_by(&self, other: &BombEquation) -> bool {
        self.bombs.len() == 1 && self.tiles.is_subset(&other.tiles)
    }

    /// `self − sub`, valid only when `sub.subsumed_by(self)`: removes
    /// `sub`'s tile from the tile set and shifts every bomb count down by
    /// `sub`'s single known count, discarding any result outside
    /// `[0, |self.tiles − sub.tiles|]`.
    pub fn subtract(&self, sub: &BombEquation) -> BombEquation {
        debug_assert!(sub.subsumed_by(self));
        let b = i64::from(sub.bombs[0]);
        let remaining: BTreeSet<Tile> = self.tiles.difference(&sub.tiles).copied().collect();
        let bombs = self.bombs.iter().map(|&x| i64::from(x) - b);
        BombEquation::new(remaining, bombs)
    }
}
