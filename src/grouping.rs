//! Partitions a constraint store into connected components: equations that
//! share no tile, transitively, end up in different groups.

use crate::equation::BombEquation;
use crate::Tile;
use std::collections::{BTreeMap, HashMap};

/// Union-find over equation indices, merged whenever two equations share a
/// tile. `O((E + T) * alpha(E))` as the design calls for, though any correct
/// partition would satisfy the contract.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Groups `constraints` so that two equations land in the same group iff
/// they are connected by a chain of tile-sharing. Groups are ordered by
/// their smallest member's index in `constraints`, and equations within a
/// group keep their relative input order.
pub fn group_constraints(constraints: &[BombEquation]) -> Vec<Vec<BombEquation>> {
    let mut dsu = DisjointSet::new(constraints.len());
    let mut owner: HashMap<Tile, usize> = HashMap::new();

    for (i, eq) in constraints.iter().enumerate() {
        for tile in eq.tiles() {
            match owner.get(tile) {
                Some(&first) => dsu.union(first, i),
                None => {
                    owner.insert(*tile, i);
                }
            }
        }
    }

    let mut groups: BTreeMap<usize, Vec<BombEquation>> = BTreeMap::new();
    for (i, eq) in constraints.iter().enumerate() {
        let root = dsu.find(i);
        groups.entry(root).or_default().push(eq.clone());
    }
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(tiles: &[(usize, usize)], bombs: &[i64]) -> BombEquation {
        BombEquation::new(tiles.iter().copied(), bombs.iter().copied())
    }

    #[test]
    fn disjoint_equations_land_in_separate_groups() {
        let constraints = vec![eq(&[(0, 0)], &[1]), eq(&[(5, 5)], &[0])];
        let groups = group_constraints(&constraints);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn chained_sharing_merges_transitively() {
        let a = eq(&[(0, 0), (0, 1)], &[1]);
        let b = eq(&[(0, 1), (0, 2)], &[1]);
        let c = eq(&[(9, 9)], &[0]);
        let groups = group_constraints(&[a.clone(), b.clone(), c.clone()]);
        assert_eq!(groups.len(), 2);
        let big_group = groups.iter().find(|g| g.len() == 2).unwrap();
        assert!(big_group.contains(&a));
        assert!(big_group.contains(&b));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_constraints(&[]).is_empty());
    }
}
