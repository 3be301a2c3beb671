//! Recursive enumeration over a connected constraint component, producing
//! an exact [`Solution`].

use crate::equation::BombEquation;
use crate::error::{Result, SolverError};
use crate::grouping::group_constraints;
use crate::integrator;
use crate::solution::Solution;
use crate::Tile;
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// Upper bound on the number of distinct tiles the area solver will
/// enumerate in a single connected component. A classic-hard board (30x16,
/// 99 bombs) can leave a boundary frontier spanning a large fraction of the
/// board's 480 tiles before it collapses, so the bound is set well above
/// that rather than above the board's dimensions; components larger than
/// this return [`SolverError::ComponentTooLarge`] rather than recursing
/// exponentially (spec.md §5/§7 permit refusing or time-slicing such inputs).
pub const MAX_COMPONENT_TILES: usize = 200;

/// Solves `group`, a list of constraints that need not be connected.
///
/// - Empty group: the identity solution (zero bombs, one layout).
/// - Singleton group: the closed-form single-equation solution.
/// - Otherwise: split into connected components (§4.3) and combine their
///   solutions with `⊗`; a single connected component is solved by
///   branching the most-shared tile to 0 and 1 bombs, folding the two
///   branches with `⊕`.
pub fn solve_area(group: &[BombEquation]) -> Result<Solution> {
    if group.is_empty() {
        return Ok(Solution::identity());
    }
    if group.len() == 1 {
        let eq = &group[0];
        return Ok(Solution::from_single_equation(eq.tiles(), eq.bombs()));
    }

    let components = group_constraints(group);
    if components.len() > 1 {
        let mut result = Solution::identity();
        for component in &components {
            result = result.combine_disjoint(&solve_area(component)?);
        }
        return Ok(result);
    }

    let component = &components[0];
    let distinct_tiles = distinct_tile_count(component);
    if distinct_tiles > MAX_COMPONENT_TILES {
        return Err(SolverError::ComponentTooLarge {
            tiles: distinct_tiles,
            limit: MAX_COMPONENT_TILES,
        });
    }

    let recurse_tile = find_tile_to_recurse_on(component);
    trace!("area solver: branching on {recurse_tile:?} ({distinct_tiles} tiles in component)");

    let mut group_solution = Solution::default();
    for bomb in [0u32, 1u32] {
        let mut branch_store = component.clone();
        let literal = BombEquation::new([recurse_tile], [i64::from(bomb)]);
        match integrator::integrate(&mut branch_store, [literal]) {
            Ok(()) => {
                // `recurse_tile`'s own contribution is already folded in via
                // `Solution::single_tile` below; without dropping it here the
                // tile would be double-counted (it still appears in the
                // store as the resolved single-tile equation the integrator
                // just produced), inflating the branch's bomb total and
                // clobbering its per-tile frequency. Mirrors the reference
                // solver's `constraint_group_copy.remove(new_bomb_eq)`.
                branch_store.retain(|eq| !eq.tiles().contains(&recurse_tile));
                let sub_solution = solve_area(&branch_store)?;
                let branch = Solution::single_tile(recurse_tile, bomb).combine_disjoint(&sub_solution);
                group_solution = group_solution.combine_alternative(branch);
            }
            Err(SolverError::Contradiction) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(group_solution)
}

fn distinct_tile_count(constraints: &[BombEquation]) -> usize {
    let tiles: BTreeSet<Tile> = constraints.iter().flat_map(|e| e.tiles().iter().copied()).collect();
    tiles.len()
}

/// Deterministically picks the tile occurring in the most equations,
/// breaking ties toward the lexicographically smallest tile.
fn find_tile_to_recurse_on(constraints: &[BombEquation]) -> Tile {
    let mut counts: BTreeMap<Tile, usize> = BTreeMap::new();
    for eq in constraints {
        for &tile in eq.tiles() {
            *counts.entry(tile).or_insert(0) += 1;
        }
    }
    let mut best: Option<(Tile, usize)> = None;
    for (tile, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((tile, count));
        }
    }
    best.expect("find_tile_to_recurse_on requires a non-empty constraint list").0
}
