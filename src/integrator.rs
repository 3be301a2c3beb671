//! Folds new [`BombEquation`]s into a constraint store, keeping it in
//! canonical reduced form (§4.2 of the design: no equal, splittable, or
//! impossible equations survive).

use crate::equation::BombEquation;
use crate::error::{Result, SolverError};
use log::trace;

/// Integrates `new_equations` into `store`, mutating it in place.
///
/// Runs the equations through a worklist until fixed point: impossible
/// equations abort with [`SolverError::Contradiction`], splittable ones are
/// expanded, inert single-tile `{0,1}` equations are discarded, and every
/// remaining equation is checked against the store for equality,
/// subsumption in either direction, or (failing all of those) insertion.
///
/// A trivial single-tile equation (a tile whose status is now fully
/// resolved) is still inserted rather than dropped: it is the canonical
/// record of that resolved fact, and `solve_area` relies on finding it in
/// the store to fold the tile into a `Solution`'s domain as its own
/// singleton connected component. What a trivial equation no longer does is
/// carry open information — once present, it only ever gets scanned against
/// (to strip its tile out of equations that still mention it), never
/// refined further.
///
/// Removals found while scanning the store are collected and applied after
/// the scan completes, so the scan itself never mutates the collection it
/// is iterating.
pub fn integrate(
    store: &mut Vec<BombEquation>,
    new_equations: impl IntoIterator<Item = BombEquation>,
) -> Result<()> {
    let mut worklist: Vec<BombEquation> = new_equations.into_iter().collect();

    while let Some(e) = worklist.pop() {
        if e.is_impossible() {
            trace!("integrator: contradiction on {e:?}");
            return Err(SolverError::Contradiction);
        }
        if e.is_splittable() {
            worklist.extend(e.split());
            continue;
        }
        if e.is_inert() {
            trace!("integrator: discarding inert {e:?}");
            continue;
        }

        let mut add_e = true;
        let mut to_remove: Vec<BombEquation> = Vec::new();

        for old in store.iter() {
            if *old == e {
                add_e = false;
                break;
            }
            if e.subsumed_by(old) {
                worklist.push(old.subtract(&e));
                to_remove.push(old.clone());
            } else if old.subsumed_by(&e) {
                worklist.push(e.subtract(old));
                add_e = false;
                break;
            }
        }

        for removed in &to_remove {
            if let Some(pos) = store.iter().position(|stored| stored == removed) {
                store.remove(pos);
            }
        }
        if add_e {
            trace!("integrator: adding {e:?} to store ({} total)", store.len() + 1);
            store.push(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::BombEquation;

    fn eq(tiles: &[(usize, usize)], bombs: &[i64]) -> BombEquation {
        BombEquation::new(tiles.iter().copied(), bombs.iter().copied())
    }

    #[test]
    fn store_after_integration_has_no_forbidden_equations() {
        let mut store = Vec::new();
        integrate(
            &mut store,
            vec![eq(&[(0, 0)], &[0]), eq(&[(0, 0), (0, 1)], &[0, 1, 2])],
        )
        .unwrap();
        // The {0,1,2}-over-2-tiles equation is splittable into two inert
        // (0,1)-unknown equations, both discarded; (0,0) is already known
        // safe, so only that trivial fact survives.
        for e in &store {
            assert!(!e.is_splittable());
            assert!(!e.is_impossible());
        }
        assert_eq!(store, vec![eq(&[(0, 0)], &[0])]);
    }

    #[test]
    fn trivial_equations_are_retained_as_resolved_facts() {
        // A resolved tile's single-tile equation is not consumed and
        // discarded outright: it stays in the store as the record
        // `solve_area` needs to fold that tile into a `Solution`.
        let mut store = Vec::new();
        integrate(&mut store, vec![eq(&[(3, 3)], &[1])]).unwrap();
        assert!(store.iter().any(|e| e.is_trivial()));
        assert_eq!(store, vec![eq(&[(3, 3)], &[1])]);
    }

    #[test]
    fn contradiction_on_empty_bombs() {
        let mut store = Vec::new();
        let err = integrate(&mut store, vec![eq(&[(0, 0)], &[])]).unwrap_err();
        assert_eq!(err, SolverError::Contradiction);
    }

    #[test]
    fn chained_deduction() {
        // Tile (0,0) safe; {(0,1),(1,0),(1,1)} contains exactly 1 bomb;
        // further learn (0,1) is safe -> forces 1 bomb among {(1,0),(1,1)}.
        // Both resolved-safe facts remain in the store alongside the
        // reduced equation; they no longer carry open information, but are
        // not discarded (see `trivial_equations_are_retained_as_resolved_facts`).
        let mut store = Vec::new();
        integrate(
            &mut store,
            vec![
                eq(&[(0, 0)], &[0]),
                eq(&[(0, 1), (1, 0), (1, 1)], &[1]),
                eq(&[(0, 1)], &[0]),
            ],
        )
        .unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.contains(&eq(&[(0, 0)], &[0])));
        assert!(store.contains(&eq(&[(0, 1)], &[0])));
        assert!(store.contains(&eq(&[(1, 0), (1, 1)], &[1])));
    }

    #[test]
    fn duplicate_equation_is_discarded() {
        let mut store = Vec::new();
        integrate(&mut store, vec![eq(&[(0, 0), (0, 1)], &[1])]).unwrap();
        integrate(&mut store, vec![eq(&[(0, 0), (0, 1)], &[1])]).unwrap();
        assert_eq!(store.len(), 1);
    }
}
