//! The `Sweeper` façade: owns the constraint store and unconstrained set,
//! ingests observations, and projects a probability board.

use crate::area::solve_area;
use crate::combinatorics::comb;
use crate::equation::BombEquation;
use crate::error::{Result, SolverError};
use crate::geometry::neighbours;
use crate::integrator;
use crate::labels::{self, Label};
use crate::presets::{self, Difficulty, Version};
use crate::Tile;
use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use std::collections::BTreeSet;

const IMPOSSIBLE_LAYOUT: &str = "Impossible layout";

/// Solves a single partially-revealed Minesweeper-family board.
///
/// Created with `(version, height, width, bombs)`, mutated monotonically by
/// [`Sweeper::integrate_new_info`], and snapshotted by
/// [`Sweeper::calculate_board`]. `reset` returns it to a blank board of the
/// same dimensions.
#[derive(Debug, Clone)]
pub struct Sweeper {
    version: Version,
    height: usize,
    width: usize,
    bombs: u32,
    board: Vec<Vec<String>>,
    constraints: Vec<BombEquation>,
    unconstrained: BTreeSet<Tile>,
    message: String,
    contradicted: bool,
}

impl Sweeper {
    pub fn new(version: Version, height: usize, width: usize, bombs: u32) -> Self {
        let mut sweeper = Sweeper {
            version,
            height,
            width,
            bombs,
            board: Vec::new(),
            constraints: Vec::new(),
            unconstrained: BTreeSet::new(),
            message: String::new(),
            contradicted: false,
        };
        sweeper.reset();
        sweeper
    }

    /// Builds a `Sweeper` at the given version/difficulty preset.
    pub fn for_preset(version: Version, difficulty: Difficulty) -> Self {
        let (height, width, bombs) = presets::dimensions(version, difficulty);
        Sweeper::new(version, height, width, bombs)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn bombs(&self) -> u32 {
        self.bombs
    }

    /// The displayed label at `(row, col)`: the observed reveal, `"S"`,
    /// `"B/R"`, an integer percent like `"37%"`, or `""` if still covered
    /// and unresolved.
    pub fn board(&self, row: usize, col: usize) -> &str {
        &self.board[row][col]
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Zeroes the board, empties the constraint store, and marks every
    /// tile unconstrained.
    pub fn reset(&mut self) {
        self.board = vec![vec![String::new(); self.width]; self.height];
        self.constraints.clear();
        self.unconstrained = (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .collect();
        self.message.clear();
        self.contradicted = false;
    }

    /// Switches game version and resets to that version's easy preset.
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
        self.set_difficulty(Difficulty::Easy);
    }

    /// Switches to a named difficulty preset of the current version and
    /// resets.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let (height, width, bombs) = presets::dimensions(self.version, difficulty);
        self.height = height;
        self.width = width;
        self.bombs = bombs;
        self.reset();
    }

    /// Sets custom dimensions and resets.
    pub fn set_custom(&mut self, height: usize, width: usize, bombs: u32) {
        self.height = height;
        self.width = width;
        self.bombs = bombs;
        self.reset();
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(SolverError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Ingests a revealed label at `(row, col)`.
    ///
    /// A numeric/colour label writes the label to the board, removes the
    /// tile and its neighbours from the unconstrained set, and pushes the
    /// tile-is-safe and neighbour-bomb-count equations. A bomb label
    /// removes the tile from the unconstrained set and pushes a
    /// tile-is-bomb equation. An empty or unrecognised label is a no-op.
    /// A contradiction sets [`Self::message`] to `"Impossible layout"` and
    /// leaves the Sweeper unusable for [`Self::calculate_board`] until
    /// [`Self::reset`].
    pub fn integrate_new_info(&mut self, row: usize, col: usize, label: &str) -> Result<()> {
        self.check_bounds(row, col)?;
        let tile = (row, col);
        self.board[row][col] = label.to_string();

        match labels::classify(self.version, label) {
            Label::Count(bomb_counts) => {
                self.unconstrained.remove(&tile);
                let neighbour_tiles = neighbours(row, col, self.height, self.width);
                for n in &neighbour_tiles {
                    self.unconstrained.remove(n);
                }
                let new_equations = vec![
                    BombEquation::new([tile], [0]),
                    BombEquation::new(neighbour_tiles, bomb_counts.into_iter().map(i64::from)),
                ];
                self.apply_integration(new_equations);
            }
            Label::Bomb => {
                self.unconstrained.remove(&tile);
                self.apply_integration(vec![BombEquation::new([tile], [1])]);
            }
            Label::Covered => {}
        }
        Ok(())
    }

    fn apply_integration(&mut self, new_equations: Vec<BombEquation>) {
        if let Err(SolverError::Contradiction) = integrator::integrate(&mut self.constraints, new_equations) {
            self.contradicted = true;
            self.message = IMPOSSIBLE_LAYOUT.to_string();
        }
    }

    /// Recomputes the probability board from the current constraint store
    /// and unconstrained set (spec.md §4.5). Idempotent: calling it twice
    /// with no intervening observation produces the same board view.
    pub fn calculate_board(&mut self) {
        if self.contradicted {
            return;
        }

        let solution = match solve_area(&self.constraints) {
            Ok(s) => s,
            Err(SolverError::ComponentTooLarge { tiles, limit }) => {
                self.message = format!(
                    "Constraint component too large to solve ({tiles} tiles, limit {limit})"
                );
                return;
            }
            Err(SolverError::Contradiction) => {
                // solve_area never surfaces this directly; defensive only.
                self.contradicted = true;
                self.message = IMPOSSIBLE_LAYOUT.to_string();
                return;
            }
            Err(e) => {
                debug!("calculate_board: unexpected error from solve_area: {e}");
                return;
            }
        };

        let num_unconstrained = self.unconstrained.len() as i64;
        let total_bombs = self.bombs as i64;

        let mut bomb_instances: std::collections::BTreeMap<Tile, BigUint> =
            std::collections::BTreeMap::new();
        let mut unconstrained_instances = BigUint::zero();
        let mut total_layouts = BigUint::zero();

        for (k, freq, n_k) in solution.iter() {
            let remaining = total_bombs - i64::from(k);
            let remainder_layouts = comb(num_unconstrained, remaining);
            for (&tile, count) in freq {
                *bomb_instances.entry(tile).or_insert_with(BigUint::zero) +=
                    count * &remainder_layouts;
            }
            unconstrained_instances += n_k * comb(num_unconstrained - 1, remaining - 1);
            total_layouts += n_k * &remainder_layouts;
        }

        if total_layouts.is_zero() {
            self.message = IMPOSSIBLE_LAYOUT.to_string();
            return;
        }

        for &tile in &self.unconstrained {
            bomb_instances.insert(tile, unconstrained_instances.clone());
        }

        let mut deferred = Vec::new();
        let mut newly_certain = Vec::new();
        for (&(row, col), count) in &bomb_instances {
            if count.is_zero() {
                if !matches!(labels::classify(self.version, &self.board[row][col]), Label::Count(_)) {
                    self.board[row][col] = "S".to_string();
                }
                deferred.push(BombEquation::new([(row, col)], [0]));
                newly_certain.push((row, col));
            } else if *count == total_layouts {
                if !labels::is_observed_bomb(&self.board[row][col]) {
                    self.board[row][col] = "B/R".to_string();
                }
                deferred.push(BombEquation::new([(row, col)], [1]));
                newly_certain.push((row, col));
            } else {
                let pct = percent_round_half_even(count, &total_layouts);
                self.board[row][col] = format!("{pct}%");
            }
        }

        self.apply_integration(deferred);
        for tile in newly_certain {
            self.unconstrained.remove(&tile);
        }
    }
}

/// `round(100 * count / total)`, rounding an exact half to even.
fn percent_round_half_even(count: &BigUint, total: &BigUint) -> u32 {
    let scaled = count * 100u32;
    let quotient = &scaled / total;
    let remainder = &scaled % total;
    let twice_remainder = &remainder * 2u32;

    use std::cmp::Ordering::*;
    let rounded = match twice_remainder.cmp(total) {
        Less => quotient.clone(),
        Greater => quotient.clone() + 1u32,
        Equal => {
            if &quotient % 2u32 == BigUint::zero() {
                quotient.clone()
            } else {
                quotient.clone() + 1u32
            }
        }
    };
    rounded
        .to_string()
        .parse()
        .expect("percent fits in u32 for any board this solver accepts")
}
