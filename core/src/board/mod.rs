//! Dense toroidal grid with incremental stepping.
//!
//! A `Board` stores every cell of a square grid whose edges wrap around. The
//! first call to `step()` evaluates the rule at every cell, but after that the
//! board remembers which cells changed (the _frontier_) and only re-evaluates
//! cells whose neighborhood contains one of them. For patterns whose activity
//! is localized, this makes the cost of a step proportional to the size of
//! the active region rather than the area of the grid.

use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::cells::{CellMap, CellSet, CellState};
use crate::rule::{inverse_neighborhood, RuleSet};
use crate::vec2::IVec2;

/// Result type returned by fallible board routines.
pub type BoardResult<T> = Result<T, BoardError>;

/// Invalid board configuration.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BoardError {
    #[error("invalid configuration: board size must be positive")]
    InvalidSize,
    #[error("invalid configuration: no rule has been set")]
    MissingRule,
}

/// Square toroidal grid of cells, simulated using a `RuleSet`.
#[derive(Clone)]
pub struct Board {
    /// Side length of the grid.
    size: isize,
    /// Cell states in row-major order.
    cells: Vec<CellState>,
    /// State that every cell starts in.
    default_state: CellState,
    /// Number of states that the creator of the board expects, for reference.
    num_states_hint: usize,
    /// Active rule, along with its inverse neighborhood.
    rule: Option<(Arc<dyn RuleSet>, Vec<IVec2>)>,
    /// Cells that changed during the last step (plus any cells changed
    /// externally since then), or `None` if the board has not been stepped
    /// yet and every cell must be evaluated.
    frontier: Option<CellSet>,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("default_state", &self.default_state)
            .field("num_states_hint", &self.num_states_hint)
            .field("rule", &self.rule.as_ref().map(|(rule, _)| rule.to_string()))
            .field("frontier_len", &self.frontier.as_ref().map(CellSet::len))
            .finish()
    }
}

impl Board {
    /// Creates a `size`-by-`size` board filled with `default_state`.
    pub fn new(
        size: usize,
        num_states_hint: usize,
        default_state: CellState,
    ) -> BoardResult<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Self {
            size: size as isize,
            cells: vec![default_state; size * size],
            default_state,
            num_states_hint,
            rule: None,
            frontier: None,
        })
    }

    /// Returns the side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }
    /// Returns the state that every cell started in.
    #[inline]
    pub fn default_state(&self) -> CellState {
        self.default_state
    }
    /// Returns the number of states given when the board was created.
    #[inline]
    pub fn num_states_hint(&self) -> usize {
        self.num_states_hint
    }
    /// Returns the active rule, if there is one.
    pub fn rule(&self) -> Option<&Arc<dyn RuleSet>> {
        self.rule.as_ref().map(|(rule, _)| rule)
    }
    /// Returns the set of cells that will seed the next step, or `None` if the
    /// next step will evaluate every cell.
    pub fn frontier(&self) -> Option<&CellSet> {
        self.frontier.as_ref()
    }

    /// Sets the rule used to step the board.
    ///
    /// This may be called at any time. The frontier is kept as-is, so if the
    /// new rule has a different neighborhood or transition function, call
    /// `reset_frontier()` as well.
    pub fn set_rule(&mut self, rule: Arc<dyn RuleSet>) {
        debug!(
            "Setting rule {} ({} states, {}-cell neighborhood)",
            rule,
            rule.num_states(),
            rule.neighborhood().len(),
        );
        let inverse = inverse_neighborhood(rule.neighborhood());
        self.rule = Some((rule, inverse));
    }

    /// Forgets the frontier, so that the next step evaluates every cell.
    pub fn reset_frontier(&mut self) {
        self.frontier = None;
    }

    /// Returns the state of the cell at `pos`, wrapping around the edges of
    /// the board.
    #[inline]
    pub fn cell(&self, pos: IVec2) -> CellState {
        self.cells[self.index(pos)]
    }

    /// Returns the number of cells that are not in the default state.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state != self.default_state)
            .count()
    }
    /// Returns every cell that is not in the default state.
    pub fn non_default_cells(&self) -> CellMap {
        self.positions()
            .zip(&self.cells)
            .filter(|&(_, &state)| state != self.default_state)
            .map(|(pos, &state)| (pos, state))
            .collect()
    }

    /// Overwrites cells without consulting the rule. Positions wrap around the
    /// edges of the board.
    ///
    /// If the board has been stepped before, the changed positions are added
    /// to the frontier so that the next step re-examines them.
    pub fn apply_external_changes(&mut self, changes: &CellMap) {
        for (&pos, &state) in changes {
            let pos = pos.wrap(self.size);
            let index = self.index(pos);
            self.cells[index] = state;
            if let Some(frontier) = &mut self.frontier {
                frontier.insert(pos);
            }
        }
    }

    /// Advances the board by one generation and returns the new state of
    /// every cell that changed.
    pub fn step(&mut self) -> BoardResult<CellMap> {
        let (rule, inverse) = self.rule.as_ref().ok_or(BoardError::MissingRule)?;
        let rule = &**rule;

        let mut values = Vec::with_capacity(rule.neighborhood().len());
        let mut changes = CellMap::default();
        let mut evaluate = |pos: IVec2| {
            values.clear();
            values.extend(
                rule.neighborhood()
                    .iter()
                    .map(|&offset| self.cell(pos + offset)),
            );
            let new_state = rule.next_state(&values);
            if new_state != self.cell(pos) {
                changes.insert(pos, new_state);
            }
        };

        let checked = match &self.frontier {
            None => {
                self.positions().for_each(&mut evaluate);
                self.cells.len()
            }
            Some(frontier) => {
                let candidates = self.candidates(frontier, inverse);
                candidates.iter().copied().for_each(&mut evaluate);
                candidates.len()
            }
        };
        debug!("Checked {} cells; {} changed", checked, changes.len());

        for (&pos, &state) in &changes {
            let index = self.index(pos);
            self.cells[index] = state;
        }
        self.frontier = Some(changes.keys().copied().collect());
        Ok(changes)
    }

    /// Returns every cell whose neighborhood contains a cell in `frontier`.
    fn candidates(&self, frontier: &CellSet, inverse: &[IVec2]) -> CellSet {
        trace!("Expanding frontier of {} cells", frontier.len());
        frontier
            .iter()
            .cartesian_product(inverse)
            .map(|(&pos, &offset)| (pos + offset).wrap(self.size))
            .collect()
    }

    /// Returns an iterator over every position on the board in row-major
    /// order.
    fn positions(&self) -> impl Iterator<Item = IVec2> {
        let size = self.size;
        (0..size)
            .cartesian_product(0..size)
            .map(|(y, x)| IVec2::new(x, y))
    }

    /// Returns the index into `cells` of a position, wrapping it first.
    #[inline]
    fn index(&self, pos: IVec2) -> usize {
        let pos = pos.wrap(self.size);
        (pos.y * self.size + pos.x) as usize
    }
}

#[cfg(test)]
mod tests;
