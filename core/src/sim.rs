//! Simulation driver that accumulates changes for a consumer.
//!
//! A frontend that mirrors the board (for example, to draw it) doesn't need to
//! see every intermediate generation. `Simulation` records the latest state of
//! every cell that changed since the last time the frontend asked, whether it
//! changed because of a step or because of an external edit.

use log::debug;

use crate::board::{Board, BoardResult};
use crate::cells::CellMap;

/// A board, along with its generation count and the changes that have not
/// yet been pulled.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    generation: u64,
    accumulated: CellMap,
}

impl From<Board> for Simulation {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl Simulation {
    /// Constructs a simulation of a board at generation zero.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
            accumulated: CellMap::default(),
        }
    }

    /// Returns the simulated board.
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Returns the number of generations that have elapsed in the simulation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Steps forward by one generation and returns the number of cells that
    /// changed.
    pub fn step(&mut self) -> BoardResult<usize> {
        let changes = self.board.step()?;
        self.generation += 1;
        let count = changes.len();
        self.accumulated.extend(changes);
        Ok(count)
    }

    /// Steps forward by the given number of generations and returns the total
    /// number of cell changes.
    pub fn step_by(&mut self, gens: u64) -> BoardResult<usize> {
        let mut total = 0;
        for _ in 0..gens {
            total += self.step()?;
        }
        debug!(
            "Stepped {} generations to generation {} ({} changes)",
            gens, self.generation, total,
        );
        Ok(total)
    }

    /// Applies external edits to the board.
    pub fn push_changes(&mut self, changes: CellMap) {
        self.board.apply_external_changes(&changes);
        let size = self.board.size() as isize;
        self.accumulated
            .extend(changes.into_iter().map(|(pos, state)| (pos.wrap(size), state)));
    }

    /// Returns the latest state of every cell that changed since the last
    /// call, and forgets them.
    pub fn pull_changes(&mut self) -> CellMap {
        std::mem::take(&mut self.accumulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::cell_map;
    use crate::rule::{RuleSet, WireWorld};
    use crate::vec2::IVec2;

    fn wire() -> Simulation {
        let mut board = Board::new(8, 4, 0).unwrap();
        board.set_rule(WireWorld.into_arc());
        let mut sim = Simulation::from(board);
        sim.push_changes(cell_map((0..8).map(|x| (x, 3, WireWorld::CONDUCTOR))));
        sim.push_changes(cell_map(vec![(1, 3, WireWorld::HEAD), (-8, 3, WireWorld::TAIL)]));
        sim
    }

    #[test]
    fn test_sim_pull_changes() {
        let mut sim = wire();
        let pulled = sim.pull_changes();
        assert_eq!(8, pulled.len());
        assert_eq!(Some(&WireWorld::HEAD), pulled.get(&IVec2::new(1, 3)));
        assert_eq!(Some(&WireWorld::TAIL), pulled.get(&IVec2::new(0, 3)));
        assert!(sim.pull_changes().is_empty());

        assert_eq!(3, sim.step().unwrap());
        assert_eq!(1, sim.generation());
        assert_eq!(
            cell_map(vec![
                (2, 3, WireWorld::HEAD),
                (1, 3, WireWorld::TAIL),
                (0, 3, WireWorld::CONDUCTOR),
            ]),
            sim.pull_changes(),
        );
    }

    #[test]
    fn test_sim_accumulates_latest_state() {
        let mut sim = wire();
        sim.pull_changes();
        // The electron goes all the way around the loop.
        assert_eq!(3 * 8, sim.step_by(8).unwrap());
        assert_eq!(8, sim.generation());
        let pulled = sim.pull_changes();
        assert_eq!(8, pulled.len());
        assert_eq!(Some(&WireWorld::HEAD), pulled.get(&IVec2::new(1, 3)));
        assert_eq!(Some(&WireWorld::CONDUCTOR), pulled.get(&IVec2::new(4, 3)));
    }
}
