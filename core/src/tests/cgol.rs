use crate::patterns;
use crate::prelude::*;

fn live_cells(board: &Board) -> CellSet {
    board.non_default_cells().keys().copied().collect()
}

fn shifted(cells: &CellSet, offset: IVec2, size: isize) -> CellSet {
    cells.iter().map(|&pos| (pos + offset).wrap(size)).collect()
}

fn life_board(size: usize) -> Board {
    let mut board = Board::new(size, 2, 0).unwrap();
    board.set_rule(LIFE.into_arc());
    board
}

#[test]
fn test_cgol_glider() {
    let mut board = life_board(16);
    board.apply_external_changes(&patterns::glider(IVec2::new(5, 5)));
    let start = live_cells(&board);
    assert_eq!(
        cell_map(vec![(6, 5, 1), (7, 6, 1), (5, 7, 1), (6, 7, 1), (7, 7, 1)])
            .keys()
            .copied()
            .collect::<CellSet>(),
        start,
    );

    for gen in 1..=4 {
        let changes = board.step().unwrap();
        // Each generation of a glider has four cells die or come alive.
        assert_eq!(4, changes.len(), "generation {}", gen);
        assert_eq!(5, board.population(), "generation {}", gen);
    }
    assert_eq!(shifted(&start, IVec2::new(1, 1), 16), live_cells(&board));
}

#[test]
fn test_cgol_glider_wraps_around() {
    let size = 12;
    let mut board = life_board(size);
    board.apply_external_changes(&patterns::glider(IVec2::new(9, 9)));
    let start = live_cells(&board);

    // After 4 * size generations the glider is back where it started.
    for _ in 0..4 * size {
        let changes = board.step().unwrap();
        assert_eq!(4, changes.len());
        // Only the glider's neighborhood is ever examined.
        assert!(board.frontier().unwrap().len() <= 9);
    }
    assert_eq!(start, live_cells(&board));
}

#[test]
fn test_cgol_still_life_and_oscillator() {
    let mut board = life_board(10);
    // Block.
    board.apply_external_changes(&cell_map(vec![(1, 1, 1), (1, 2, 1), (2, 1, 1), (2, 2, 1)]));
    // Blinker.
    board.apply_external_changes(&cell_map(vec![(6, 5, 1), (6, 6, 1), (6, 7, 1)]));
    let start = live_cells(&board);

    let first = board.step().unwrap();
    assert_eq!(
        cell_map(vec![(6, 5, 0), (6, 7, 0), (5, 6, 1), (7, 6, 1)]),
        first,
    );
    let second = board.step().unwrap();
    assert_eq!(4, second.len());
    assert_eq!(start, live_cells(&board));
}

#[test]
fn test_cgol_custom_totalistic_rule() {
    let mut board = Board::new(8, 2, 0).unwrap();
    board.set_rule(crate::rule::from_name("B1/S").unwrap());
    board.apply_external_changes(&cell_map(vec![(4, 4, 1)]));
    let changes = board.step().unwrap();
    // The single cell dies and all eight of its neighbors are born.
    assert_eq!(9, changes.len());
    assert_eq!(Some(&0), changes.get(&IVec2::new(4, 4)));
    assert_eq!(8, board.population());
}
