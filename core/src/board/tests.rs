use super::*;
use crate::cells::cell_map;
use crate::rule::{DummyRule, WireWorld, LIFE};

#[test]
fn test_board_invalid_configuration() {
    assert_eq!(BoardError::InvalidSize, Board::new(0, 2, 0).unwrap_err());

    let mut board = Board::new(4, 2, 0).unwrap();
    assert_eq!(Err(BoardError::MissingRule), board.step());
    // A failed step leaves the board untouched.
    assert!(board.frontier().is_none());
}

#[test]
fn test_board_new_filled_with_default() {
    let board = Board::new(5, 4, 3).unwrap();
    assert_eq!(5, board.size());
    assert_eq!(4, board.num_states_hint());
    assert_eq!(3, board.default_state());
    assert_eq!(0, board.population());
    assert!(board.rule().is_none());
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(3, board.cell(IVec2::new(x, y)));
        }
    }
}

#[test]
fn test_board_toroidal_addressing() {
    let mut board = Board::new(5, 2, 0).unwrap();
    board.apply_external_changes(&cell_map(vec![(-1, 7, 1)]));
    assert_eq!(1, board.cell(IVec2::new(4, 2)));
    assert_eq!(1, board.cell(IVec2::new(-6, -3)));
    assert_eq!(1, board.cell(IVec2::new(9, 12)));
    assert_eq!(
        cell_map(vec![(4, 2, 1)]),
        board.non_default_cells(),
    );
}

#[test]
fn test_board_external_changes_before_first_step() {
    let mut board = Board::new(8, 2, 0).unwrap();
    board.apply_external_changes(&cell_map(vec![(1, 1, 1), (2, 1, 1)]));
    assert_eq!(2, board.population());
    // The board has never been stepped, so every cell will be evaluated.
    assert!(board.frontier().is_none());
}

#[test]
fn test_board_external_changes_merge_into_frontier() {
    let mut board = Board::new(8, 2, 0).unwrap();
    board.set_rule(LIFE.into_arc());
    // Blinker.
    board.apply_external_changes(&cell_map(vec![(3, 2, 1), (3, 3, 1), (3, 4, 1)]));
    let changes = board.step().unwrap();
    assert_eq!(4, changes.len());
    let frontier = board.frontier().unwrap().clone();
    assert_eq!(changes.keys().copied().collect::<CellSet>(), frontier);

    // Only the changed cells themselves are merged; no propagation happens
    // until the next step.
    board.apply_external_changes(&cell_map(vec![(-1, -1, 1)]));
    let mut expected = frontier;
    expected.insert(IVec2::new(7, 7));
    assert_eq!(&expected, board.frontier().unwrap());
}

#[test]
fn test_board_reset_frontier() {
    let mut board = Board::new(6, 2, 0).unwrap();
    board.set_rule(LIFE.into_arc());
    board.step().unwrap();
    assert_eq!(Some(&CellSet::default()), board.frontier());
    board.reset_frontier();
    assert!(board.frontier().is_none());
}

#[test]
fn test_board_identity_rule_goes_quiet() {
    let mut board = Board::new(10, 256, 0).unwrap();
    board.set_rule(DummyRule.into_arc());
    board.apply_external_changes(&cell_map(vec![(0, 0, 7), (9, 3, 200), (5, 5, 1)]));

    assert!(board.step().unwrap().is_empty());
    // Empty, but not absent.
    assert_eq!(Some(&CellSet::default()), board.frontier());
    assert!(board.step().unwrap().is_empty());
    assert_eq!(Some(&CellSet::default()), board.frontier());
    assert_eq!(3, board.population());
}

#[test]
fn test_board_wireworld_single_head() {
    let mut board = Board::new(20, 4, WireWorld::EMPTY).unwrap();
    board.set_rule(WireWorld.into_arc());
    board.apply_external_changes(&cell_map(vec![(10, 10, WireWorld::HEAD)]));

    let changes = board.step().unwrap();
    assert_eq!(cell_map(vec![(10, 10, WireWorld::TAIL)]), changes);
    assert_eq!(WireWorld::TAIL, board.cell(IVec2::new(10, 10)));
    assert_eq!(1, board.population());

    // The tail decays into a conductor, which then stays put forever.
    let changes = board.step().unwrap();
    assert_eq!(cell_map(vec![(10, 10, WireWorld::CONDUCTOR)]), changes);
    assert!(board.step().unwrap().is_empty());
}

#[test]
fn test_board_rule_swap_keeps_frontier() {
    let mut board = Board::new(6, 2, 0).unwrap();
    board.set_rule(DummyRule.into_arc());
    board.apply_external_changes(&cell_map(vec![(2, 2, 1)]));
    board.step().unwrap();
    board.apply_external_changes(&cell_map(vec![(3, 3, 1)]));

    board.set_rule(LIFE.into_arc());
    assert_eq!(1, board.frontier().unwrap().len());
    assert_eq!("B3/S23", board.rule().unwrap().to_string());
    // Both lonely cells die, because the second one is in the frontier and the
    // first one is in its neighborhood.
    let changes = board.step().unwrap();
    assert_eq!(cell_map(vec![(2, 2, 0), (3, 3, 0)]), changes);
}
