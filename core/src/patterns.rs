//! Well-known starting patterns, as changes to apply to an empty board.

use crate::cells::{cell_map, CellMap};
use crate::rule::{Ant, WireWorld};
use crate::vec2::IVec2;

/// Returns a Life glider whose bounding box has its lowest corner at `origin`.
///
/// Every four generations, the glider moves by `(1, 1)`.
pub fn glider(origin: IVec2) -> CellMap {
    cell_map(vec![(1, 0, 1), (2, 1, 1), (0, 2, 1), (1, 2, 1), (2, 2, 1)])
        .into_iter()
        .map(|(pos, state)| (pos + origin, state))
        .collect()
}

/// Returns a WireWorld wire running along the row `y` all the way around a
/// board of side length `size`, carrying one electron toward negative X.
///
/// Near the end of the wire is a diode, which lets the electron through in
/// this direction.
///
/// # Panics
///
/// This function panics if `size` is less than 8.
pub fn wire_loop(size: isize, y: isize) -> CellMap {
    assert!(size >= 8, "Wire loop needs a board of size at least 8");
    let gap = size - 5;
    let mut cells = cell_map((0..size).map(|x| (x, y, WireWorld::CONDUCTOR)));
    cells.extend(cell_map(vec![
        (gap, y - 1, WireWorld::CONDUCTOR),
        (gap + 1, y - 1, WireWorld::CONDUCTOR),
        (gap, y + 1, WireWorld::CONDUCTOR),
        (gap + 1, y + 1, WireWorld::CONDUCTOR),
        (gap, y, WireWorld::EMPTY),
        (0, y, WireWorld::HEAD),
        (1, y, WireWorld::TAIL),
    ]));
    cells
}

/// Returns a single Langton's ant on an unvisited cell at `pos`.
pub fn ant(pos: IVec2) -> CellMap {
    cell_map(vec![(pos.x, pos.y, Ant::UNVISITED + 1)])
}
