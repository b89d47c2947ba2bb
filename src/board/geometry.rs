//! Square-index tables used to keep generated moves on the board.
//!
//! Moves are expressed as index offsets, so a piece near the left or right
//! edge could "wrap" onto the far column of an adjacent row. These tables
//! answer column/row membership so the generators can reject such offsets.

use once_cell::sync::Lazy;

pub(crate) const NUM_TILES: usize = 64;
pub(crate) const TILES_PER_ROW: usize = 8;

fn column(index: usize) -> [bool; NUM_TILES] {
    let mut members = [false; NUM_TILES];
    let mut sq = index;
    while sq < NUM_TILES {
        members[sq] = true;
        sq += TILES_PER_ROW;
    }
    members
}

fn row(index: usize) -> [bool; NUM_TILES] {
    let mut members = [false; NUM_TILES];
    let start = index * TILES_PER_ROW;
    for sq in start..start + TILES_PER_ROW {
        members[sq] = true;
    }
    members
}

pub(crate) static FIRST_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| column(0));
pub(crate) static SECOND_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| column(1));
pub(crate) static SEVENTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| column(6));
pub(crate) static EIGHTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| column(7));

/// Row membership tables, indexed top to bottom (row 0 is the eighth rank).
pub(crate) static ROWS: Lazy<[[bool; NUM_TILES]; 8]> = Lazy::new(|| {
    let mut rows = [[false; NUM_TILES]; 8];
    for (i, r) in rows.iter_mut().enumerate() {
        *r = row(i);
    }
    rows
});

/// Returns true if `index` names a square on the board.
#[inline]
pub(crate) fn is_valid_index(index: i32) -> bool {
    (0..NUM_TILES as i32).contains(&index)
}
