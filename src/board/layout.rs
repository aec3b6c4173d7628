//! Board geometry: the serpentine path, the special houses, and the
//! opening layout.
//!
//! ## Path
//!
//! The 30 tiles form a 3x10 grid traversed boustrophedon: the top row
//! runs left to right, the middle row right to left, the bottom row left
//! to right again. All rules work on the 1-based tile number; the grid
//! coordinates exist for presentation.
//!
//! ## Houses
//!
//! Five tiles near the end of the path carry special rules. The House of
//! Rebirth receives pieces knocked back by the water or a failed exit
//! roll; the House of Happiness blesses pieces that land on it and gates
//! the whole endgame; the House of Water knocks pieces back; the last
//! three houses release pieces from the board, each under its own roll
//! requirement.

use crate::core::color::PlayerColor;
use crate::core::piece::{ExitRequirement, Tile};

/// Total number of tiles on the board.
pub const BOARD_TILES: Tile = 30;

/// Columns per row of the grid.
pub const BOARD_COLUMNS: u8 = 10;

/// Rows of the grid.
pub const BOARD_ROWS: u8 = 3;

/// Pieces per side.
pub const PIECES_PER_PLAYER: usize = 7;

/// Number of tiles seeded with alternating pieces at the start.
pub const STARTING_TILE_COUNT: Tile = 14;

/// Destination of pieces knocked back by the water or a failed exit roll.
pub const HOUSE_REBIRTH: Tile = 15;

/// Landing here blesses a piece; unblessed pieces may not move past it.
pub const HOUSE_HAPPINESS: Tile = 26;

/// Landing here sends the piece back to the House of Rebirth.
pub const HOUSE_WATER: Tile = 27;

/// Exit house requiring an exact throw of 3.
pub const HOUSE_THREE_TRUTHS: Tile = 28;

/// Exit house requiring an exact throw of 2.
pub const HOUSE_RE_ATOUM: Tile = 29;

/// The final tile; any throw releases a piece standing here.
pub const HOUSE_HORUS: Tile = 30;

/// Convert a tile number to (row, column) grid coordinates.
///
/// Rows are 0-based from the top; odd rows run right to left.
///
/// ```
/// use senet_engine::board::layout::tile_to_grid;
///
/// assert_eq!(tile_to_grid(1), (0, 0));
/// assert_eq!(tile_to_grid(11), (1, 9));
/// assert_eq!(tile_to_grid(20), (1, 0));
/// assert_eq!(tile_to_grid(30), (2, 9));
/// ```
#[must_use]
pub fn tile_to_grid(tile: Tile) -> (u8, u8) {
    assert!(
        (1..=BOARD_TILES).contains(&tile),
        "tile {} outside 1..=30",
        tile
    );

    let index = tile - 1;
    let row = index / BOARD_COLUMNS;
    let offset = index % BOARD_COLUMNS;
    let column = if row % 2 == 0 {
        offset
    } else {
        BOARD_COLUMNS - 1 - offset
    };
    (row, column)
}

/// Convert (row, column) grid coordinates back to a tile number.
///
/// Exact inverse of [`tile_to_grid`] over the 3x10 grid.
#[must_use]
pub fn grid_to_tile(row: u8, column: u8) -> Tile {
    assert!(row < BOARD_ROWS, "row {} outside 0..3", row);
    assert!(column < BOARD_COLUMNS, "column {} outside 0..10", column);

    let offset = if row % 2 == 0 {
        column
    } else {
        BOARD_COLUMNS - 1 - column
    };
    row * BOARD_COLUMNS + offset + 1
}

/// The exit requirement attached to a tile, if it is an exit house.
#[must_use]
pub const fn exit_requirement_for(tile: Tile) -> Option<ExitRequirement> {
    match tile {
        HOUSE_THREE_TRUTHS => Some(ExitRequirement::Exact(3)),
        HOUSE_RE_ATOUM => Some(ExitRequirement::Exact(2)),
        HOUSE_HORUS => Some(ExitRequirement::Any),
        _ => None,
    }
}

/// The traditional name of a special house, if the tile is one.
#[must_use]
pub const fn house_name(tile: Tile) -> Option<&'static str> {
    match tile {
        HOUSE_REBIRTH => Some("House of Rebirth"),
        HOUSE_HAPPINESS => Some("House of Happiness"),
        HOUSE_WATER => Some("House of Water"),
        HOUSE_THREE_TRUTHS => Some("House of Three Truths"),
        HOUSE_RE_ATOUM => Some("House of Re-Atoum"),
        HOUSE_HORUS => Some("House of Horus"),
        _ => None,
    }
}

/// Which color starts on `tile`, for tiles in the opening layout.
///
/// The first 14 tiles alternate colors, Light on tile 1.
#[must_use]
pub const fn starting_color(tile: Tile) -> Option<PlayerColor> {
    if tile == 0 || tile > STARTING_TILE_COUNT {
        return None;
    }
    if (tile - 1) % 2 == 0 {
        Some(PlayerColor::Light)
    } else {
        Some(PlayerColor::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_corners() {
        assert_eq!(tile_to_grid(1), (0, 0));
        assert_eq!(tile_to_grid(10), (0, 9));
        assert_eq!(tile_to_grid(11), (1, 9));
        assert_eq!(tile_to_grid(20), (1, 0));
        assert_eq!(tile_to_grid(21), (2, 0));
        assert_eq!(tile_to_grid(30), (2, 9));
    }

    #[test]
    fn test_grid_round_trip() {
        for tile in 1..=BOARD_TILES {
            let (row, column) = tile_to_grid(tile);
            assert_eq!(grid_to_tile(row, column), tile);
        }
    }

    #[test]
    fn test_grid_round_trip_from_coordinates() {
        for row in 0..BOARD_ROWS {
            for column in 0..BOARD_COLUMNS {
                let tile = grid_to_tile(row, column);
                assert_eq!(tile_to_grid(tile), (row, column));
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside 1..=30")]
    fn test_tile_zero_rejected() {
        tile_to_grid(0);
    }

    #[test]
    #[should_panic(expected = "outside 1..=30")]
    fn test_tile_past_end_rejected() {
        tile_to_grid(31);
    }

    #[test]
    fn test_exit_requirements() {
        assert_eq!(
            exit_requirement_for(HOUSE_THREE_TRUTHS),
            Some(ExitRequirement::Exact(3))
        );
        assert_eq!(
            exit_requirement_for(HOUSE_RE_ATOUM),
            Some(ExitRequirement::Exact(2))
        );
        assert_eq!(exit_requirement_for(HOUSE_HORUS), Some(ExitRequirement::Any));

        for tile in 1..HOUSE_THREE_TRUTHS {
            assert_eq!(exit_requirement_for(tile), None);
        }
    }

    #[test]
    fn test_house_names() {
        assert_eq!(house_name(HOUSE_WATER), Some("House of Water"));
        assert_eq!(house_name(HOUSE_HORUS), Some("House of Horus"));
        assert_eq!(house_name(1), None);
        assert_eq!(house_name(25), None);
    }

    #[test]
    fn test_starting_colors_alternate() {
        assert_eq!(starting_color(1), Some(PlayerColor::Light));
        assert_eq!(starting_color(2), Some(PlayerColor::Dark));
        assert_eq!(starting_color(13), Some(PlayerColor::Light));
        assert_eq!(starting_color(14), Some(PlayerColor::Dark));
        assert_eq!(starting_color(15), None);
        assert_eq!(starting_color(0), None);
    }
}
