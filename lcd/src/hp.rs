//! # Health Bars
//!
//! Each player has an 8-row bar of 16 packed bytes (48 pixels) along the top
//! of the screen. Player 1's bar sits against the left edge and grows from the
//! centre of the screen outward (right to left); player 2's is its mirror
//! image against the right edge and grows left to right.
//!
//! ```text
//!  col 0            15                    27             42
//!      ░░░░░░░░░░▒████  row 6..=13           ████▒░░░░░░░░░░
//!      player 1 ←──                              ──→ player 2
//! ```
//!
//! One row, read in player 1's order, is built from health `hp` as
//!
//! | Run      | Bytes            | Value                              |
//! |----------|------------------|------------------------------------|
//! | empty    | `15 - hp / 3`    | `0x00`                             |
//! | boundary | 1 if `hp % 3 > 0`| `0x03` (one pixel), `0x1F` (two)   |
//! | full     | the rest         | `0xFF`                             |
//!
//! so the bar always shows at least one lit byte at its anchor, and 45 or
//! more health saturates to a fully lit row. Player 2's row is the same row
//! reversed with every byte [mirrored](crate::pixel::mirror).

use crate::{
    error::OutOfRange,
    pixel::{self, PIXELS_PER_BYTE, Triplet},
    window::Window,
};

/// Packed bytes in one bar row.
pub const ROW_BYTES: usize = 16;

/// Rows in a bar.
pub const ROWS: usize = 8;

/// First and last DDRAM row of both bars.
pub const FIRST_ROW: u8 = 6;
pub const LAST_ROW: u8 = FIRST_ROW + ROWS as u8 - 1;

/// Health at and above which the bar is drawn completely lit.
pub const SATURATION: u8 = ((ROW_BYTES - 1) * PIXELS_PER_BYTE) as u8;

const EMPTY: u8 = Triplet::NONE.bits();
const FULL: u8 = Triplet::ALL.bits();

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Where this player's bar lives in DDRAM.
    pub const fn window(self) -> Window {
        match self {
            Player::One => Window::new(0, ROW_BYTES as u8 - 1, FIRST_ROW, LAST_ROW),
            Player::Two => Window::new(27, 27 + ROW_BYTES as u8 - 1, FIRST_ROW, LAST_ROW),
        }
    }

    pub const fn direction(self) -> FillDirection {
        match self {
            Player::One => FillDirection::RightToLeft,
            Player::Two => FillDirection::LeftToRight,
        }
    }

    pub fn fill(self) -> Fill {
        Fill::new(self.direction())
    }
}

impl TryFrom<u8> for Player {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(OutOfRange(value)),
        }
    }
}

/// Which way a bar grows as health rises.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillDirection {
    /// Anchored at the right end of the row.
    RightToLeft,
    /// Anchored at the left end of the row.
    LeftToRight,
}

/// Bytes for a partly lit triplet at the edge of the lit run, indexed by
/// `hp % 3 - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundaryTable(pub [u8; 2]);

impl BoundaryTable {
    /// Partial bytes for a bar anchored on the right: the lit pixels hug the
    /// right of the triplet.
    pub const ANCHORED_RIGHT: BoundaryTable = BoundaryTable([
        Triplet::RIGHT.bits(),
        Triplet::MIDDLE.union(Triplet::RIGHT).bits(),
    ]);

    pub fn mirrored(&self) -> BoundaryTable {
        BoundaryTable(self.0.map(pixel::mirror))
    }

    pub fn for_direction(direction: FillDirection) -> BoundaryTable {
        match direction {
            FillDirection::RightToLeft => Self::ANCHORED_RIGHT,
            FillDirection::LeftToRight => Self::ANCHORED_RIGHT.mirrored(),
        }
    }

    fn get(&self, remainder: u8) -> Option<u8> {
        match remainder {
            1 | 2 => Some(self.0[remainder as usize - 1]),
            _ => None,
        }
    }
}

/// How one bar row divides into runs, counted from the empty end.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Split {
    pub empty: usize,
    pub boundary: Option<u8>,
    pub full: usize,
}

impl Split {
    pub fn boundary_bytes(&self) -> usize {
        self.boundary.is_some() as usize
    }

    pub fn total(&self) -> usize {
        self.empty + self.boundary_bytes() + self.full
    }
}

/// The bar fill algorithm for one direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fill {
    pub direction: FillDirection,
    pub boundaries: BoundaryTable,
}

impl Fill {
    pub fn new(direction: FillDirection) -> Self {
        Self {
            direction,
            boundaries: BoundaryTable::for_direction(direction),
        }
    }

    pub fn split(&self, health: u8) -> Split {
        if health >= SATURATION {
            return Split {
                empty: 0,
                boundary: None,
                full: ROW_BYTES,
            };
        }
        let whole = (health as usize) / PIXELS_PER_BYTE;
        let boundary = self.boundaries.get(health % PIXELS_PER_BYTE as u8);
        let empty = ROW_BYTES - 1 - whole;
        Split {
            empty,
            boundary,
            full: ROW_BYTES - empty - boundary.is_some() as usize,
        }
    }

    /// One bar row, left to right as it goes to the controller.
    pub fn row(&self, health: u8) -> [u8; ROW_BYTES] {
        let split = self.split(health);
        let mut row = [EMPTY; ROW_BYTES];
        let lit = &mut row[split.empty..];
        if let Some(boundary) = split.boundary {
            lit[0] = boundary;
            lit[1..].fill(FULL);
        } else {
            lit.fill(FULL);
        }
        if self.direction == FillDirection::LeftToRight {
            row.reverse();
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_tables_are_mirrors() {
        assert_eq!(BoundaryTable::ANCHORED_RIGHT, BoundaryTable([0x03, 0x1F]));
        assert_eq!(
            BoundaryTable::for_direction(FillDirection::LeftToRight),
            BoundaryTable([0xE0, 0xFC])
        );
    }

    #[test]
    fn zero_health_keeps_the_anchor_byte() {
        let mut expected = [0x00; ROW_BYTES];
        expected[15] = 0xFF;
        assert_eq!(Player::One.fill().row(0), expected);

        let mut expected = [0x00; ROW_BYTES];
        expected[0] = 0xFF;
        assert_eq!(Player::Two.fill().row(0), expected);
    }

    #[test]
    fn boundary_bytes_by_remainder() {
        let fill = Player::One.fill();
        // 1 → one pixel
        let row = fill.row(1);
        assert_eq!(row[..15], [0x00; 15]);
        assert_eq!(row[15], 0x03);
        // 2 → two pixels
        let row = fill.row(2);
        assert_eq!(row[15], 0x1F);
        // 4 → boundary then one full byte
        let row = fill.row(4);
        assert_eq!(row[..14], [0x00; 14]);
        assert_eq!(row[14..], [0x03, 0xFF]);
        // 41 → 13 whole, 2 left over
        let row = fill.row(41);
        assert_eq!(row[..2], [0x00; 2]);
        assert_eq!(row[2], 0x1F);
        assert_eq!(row[3..], [0xFF; 13]);
    }

    #[test]
    fn saturates_at_and_above_45() {
        for health in [45, 46, 47, 48, 99, 100, 127, 255] {
            assert_eq!(Player::One.fill().row(health), [0xFF; ROW_BYTES], "hp {health}");
            assert_eq!(Player::Two.fill().row(health), [0xFF; ROW_BYTES], "hp {health}");
        }
        let last = Player::One.fill().row(44);
        assert_eq!(last[..2], [0x00, 0x1F]);
        assert_eq!(last[2..], [0xFF; 14]);
    }

    #[test]
    fn runs_always_fill_the_row() {
        for direction in [FillDirection::RightToLeft, FillDirection::LeftToRight] {
            let fill = Fill::new(direction);
            for health in 0..=u8::MAX {
                assert_eq!(fill.split(health).total(), ROW_BYTES, "hp {health}");
            }
        }
    }

    #[test]
    fn players_are_bitwise_mirrors() {
        for health in 0..=100 {
            let one = Player::One.fill().row(health);
            let two = Player::Two.fill().row(health);
            for i in 0..ROW_BYTES {
                assert_eq!(two[i], pixel::mirror(one[ROW_BYTES - 1 - i]), "hp {health} byte {i}");
            }
        }
    }

    #[test]
    fn lit_pixels_track_health_between_triplet_steps() {
        let lit = |health| {
            Player::One
                .fill()
                .row(health)
                .iter()
                .flat_map(|&b| pixel::levels(b))
                .filter(|&l| l == pixel::MAX_LEVEL)
                .count()
        };
        for health in 0..SATURATION {
            if health % 3 != 0 {
                assert_eq!(lit(health), health as usize, "hp {health}");
            }
        }
        assert_eq!(lit(SATURATION), ROW_BYTES * PIXELS_PER_BYTE);
    }

    #[test]
    fn bar_windows() {
        assert_eq!(Player::One.window(), Window::new(0, 15, 6, 13));
        assert_eq!(Player::Two.window(), Window::new(27, 42, 6, 13));
        assert_eq!(Player::One.window().byte_count(), ROW_BYTES * ROWS);
    }

    #[test]
    fn player_from_number() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(0), Err(OutOfRange(0)));
        assert_eq!(Player::try_from(3), Err(OutOfRange(3)));
    }
}
