//! # Round Markers
//!
//! Two small circles under each health bar count rounds won. Each marker is
//! a 9×10 pixel sprite (3 packed bytes × 10 rows) drawn either as an outline
//! or filled in.
//!
//! ```text
//!  cols 0..=2  3..=5                     36..=38  39..=41
//!      ( )    ( )      rows 20..=29        ( )     ( )
//!    LeftOuter LeftInner                RightInner RightOuter
//! ```

use crate::{
    assets::{self, Sprite},
    error::OutOfRange,
    window::Window,
};

/// First and last DDRAM row of every marker.
pub const FIRST_ROW: u8 = 20;
pub const LAST_ROW: u8 = 29;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CirclePosition {
    LeftOuter,
    LeftInner,
    RightInner,
    RightOuter,
}

impl CirclePosition {
    pub const ALL: [CirclePosition; 4] = [
        CirclePosition::LeftOuter,
        CirclePosition::LeftInner,
        CirclePosition::RightInner,
        CirclePosition::RightOuter,
    ];

    const fn first_column(self) -> u8 {
        match self {
            CirclePosition::LeftOuter => 0,
            CirclePosition::LeftInner => 3,
            CirclePosition::RightInner => 36,
            CirclePosition::RightOuter => 39,
        }
    }

    pub const fn window(self) -> Window {
        let col = self.first_column();
        Window::new(col, col + 2, FIRST_ROW, LAST_ROW)
    }
}

/// Positions are numbered 0-3, left to right.
impl TryFrom<u8> for CirclePosition {
    type Error = OutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(OutOfRange(index))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ring {
    Empty,
    Filled,
}

impl Ring {
    pub const fn sprite(self) -> &'static Sprite {
        match self {
            Ring::Empty => &assets::EMPTY_CIRCLE,
            Ring::Filled => &assets::FILLED_CIRCLE,
        }
    }
}

impl From<bool> for Ring {
    fn from(filled: bool) -> Self {
        if filled { Ring::Filled } else { Ring::Empty }
    }
}

/// `0` is the outline, `1` the filled marker.
impl TryFrom<u8> for Ring {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Ring::Empty),
            1 => Ok(Ring::Filled),
            _ => Err(OutOfRange(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_map_to_fixed_windows() {
        let windows = CirclePosition::ALL.map(CirclePosition::window);
        assert_eq!(
            windows,
            [
                Window::new(0, 2, 20, 29),
                Window::new(3, 5, 20, 29),
                Window::new(36, 38, 20, 29),
                Window::new(39, 41, 20, 29),
            ]
        );
    }

    #[test]
    fn windows_fit_the_sprites() {
        for position in CirclePosition::ALL {
            for ring in [Ring::Empty, Ring::Filled] {
                assert_eq!(position.window().byte_count(), ring.sprite().byte_count());
            }
        }
    }

    #[test]
    fn index_decoding() {
        assert_eq!(CirclePosition::try_from(0), Ok(CirclePosition::LeftOuter));
        assert_eq!(CirclePosition::try_from(3), Ok(CirclePosition::RightOuter));
        assert_eq!(CirclePosition::try_from(4), Err(OutOfRange(4)));
        assert_eq!(Ring::try_from(1), Ok(Ring::Filled));
        assert_eq!(Ring::try_from(2), Err(OutOfRange(2)));
        assert_eq!(Ring::from(false), Ring::Empty);
    }
}
