//! # Sprite Tables
//!
//! Every bitmap the game draws, stored exactly as the controller wants it:
//! row-major, one packed byte per three pixels (see [`crate::pixel`]).
//!
//! Each table is wrapped in a [`Sprite`] carrying its geometry. The
//! constructor is `const` and refuses, at compile time, a table whose length
//! is not `width_bytes × height_rows`.
//!
//! | Sprite          | Pixels  | Bytes × rows |
//! |-----------------|---------|--------------|
//! | `WALK_A`        | 18 × 40 | 6 × 40       |
//! | `WALK_B`        | 18 × 40 | 6 × 40       |
//! | `EMPTY_CIRCLE`  | 9 × 10  | 3 × 10       |
//! | `FILLED_CIRCLE` | 9 × 10  | 3 × 10       |
//! | `READY`         | 75 × 20 | 25 × 20      |
//! | `GO`            | 33 × 20 | 11 × 20      |

use crate::{
    pixel::{self, PIXELS_PER_BYTE},
    window::Window,
};

/// An immutable packed bitmap with its geometry attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub name: &'static str,
    pub width_bytes: u8,
    pub height_rows: u8,
    pub data: &'static [u8],
}

impl Sprite {
    pub const fn new(
        name: &'static str,
        width_bytes: u8,
        height_rows: u8,
        data: &'static [u8],
    ) -> Self {
        assert!(
            data.len() == width_bytes as usize * height_rows as usize,
            "sprite table length does not match its geometry"
        );
        Self {
            name,
            width_bytes,
            height_rows,
            data,
        }
    }

    pub const fn byte_count(&self) -> usize {
        self.data.len()
    }

    pub const fn width_pixels(&self) -> usize {
        self.width_bytes as usize * PIXELS_PER_BYTE
    }

    /// The window this sprite covers when its top-left byte sits at
    /// `(col, row)`. `None` if it would run past coordinate 255.
    pub const fn window_at(&self, col: u8, row: u8) -> Option<Window> {
        Window::from_origin(col, row, self.width_bytes, self.height_rows)
    }

    /// Packed bytes of row `row`.
    pub fn row(&self, row: usize) -> Option<&'static [u8]> {
        let width = self.width_bytes as usize;
        self.data.get(row * width..(row + 1) * width)
    }

    /// Gray level of pixel `(x, y)` in sprite coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        let byte = *self.row(y)?.get(x / PIXELS_PER_BYTE)?;
        Some(pixel::levels(byte)[x % PIXELS_PER_BYTE])
    }
}

/// Walk cycle, first frame. 18 × 40 pixels.
pub const WALK_A: Sprite = Sprite::new("walk_a", 6, 40, &WALK_A_DATA);

const WALK_A_DATA: [u8; 240] = [
    0x00, 0x00, 0x03, 0xFF, 0xE0, 0x00,
    0x00, 0x00, 0xFF, 0xE0, 0xFF, 0x00,
    0x00, 0x1F, 0xE0, 0x00, 0x03, 0xE0,
    0x00, 0xFC, 0x00, 0x00, 0x00, 0xE0,
    0x03, 0xE0, 0x00, 0x00, 0x00, 0xFC,
    0x1F, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0xE0, 0x00, 0x00, 0x00, 0x00, 0x1F,
    0xE0, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xE0, 0x00, 0x00, 0x00, 0x00, 0x1F,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0x1F, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0x03, 0xE0, 0x00, 0x00, 0x00, 0xFC,
    0x00, 0xFC, 0x00, 0x00, 0x03, 0xE0,
    0x00, 0x1F, 0xFF, 0xFF, 0xFF, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x1F,
    0x00, 0x00, 0x03, 0xE0, 0x00, 0xFF,
    0x00, 0x00, 0x03, 0x00, 0x00, 0xFF,
    0x00, 0x00, 0x03, 0x00, 0x00, 0x1C,
    0x00, 0x00, 0x03, 0xE0, 0x00, 0xFC,
    0x00, 0x00, 0xFF, 0xFC, 0x00, 0xE0,
    0x00, 0xFF, 0x03, 0x1F, 0xFF, 0xE0,
    0x03, 0xE0, 0x03, 0x00, 0x00, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00,
    0x1F, 0x00, 0x03, 0x00, 0x00, 0x00,
    0x1C, 0x00, 0x03, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFF, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x1F, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0x1C, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xFC, 0x03, 0x00, 0x00,
    0x00, 0x00, 0xE0, 0x03, 0xE0, 0x00,
    0x00, 0x03, 0xE0, 0x00, 0xE0, 0x00,
    0xFF, 0xFF, 0x00, 0x00, 0x1C, 0x00,
    0xFF, 0x00, 0x00, 0x00, 0x1C, 0x00,
    0x1F, 0x00, 0x00, 0x00, 0x1C, 0x00,
    0x03, 0xE0, 0x00, 0x00, 0x1F, 0x00,
    0x00, 0xFC, 0x00, 0x00, 0x1F, 0xFF,
];

/// Walk cycle, second frame. 18 × 40 pixels.
pub const WALK_B: Sprite = Sprite::new("walk_b", 6, 40, &WALK_B_DATA);

const WALK_B_DATA: [u8; 240] = [
    0x00, 0x00, 0x03, 0xFF, 0xE0, 0x00,
    0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0x00, 0x1F, 0xE0, 0x00, 0x03, 0xE0,
    0x00, 0xFC, 0x00, 0x00, 0x00, 0xE0,
    0x03, 0xE0, 0x00, 0x00, 0x00, 0xFC,
    0x1F, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0xE0, 0x00, 0x00, 0x00, 0x00, 0x1F,
    0xE0, 0x00, 0x00, 0x00, 0x00, 0x03,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x1F,
    0x1C, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0x1F, 0x00, 0x00, 0x00, 0x00, 0x1C,
    0x03, 0xE0, 0x00, 0x00, 0x00, 0xFC,
    0x00, 0xFC, 0x00, 0x00, 0x03, 0xE0,
    0x00, 0x1F, 0xFF, 0xFF, 0xFF, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x03, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0x03, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0x1F, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0x1F, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xE3, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xE3, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xE3, 0x1F, 0xE0, 0x00,
    0x00, 0x03, 0xFF, 0x1F, 0xE0, 0x00,
    0x00, 0x03, 0xFF, 0x1F, 0xE0, 0x00,
    0x00, 0x00, 0xFF, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x1C, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x1C, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0xE0, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xE0, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0xE0, 0x1C, 0x00, 0x00,
    0x00, 0x03, 0xE0, 0x1C, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x1C, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x1C, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x1C, 0x00, 0x00,
    0x00, 0x1F, 0xFC, 0x1F, 0xFC, 0x00,
];

/// Round marker outline.
pub const EMPTY_CIRCLE: Sprite = Sprite::new("empty_circle", 3, 10, &EMPTY_CIRCLE_DATA);

const EMPTY_CIRCLE_DATA: [u8; 30] = [
    0x00, 0x00, 0x00,
    0x00, 0x1F, 0x00,
    0x03, 0xE0, 0xFC,
    0x03, 0x00, 0x1C,
    0x1C, 0x00, 0x03,
    0x1C, 0x00, 0x03,
    0x03, 0x00, 0x1C,
    0x03, 0xE0, 0xFC,
    0x00, 0x1F, 0x00,
    0x00, 0x00, 0x00,
];

/// Round marker, taken.
pub const FILLED_CIRCLE: Sprite = Sprite::new("filled_circle", 3, 10, &FILLED_CIRCLE_DATA);

const FILLED_CIRCLE_DATA: [u8; 30] = [
    0x00, 0x00, 0x00,
    0x00, 0x1F, 0x00,
    0x03, 0xFF, 0xFC,
    0x03, 0xFF, 0xFC,
    0x1F, 0xFF, 0xFF,
    0x1F, 0xFF, 0xFF,
    0x03, 0xFF, 0xFC,
    0x03, 0xFF, 0xFC,
    0x00, 0x1F, 0x00,
    0x00, 0x00, 0x00,
];

/// "READY" banner.
pub const READY: Sprite = Sprite::new("ready", 25, 20, &READY_DATA);

#[rustfmt::skip]
const READY_DATA: [u8; 500] = [
    0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00, 0xFF, 0xFF, 0xE0, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFF, 0xFF, 0xFF, 0xFC, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x1F, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x03, 0xE0, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x03, 0xE0, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x03, 0xE0, 0x03, 0xE0, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x03, 0xE0, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x1F, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x03, 0xE0, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x1F, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x1F, 0xFC, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x1F, 0xFC, 0x00, 0x00,
    0xFC, 0x00, 0xFC, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x03, 0xE0, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x03, 0xE0, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x03, 0xE0, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x03, 0xE0, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFC, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00, 0xFF, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x00,
];

/// "GO" banner.
pub const GO: Sprite = Sprite::new("go", 11, 20, &GO_DATA);

const GO_DATA: [u8; 220] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFC, 0x00, 0x00, 0x1F, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x1F, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Every compiled-in sprite.
pub const ALL: [&Sprite; 6] = [&WALK_A, &WALK_B, &EMPTY_CIRCLE, &FILLED_CIRCLE, &READY, &GO];
