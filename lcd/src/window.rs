//! # Addressing Windows
//!
//! A [`Window`] is the rectangle the controller confines streamed data to.
//! All four bounds are inclusive and in controller units: columns count
//! packed bytes (three pixels each), rows count pixel rows.
//!
//! ```text
//!          col_start        col_end
//! row_start   ┌──────────────────┐
//!             │ → → → → → → → →  │  data fills left to right,
//!             │ → → → → → → → →  │  then wraps to the next row
//! row_end     └──────────────────┘
//! ```
//!
//! [`Panel`] describes the glass attached to the controller and is what a
//! window is validated against.

use core::fmt;

use crate::{error::Error, pixel::PIXELS_PER_BYTE};

/// Inclusive rectangle in controller units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    pub col_start: u8,
    pub col_end: u8,
    pub row_start: u8,
    pub row_end: u8,
}

impl Window {
    pub const fn new(col_start: u8, col_end: u8, row_start: u8, row_end: u8) -> Self {
        Self {
            col_start,
            col_end,
            row_start,
            row_end,
        }
    }

    /// Window of `width` packed columns by `height` rows with its top-left at
    /// `(col, row)`. `None` if either size is zero or the far edge passes 255.
    pub const fn from_origin(col: u8, row: u8, width: u8, height: u8) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let (Some(col_end), Some(row_end)) =
            (col.checked_add(width - 1), row.checked_add(height - 1))
        else {
            return None;
        };
        Some(Self::new(col, col_end, row, row_end))
    }

    /// Both ranges run forward.
    pub const fn is_ordered(&self) -> bool {
        self.col_start <= self.col_end && self.row_start <= self.row_end
    }

    /// Width in packed bytes. Zero for a reversed column range.
    pub const fn packed_width(&self) -> usize {
        if self.col_start > self.col_end {
            return 0;
        }
        (self.col_end - self.col_start) as usize + 1
    }

    /// Height in rows. Zero for a reversed row range.
    pub const fn height(&self) -> usize {
        if self.row_start > self.row_end {
            return 0;
        }
        (self.row_end - self.row_start) as usize + 1
    }

    /// Data bytes needed to fill the window exactly once.
    pub const fn byte_count(&self) -> usize {
        self.packed_width() * self.height()
    }

    /// This window, if it is ordered and fits on `panel`.
    pub fn validate<E>(self, panel: &Panel) -> Result<Window, Error<E>> {
        if panel.contains(&self) {
            Ok(self)
        } else {
            Err(Error::InvalidRectangle(self))
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cols {}..={} rows {}..={}",
            self.col_start, self.col_end, self.row_start, self.row_end
        )
    }
}

/// Geometry of the glass behind the controller.
///
/// Always at least one packed column and one row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Panel {
    columns: u8,
    rows: u8,
}

impl Panel {
    /// The Come On! handheld's 128×160 panel: 43 packed columns, 160 rows.
    pub const ST7586_128X160: Panel = Panel {
        columns: 43,
        rows: 160,
    };

    /// Panel of `columns` packed bytes by `rows` rows. `None` if either is
    /// zero.
    pub const fn new(columns: u8, rows: u8) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }
        Some(Self { columns, rows })
    }

    /// Panel of `width` × `height` pixels, rounding the width up to whole
    /// packed bytes. `None` for an empty panel or one wider than 255 packed
    /// columns.
    pub const fn from_pixels(width: u16, height: u8) -> Option<Self> {
        let columns = width.div_ceil(PIXELS_PER_BYTE as u16);
        if columns > u8::MAX as u16 {
            return None;
        }
        Self::new(columns as u8, height)
    }

    /// Packed columns (bytes per row).
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// This panel cut down to at most `columns` × `rows`.
    pub const fn clamped(self, columns: u8, rows: u8) -> Self {
        match Self::new(
            if self.columns < columns { self.columns } else { columns },
            if self.rows < rows { self.rows } else { rows },
        ) {
            Some(panel) => panel,
            None => self,
        }
    }

    /// The whole DDRAM area the glass shows.
    pub const fn full_window(&self) -> Window {
        Window::new(0, self.columns - 1, 0, self.rows - 1)
    }

    /// Packed bytes in a full-screen write.
    pub const fn byte_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// `window` is ordered and lies entirely on the glass.
    pub const fn contains(&self, window: &Window) -> bool {
        window.is_ordered() && window.col_end < self.columns && window.row_end < self.rows
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::ST7586_128X160
    }
}
