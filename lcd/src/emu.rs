//! # DDRAM Emulator
//!
//! [`Ddram`] is a [`Transport`] that behaves like the controller's display
//! RAM: it decodes the addressing commands, runs the write cursor through
//! the window and keeps every byte that lands on the glass. Use it to check
//! what a drawing sequence actually puts on screen, or to render a preview
//! on a host.
//!
//! Cursor behaviour follows the controller:
//!
//! - `0x2C` parks the cursor at `(col_start, row_start)`.
//! - Each data byte advances it one column; past `col_end` it returns to
//!   `col_start` on the next row; past `row_end` it wraps to the window origin.
//! - Bytes that land off the panel are dropped.

use core::convert::Infallible;

use log::{trace, warn};

use crate::{
    bus::{Mode, Transport},
    command::Command,
    pixel::{self, PIXELS_PER_BYTE},
    window::{Panel, Window},
};

/// Largest DDRAM the controller addresses: 43 packed columns by 160 rows.
pub const MAX_COLUMNS: usize = 43;
pub const MAX_ROWS: usize = 160;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Idle,
    /// Collecting the 4 parameter bytes of an address command.
    Address { command: Command, params: [u8; 4], seen: usize },
    /// Inside a memory write.
    Writing,
}

/// Counts of everything the emulator has been sent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
    pub column_sets: usize,
    pub row_sets: usize,
    pub memory_writes: usize,
    /// Data bytes received inside a memory write.
    pub data_writes: usize,
    /// Data bytes that fell outside the panel.
    pub clipped: usize,
    /// Data bytes received with no memory write open.
    pub stray: usize,
    pub unknown_commands: usize,
}

/// Emulated ST7586 display RAM.
#[derive(Debug, Clone)]
pub struct Ddram {
    panel: Panel,
    cells: [[u8; MAX_COLUMNS]; MAX_ROWS],
    window: Window,
    cursor: (u8, u8),
    state: State,
    stats: Stats,
}

impl Ddram {
    /// Blank DDRAM for `panel`. A panel larger than the controller's RAM is
    /// cut down to it.
    pub fn new(panel: Panel) -> Self {
        let panel = panel.clamped(MAX_COLUMNS as u8, MAX_ROWS as u8);
        Self {
            panel,
            cells: [[0; MAX_COLUMNS]; MAX_ROWS],
            window: panel.full_window(),
            cursor: (0, 0),
            state: State::Idle,
            stats: Stats::default(),
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// The addressing window as last programmed.
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Data bytes received inside memory writes.
    pub fn data_writes(&self) -> usize {
        self.stats.data_writes
    }

    /// Packed byte at `(col, row)`, or `None` off the panel.
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        if col >= self.panel.columns() as usize || row >= self.panel.rows() as usize {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Gray level of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        let byte = self.cell(x / PIXELS_PER_BYTE, y)?;
        Some(pixel::levels(byte)[x % PIXELS_PER_BYTE])
    }

    /// One DDRAM row on the panel.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.panel.rows() as usize {
            return None;
        }
        Some(&self.cells[row][..self.panel.columns() as usize])
    }

    /// Copy the bytes of `window` out row-major, as they were streamed in.
    /// Returns how many bytes were copied.
    pub fn read_window(&self, window: &Window, out: &mut [u8]) -> usize {
        let mut n = 0;
        for row in window.row_start..=window.row_end {
            for col in window.col_start..=window.col_end {
                let Some(slot) = out.get_mut(n) else {
                    return n;
                };
                *slot = self.cell(col as usize, row as usize).unwrap_or(0);
                n += 1;
            }
        }
        n
    }

    fn command(&mut self, opcode: u8) {
        self.state = match Command::from_opcode(opcode) {
            Some(Command::MemoryWrite) => {
                self.stats.memory_writes += 1;
                self.cursor = (self.window.col_start, self.window.row_start);
                State::Writing
            }
            Some(command) => State::Address {
                command,
                params: [0; 4],
                seen: 0,
            },
            None => {
                self.stats.unknown_commands += 1;
                trace!(target: "st7586::emu", "skipping command {:#04x}", opcode);
                State::Idle
            }
        };
    }

    fn data(&mut self, byte: u8) {
        match &mut self.state {
            State::Idle => {
                self.stats.stray += 1;
                warn!(target: "st7586::emu", "data byte {:#04x} outside a memory write", byte);
            }
            State::Address { command, params, seen } => {
                params[*seen] = byte;
                *seen += 1;
                if *seen == params.len() {
                    let (command, params) = (*command, *params);
                    if params[0] != 0 || params[2] != 0 {
                        warn!(
                            target: "st7586::emu",
                            "{:?} with nonzero high bytes {:02x?}",
                            command,
                            params
                        );
                    }
                    self.latch(command, params[1], params[3]);
                    self.state = State::Idle;
                }
            }
            State::Writing => self.store(byte),
        }
    }

    fn latch(&mut self, command: Command, start: u8, end: u8) {
        match command {
            Command::ColumnAddressSet => {
                self.stats.column_sets += 1;
                self.window.col_start = start;
                self.window.col_end = end;
            }
            Command::RowAddressSet => {
                self.stats.row_sets += 1;
                self.window.row_start = start;
                self.window.row_end = end;
            }
            Command::MemoryWrite => {}
        }
    }

    fn store(&mut self, byte: u8) {
        self.stats.data_writes += 1;
        let (col, row) = self.cursor;
        if col < self.panel.columns() && row < self.panel.rows() {
            self.cells[row as usize][col as usize] = byte;
        } else {
            self.stats.clipped += 1;
        }

        let window = self.window;
        self.cursor = if col >= window.col_end {
            if row >= window.row_end {
                (window.col_start, window.row_start)
            } else {
                (window.col_start, row + 1)
            }
        } else {
            (col + 1, row)
        };
    }
}

impl Default for Ddram {
    fn default() -> Self {
        Self::new(Panel::default())
    }
}

impl Transport for Ddram {
    type Error = Infallible;

    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error> {
        match mode {
            Mode::Command => self.command(byte),
            Mode::Data => self.data(byte),
        }
        Ok(())
    }
}
