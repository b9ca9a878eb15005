//! # Blitting
//!
//! A blit is always the same three steps:
//!
//! 1. `0x2A 00 cs 00 ce` aims the column range
//! 2. `0x2B 00 rs 00 re` aims the row range
//! 3. `0x2C` followed by exactly `packed_width × height` data bytes
//!
//! The controller walks its write cursor row-major through the window, so the
//! data stream carries no row breaks.
//!
//! ```ignore
//! let mut writer = blit::begin(&mut bus, Window::new(0, 2, 20, 29))?;
//! writer.write(FILLED_CIRCLE.data)?;
//! writer.finish()?;
//! ```
//!
//! [`WindowWriter`] counts what is left in the window and refuses any chunk
//! that would spill past it before the chunk reaches the bus.

use log::trace;

use crate::{
    bus::{Mode, Transport},
    command::Command,
    error::Error,
    window::Window,
};

/// Issue the column and row address commands for `window`.
///
/// The high parameter bytes are always zero; every coordinate on this panel
/// fits in one byte. No bounds checking happens here.
pub fn set_window<T: Transport>(bus: &mut T, window: &Window) -> Result<(), T::Error> {
    trace!(target: "st7586", "window {}", window);
    bus.write(Mode::Command, Command::ColumnAddressSet.opcode())?;
    bus.write_all(Mode::Data, &[0x00, window.col_start, 0x00, window.col_end])?;
    bus.write(Mode::Command, Command::RowAddressSet.opcode())?;
    bus.write_all(Mode::Data, &[0x00, window.row_start, 0x00, window.row_end])?;
    Ok(())
}

/// Aim the controller at `window` and open a memory write into it.
pub fn begin<'a, T: Transport>(
    bus: &'a mut T,
    window: &Window,
) -> Result<WindowWriter<'a, T>, Error<T::Error>> {
    set_window(bus, window)?;
    bus.write(Mode::Command, Command::MemoryWrite.opcode())?;
    Ok(WindowWriter {
        bus,
        expected: window.byte_count(),
        remaining: window.byte_count(),
    })
}

/// An open memory write into one addressing window.
///
/// Holds the bus mutably until dropped, so nothing can re-aim the window
/// halfway through.
pub struct WindowWriter<'a, T: Transport> {
    bus: &'a mut T,
    expected: usize,
    remaining: usize,
}

impl<T: Transport> WindowWriter<'_, T> {
    /// Data bytes still needed to fill the window.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn reserve(&mut self, count: usize) -> Result<(), Error<T::Error>> {
        if count > self.remaining {
            return Err(Error::LengthMismatch {
                expected: self.expected,
                actual: self.expected - self.remaining + count,
            });
        }
        self.remaining -= count;
        Ok(())
    }

    /// Stream `bytes` verbatim.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error<T::Error>> {
        self.reserve(bytes.len())?;
        self.bus.write_all(Mode::Data, bytes)?;
        Ok(())
    }

    /// Stream `count` copies of `byte`.
    pub fn repeat(&mut self, byte: u8, count: usize) -> Result<(), Error<T::Error>> {
        self.reserve(count)?;
        for _ in 0..count {
            self.bus.write(Mode::Data, byte)?;
        }
        Ok(())
    }

    /// Close the write, reporting an underrun if the window is not full.
    pub fn finish(self) -> Result<(), Error<T::Error>> {
        if self.remaining != 0 {
            return Err(Error::LengthMismatch {
                expected: self.expected,
                actual: self.expected - self.remaining,
            });
        }
        Ok(())
    }
}

/// Stream an entire buffer into `window`. The buffer must fill it exactly.
pub fn blit<T: Transport>(
    bus: &mut T,
    window: &Window,
    data: &[u8],
) -> Result<(), Error<T::Error>> {
    if data.len() != window.byte_count() {
        return Err(Error::LengthMismatch {
            expected: window.byte_count(),
            actual: data.len(),
        });
    }
    let mut writer = begin(bus, window)?;
    writer.write(data)?;
    writer.finish()
}

/// Flood `window` with one byte value.
pub fn fill<T: Transport>(bus: &mut T, window: &Window, byte: u8) -> Result<(), Error<T::Error>> {
    let mut writer = begin(bus, window)?;
    writer.repeat(byte, window.byte_count())?;
    writer.finish()
}
