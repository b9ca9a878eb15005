//! # Come On! LCD
//!
//! Drawing routines for the Come On! handheld's 128×160 grayscale panel,
//! driven by a Sitronix ST7586 controller.
//!
//! The controller keeps its own display RAM (DDRAM). Software never reads it
//! back: every drawing operation is a short, self-contained stream of writes
//! that aims the controller's **addressing window** at a rectangle and then
//! pours packed pixel bytes into it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use come_on_lcd::{Lcd, Player, bus::MmioBus, indicator::{CirclePosition, Ring}};
//!
//! // 8080 bus behind the MCU's external memory controller
//! let bus = unsafe { MmioBus::new(0x6000_0000, 0x6002_0000) };
//! let mut lcd = Lcd::new(bus);
//!
//! lcd.draw_clear()?;
//! lcd.draw_ready()?;
//! lcd.draw_hp(Player::One, 42)?;
//! lcd.draw_circle(CirclePosition::LeftOuter, Ring::Filled)?;
//! ```
//!
//! Boards that wire the panel in 4-line serial mode use [`spi::SpiBus`]
//! instead, built from any `embedded-hal` SPI device and D/C pin.
//!
//! ## Protocol
//!
//! | Command | Meaning            | Data bytes                        |
//! |---------|--------------------|-----------------------------------|
//! | `0x2A`  | Column Address Set | `0x00, col_start, 0x00, col_end`  |
//! | `0x2B`  | Row Address Set    | `0x00, row_start, 0x00, row_end`  |
//! | `0x2C`  | Memory Write       | N packed pixel bytes              |
//!
//! Columns are **packed** columns: one byte holds three horizontal pixels,
//! so the 128 pixel wide glass is 43 columns (`0..=42`). See [`pixel`].
//!
//! ## Bus Ownership
//!
//! The addressing window is global state inside the controller, so only one
//! blit may be in flight at a time. [`Lcd`] owns its [`Transport`] and every
//! drawing call takes `&mut self`; share an `Lcd` between tasks by putting it
//! behind whatever mutex your executor provides.
//!
//! ## Hardware Overview
//!
//! | Feature | Value |
//! |---------|-------|
//! | Controller | ST7586S, 4-level gray mode |
//! | Glass | 128×160 pixels |
//! | DDRAM window | 43 packed columns × 160 rows |
//! | Pixel packing | 3 pixels/byte, fields of 3, 3 and 2 bits |

#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod blit;
pub mod bus;
pub mod command;
pub mod draw;
pub mod emu;
pub mod error;
pub mod hp;
pub mod indicator;
pub mod pixel;
#[cfg(feature = "embedded-hal")]
pub mod spi;
pub mod window;

pub use bus::{Mode, Transport};
pub use draw::Lcd;
pub use error::Error;
pub use hp::Player;
pub use window::{Panel, Window};
