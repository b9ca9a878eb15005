//! # Drawing
//!
//! [`Lcd`] owns the bus and exposes every drawing operation the game uses.
//! Each call is one self-contained blit: aim the window, stream the bytes,
//! done. Nothing is remembered between calls.
//!
//! ```ignore
//! let mut lcd = Lcd::new(bus);
//!
//! lcd.draw_clear()?;
//! lcd.draw_ready()?;
//! // ... countdown ...
//! lcd.draw_go()?;
//!
//! loop {
//!     lcd.draw_hp(Player::One, p1.health)?;
//!     lcd.draw_hp(Player::Two, p2.health)?;
//!     lcd.draw_walk_a(p1.col, WALK_ROW)?;
//! }
//! ```
//!
//! Every input is checked before the first byte leaves, so an `Err` other
//! than [`Error::Transport`] means the panel was not touched.

use log::{debug, warn};

use crate::{
    assets::{self, Sprite},
    blit,
    bus::Transport,
    error::Error,
    hp::{self, Player},
    indicator::{CirclePosition, Ring},
    pixel::Triplet,
    window::{Panel, Window},
};

/// The only row the walk sprites are drawn at.
pub const WALK_ROW: u8 = 0x77;

const READY_ORIGIN: (u8, u8) = (9, 40);
const GO_ORIGIN: (u8, u8) = (16, 40);

/// Drawing surface for one ST7586 panel.
#[derive(Debug)]
pub struct Lcd<T> {
    bus: T,
    panel: Panel,
}

impl<T: Transport> Lcd<T> {
    /// Drive the standard 128×160 panel.
    pub fn new(bus: T) -> Self {
        Self::with_panel(bus, Panel::default())
    }

    pub fn with_panel(bus: T, panel: Panel) -> Self {
        Self { bus, panel }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Direct access to the transport, for commands this crate does not wrap.
    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }

    /// Give the bus back.
    pub fn release(self) -> T {
        self.bus
    }

    fn check(&self, window: Window) -> Result<Window, Error<T::Error>> {
        window.validate(&self.panel).inspect_err(|_| {
            warn!(
                target: "st7586",
                "rejected window {} on a {}x{} panel",
                window,
                self.panel.columns(),
                self.panel.rows()
            );
        })
    }

    /// Stream `data` into `window`. The buffer must fill it exactly.
    pub fn blit(&mut self, window: Window, data: &[u8]) -> Result<(), Error<T::Error>> {
        let window = self.check(window)?;
        blit::blit(&mut self.bus, &window, data)
    }

    /// Flood `window` with one packed byte.
    pub fn fill(&mut self, window: Window, byte: u8) -> Result<(), Error<T::Error>> {
        let window = self.check(window)?;
        blit::fill(&mut self.bus, &window, byte)
    }

    /// Draw `sprite` with its top-left byte at `(col, row)`.
    pub fn draw_sprite(
        &mut self,
        col: u8,
        row: u8,
        sprite: &Sprite,
    ) -> Result<(), Error<T::Error>> {
        let window = sprite
            .window_at(col, row)
            .ok_or(Error::InvalidRectangle(Window::new(col, u8::MAX, row, u8::MAX)))?;
        debug!(target: "st7586", "sprite {} at ({}, {})", sprite.name, col, row);
        self.blit(window, sprite.data)
    }

    /// Fill the rectangle `(x1, y1)..=(x2, y2)` with ink. `x` is in packed
    /// columns.
    pub fn draw_rectangle(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
    ) -> Result<(), Error<T::Error>> {
        debug!(target: "st7586", "rectangle ({}, {})..=({}, {})", x1, y1, x2, y2);
        self.fill(Window::new(x1, x2, y1, y2), Triplet::ALL.bits())
    }

    fn draw_walk(&mut self, x: u8, y: u8, frame: &Sprite) -> Result<(), Error<T::Error>> {
        if y != WALK_ROW {
            warn!(target: "st7586", "walk sprites are fixed to row {}, got {}", WALK_ROW, y);
            let window = Window::new(x, x.saturating_add(5), y, y.saturating_add(39));
            return Err(Error::InvalidRectangle(window));
        }
        self.draw_sprite(x, y, frame)
    }

    /// First walk frame at packed column `x`.
    ///
    /// The sprite can only be placed horizontally: `y` must be [`WALK_ROW`]
    /// and anything else is rejected as an invalid rectangle.
    pub fn draw_walk_a(&mut self, x: u8, y: u8) -> Result<(), Error<T::Error>> {
        self.draw_walk(x, y, &assets::WALK_A)
    }

    /// Second walk frame. Same placement rules as [`Lcd::draw_walk_a`].
    pub fn draw_walk_b(&mut self, x: u8, y: u8) -> Result<(), Error<T::Error>> {
        self.draw_walk(x, y, &assets::WALK_B)
    }

    /// Redraw `player`'s health bar for `health` points.
    pub fn draw_hp(&mut self, player: Player, health: u8) -> Result<(), Error<T::Error>> {
        let window = self.check(player.window())?;
        let row = player.fill().row(health);
        debug!(target: "st7586", "hp {:?} = {}", player, health);

        let mut writer = blit::begin(&mut self.bus, &window)?;
        for _ in 0..hp::ROWS {
            writer.write(&row)?;
        }
        writer.finish()
    }

    /// Draw one round marker.
    pub fn draw_circle(
        &mut self,
        position: CirclePosition,
        ring: Ring,
    ) -> Result<(), Error<T::Error>> {
        let window = self.check(position.window())?;
        debug!(target: "st7586", "circle {:?} {:?}", position, ring);
        self.blit(window, ring.sprite().data)
    }

    /// [`Lcd::draw_circle`] from raw numbers: position `0..=3`, `filled`
    /// `0` or `1`. Anything else is [`Error::InvalidIndex`] and writes nothing.
    pub fn draw_circle_index(&mut self, position: u8, filled: u8) -> Result<(), Error<T::Error>> {
        let position = CirclePosition::try_from(position).map_err(|e| {
            warn!(target: "st7586", "no circle position {}", e.0);
            Error::InvalidIndex(e.0)
        })?;
        let ring = Ring::try_from(filled).map_err(|e| Error::InvalidIndex(e.0))?;
        self.draw_circle(position, ring)
    }

    pub fn draw_ready(&mut self) -> Result<(), Error<T::Error>> {
        self.draw_sprite(READY_ORIGIN.0, READY_ORIGIN.1, &assets::READY)
    }

    pub fn draw_go(&mut self) -> Result<(), Error<T::Error>> {
        self.draw_sprite(GO_ORIGIN.0, GO_ORIGIN.1, &assets::GO)
    }

    /// Flood the whole panel with ink.
    pub fn draw_splash(&mut self) -> Result<(), Error<T::Error>> {
        debug!(target: "st7586", "splash");
        self.fill(self.panel.full_window(), Triplet::ALL.bits())
    }

    /// Wipe the whole panel to paper.
    pub fn draw_clear(&mut self) -> Result<(), Error<T::Error>> {
        debug!(target: "st7586", "clear");
        self.fill(self.panel.full_window(), Triplet::NONE.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Mode;

    #[derive(Default, Debug)]
    struct Log(Vec<(Mode, u8)>);

    impl Transport for Log {
        type Error = ();

        fn write(&mut self, mode: Mode, byte: u8) -> Result<(), ()> {
            self.0.push((mode, byte));
            Ok(())
        }
    }

    fn lcd() -> Lcd<Log> {
        Lcd::new(Log::default())
    }

    #[test]
    fn rejected_inputs_write_nothing() {
        let mut lcd = lcd();
        assert_eq!(
            lcd.draw_rectangle(5, 0, 4, 0),
            Err(Error::InvalidRectangle(Window::new(5, 4, 0, 0)))
        );
        assert_eq!(
            lcd.draw_rectangle(0, 0, 43, 0),
            Err(Error::InvalidRectangle(Window::new(0, 43, 0, 0)))
        );
        assert_eq!(lcd.draw_circle_index(4, 1), Err(Error::InvalidIndex(4)));
        assert_eq!(lcd.draw_circle_index(0, 2), Err(Error::InvalidIndex(2)));
        assert!(matches!(lcd.draw_walk_a(0, 0), Err(Error::InvalidRectangle(_))));
        assert!(matches!(lcd.draw_walk_b(38, WALK_ROW), Err(Error::InvalidRectangle(_))));
        assert!(lcd.release().0.is_empty());
    }

    #[test]
    fn walk_sprite_lands_at_the_fixed_row() {
        let mut lcd = lcd();
        lcd.draw_walk_a(4, WALK_ROW).unwrap();
        let bytes: Vec<u8> = lcd.release().0.into_iter().map(|(_, b)| b).collect();
        assert_eq!(bytes[..10], [0x2A, 0x00, 4, 0x00, 9, 0x2B, 0x00, 0x77, 0x00, 0x9E]);
        assert_eq!(bytes[10], 0x2C);
        assert_eq!(&bytes[11..], assets::WALK_A.data);
    }

    #[test]
    fn smaller_panel_bounds_full_screen_ops() {
        let mut lcd = Lcd::with_panel(Log::default(), Panel::from_pixels(96, 64).unwrap());
        lcd.draw_clear().unwrap();
        assert_eq!(lcd.release().0.len(), 11 + 32 * 64);

        let mut lcd = Lcd::with_panel(Log::default(), Panel::from_pixels(96, 64).unwrap());
        assert!(matches!(lcd.draw_ready(), Err(Error::InvalidRectangle(_))));
    }

    #[test]
    fn single_cell_panel_clears_one_byte() {
        assert_eq!(Panel::from_pixels(0, 160), None);

        let mut lcd = Lcd::with_panel(Log::default(), Panel::new(1, 1).unwrap());
        lcd.draw_clear().unwrap();
        lcd.draw_splash().unwrap();
        let data: Vec<u8> = lcd
            .release()
            .0
            .into_iter()
            .filter(|&(mode, _)| mode == Mode::Data)
            .map(|(_, b)| b)
            .collect();
        assert_eq!(data, [0, 0, 0, 0, 0x00, 0, 0, 0, 0, 0xFF]);
    }
}
