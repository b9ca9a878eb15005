use std::fmt::Write;

use come_on_lcd::{Window, emu::Ddram, pixel::PIXELS_PER_BYTE};

/// Paper to ink.
const SHADES: [char; 4] = [' ', '░', '▒', '█'];

/// One character per pixel, framed, for every pixel column `window` covers.
pub fn pixels(ram: &Ddram, window: &Window) -> String {
    let x0 = window.col_start as usize * PIXELS_PER_BYTE;
    let x1 = (window.col_end as usize + 1) * PIXELS_PER_BYTE;
    let width = x1 - x0;

    let mut out = String::new();
    let _ = writeln!(out, "{window}");
    let _ = writeln!(out, "┌{}┐", "─".repeat(width));
    for y in window.row_start as usize..=window.row_end as usize {
        out.push('│');
        for x in x0..x1 {
            out.push(ram.pixel(x, y).map_or('·', |level| SHADES[level as usize]));
        }
        out.push('│');
        out.push('\n');
    }
    let _ = writeln!(out, "└{}┘", "─".repeat(width));
    out
}

/// Packed bytes of `window`, one DDRAM row per line.
pub fn hex(ram: &Ddram, window: &Window) -> String {
    let mut out = String::new();
    for row in window.row_start..=window.row_end {
        let _ = write!(out, "{row:3}:");
        for col in window.col_start..=window.col_end {
            match ram.cell(col as usize, row as usize) {
                Some(byte) => {
                    let _ = write!(out, " {byte:02x}");
                }
                None => out.push_str(" --"),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use come_on_lcd::{Lcd, indicator::{CirclePosition, Ring}};

    fn circle() -> (Ddram, Window) {
        let mut lcd = Lcd::new(Ddram::default());
        lcd.draw_circle(CirclePosition::LeftOuter, Ring::Filled).unwrap();
        let ram = lcd.release();
        let window = ram.window();
        (ram, window)
    }

    #[test]
    fn pixels_draw_the_filled_circle() {
        let (ram, window) = circle();
        let out = pixels(&ram, &window);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "cols 0..=2 rows 20..=29");
        assert_eq!(lines.len(), 1 + 1 + 10 + 1);
        // row 4 of the sprite is 0x1F 0xFF 0xFF
        assert_eq!(lines[2 + 4], "│ ████████│");
        assert_eq!(lines[2], "│         │");
    }

    #[test]
    fn hex_dumps_rows() {
        let (ram, window) = circle();
        let out = hex(&ram, &window);
        assert_eq!(out.lines().nth(2), Some(" 22: 03 ff fc"));
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn off_panel_cells_are_marked() {
        let ram = Ddram::default();
        let out = hex(&ram, &Window::new(42, 43, 0, 0));
        assert_eq!(out, "  0: 00 --\n");
    }
}
