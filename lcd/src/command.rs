//! ST7586 commands used by the drawing routines.
//!
//! Only the addressing and memory-write commands are needed once the panel is
//! up; power-on and gray-level setup belong to whoever brings the board up.

/// Controller command opcodes, sent with D/C low.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Four parameters: `0x00, col_start, 0x00, col_end` (packed columns).
    ColumnAddressSet = 0x2A,
    /// Four parameters: `0x00, row_start, 0x00, row_end`.
    RowAddressSet = 0x2B,
    /// Every following data byte lands at the write cursor, which then
    /// advances row-major through the addressing window.
    MemoryWrite = 0x2C,
}

impl Command {
    #[inline(always)]
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            0x2A => Some(Self::ColumnAddressSet),
            0x2B => Some(Self::RowAddressSet),
            0x2C => Some(Self::MemoryWrite),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_are_bit_exact() {
        assert_eq!(Command::ColumnAddressSet.opcode(), 0x2A);
        assert_eq!(Command::RowAddressSet.opcode(), 0x2B);
        assert_eq!(Command::MemoryWrite.opcode(), 0x2C);
    }

    #[test]
    fn unknown_opcodes_do_not_decode() {
        assert_eq!(Command::from_opcode(0x2C), Some(Command::MemoryWrite));
        assert_eq!(Command::from_opcode(0x29), None);
        assert_eq!(Command::from_opcode(0x00), None);
    }
}
