//! # Byte Transport
//!
//! Everything this crate does bottoms out in one primitive: push a single byte
//! to the controller with the D/C line either low ([`Mode::Command`]) or high
//! ([`Mode::Data`]). How that byte travels (SPI, a bit-banged 8080 port, an
//! external memory controller) is the board's business, expressed through
//! [`Transport`].
//!
//! [`MmioBus`] covers the common case of an 8080 parallel bus mapped into the
//! address space, where the D/C line is wired to an address pin:
//!
//! ```ignore
//! // A16 drives D/C: $6000_0000 is the command register, $6002_0000 data.
//! let bus = unsafe { MmioBus::new(0x6000_0000, 0x6002_0000) };
//! ```

use core::convert::Infallible;

use volatile_register::WO;

/// State of the controller's D/C (A0) line for one byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Command,
    Data,
}

/// Sends single bytes to the display controller.
///
/// Implementations are expected to block until the byte is on the wire.
/// A write that returns `Err` must not have been latched by the controller
/// as anything other than a complete byte.
pub trait Transport {
    type Error;

    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error>;

    /// Write a run of bytes in one mode, stopping at the first failure.
    fn write_all(&mut self, mode: Mode, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write(mode, byte)?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error> {
        (**self).write(mode, byte)
    }

    #[inline(always)]
    fn write_all(&mut self, mode: Mode, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(mode, bytes)
    }
}

/// 8080-style parallel bus behind a memory-mapped window.
///
/// Two write-only byte registers: one decoded with D/C low, one with D/C high.
pub struct MmioBus {
    command: &'static WO<u8>,
    data: &'static WO<u8>,
}

impl MmioBus {
    /// # Safety
    ///
    /// Both addresses must be valid, byte-writable device registers for the
    /// lifetime of the program, and nothing else may write them while this
    /// bus exists.
    pub unsafe fn new(command_addr: usize, data_addr: usize) -> Self {
        unsafe {
            Self {
                command: &*(command_addr as *const WO<u8>),
                data: &*(data_addr as *const WO<u8>),
            }
        }
    }
}

impl Transport for MmioBus {
    type Error = Infallible;

    #[inline(always)]
    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error> {
        let register = match mode {
            Mode::Command => self.command,
            Mode::Data => self.data,
        };
        unsafe { register.write(byte) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<(Mode, u8)>);

    impl Transport for Log {
        type Error = ();

        fn write(&mut self, mode: Mode, byte: u8) -> Result<(), ()> {
            self.0.push((mode, byte));
            Ok(())
        }
    }

    struct FailAfter(usize);

    impl Transport for FailAfter {
        type Error = usize;

        fn write(&mut self, _mode: Mode, _byte: u8) -> Result<(), usize> {
            if self.0 == 0 {
                return Err(0);
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn write_all_keeps_order_and_mode() {
        let mut log = Log::default();
        log.write_all(Mode::Data, &[1, 2, 3]).unwrap();
        assert_eq!(log.0, vec![(Mode::Data, 1), (Mode::Data, 2), (Mode::Data, 3)]);
    }

    #[test]
    fn write_all_stops_at_first_failure() {
        let mut bus = FailAfter(2);
        assert_eq!(bus.write_all(Mode::Data, &[0; 5]), Err(0));
        assert_eq!(bus.0, 0);
    }

    fn memory_write<T: Transport>(mut bus: T) -> Result<(), T::Error> {
        bus.write(Mode::Command, 0x2C)
    }

    #[test]
    fn borrowed_transport_forwards() {
        let mut log = Log::default();
        memory_write(&mut log).unwrap();
        memory_write(&mut log).unwrap();
        assert_eq!(log.0, vec![(Mode::Command, 0x2C); 2]);
    }

    #[test]
    fn mmio_bus_routes_by_mode() {
        let mut command = 0u8;
        let mut data = 0u8;
        let mut bus = unsafe {
            MmioBus::new(&mut command as *mut u8 as usize, &mut data as *mut u8 as usize)
        };
        bus.write(Mode::Command, 0x2A).unwrap();
        bus.write(Mode::Data, 0x15).unwrap();
        drop(bus);
        assert_eq!(command, 0x2A);
        assert_eq!(data, 0x15);
    }
}
