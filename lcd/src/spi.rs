//! # Serial Transport
//!
//! The ST7586 in 4-line serial mode: an SPI device (which owns chip select)
//! plus a GPIO on the A0 pin. A0 low latches the byte as a command, high as
//! data.
//!
//! ```ignore
//! let bus = SpiBus::new(spi_device, a0_pin);
//! let mut lcd = Lcd::new(bus);
//! lcd.draw_clear()?;
//! ```

use core::fmt;

use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::bus::{Mode, Transport};

/// Failure on one of the two lines the serial bus drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpiError<S, P> {
    Spi(S),
    /// The A0 (D/C) pin could not be driven.
    Pin(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for SpiError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiError::Spi(e) => write!(f, "spi transfer failed: {e:?}"),
            SpiError::Pin(e) => write!(f, "a0 pin failed: {e:?}"),
        }
    }
}

/// [`Transport`] over an `embedded-hal` SPI device and a D/C pin.
pub struct SpiBus<SPI, DC> {
    spi: SPI,
    dc: DC,
    /// Level last driven on D/C, if known.
    mode: Option<Mode>,
}

impl<SPI, DC> SpiBus<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, mode: None }
    }

    /// Give the SPI device and pin back.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn select(&mut self, mode: Mode) -> Result<(), SpiError<SPI::Error, DC::Error>> {
        if self.mode == Some(mode) {
            return Ok(());
        }
        self.mode = None;
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
        .map_err(SpiError::Pin)?;
        self.mode = Some(mode);
        Ok(())
    }
}

impl<SPI, DC> Transport for SpiBus<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = SpiError<SPI::Error, DC::Error>;

    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error> {
        self.write_all(mode, &[byte])
    }

    /// One SPI transaction per run, with D/C set once up front.
    fn write_all(&mut self, mode: Mode, bytes: &[u8]) -> Result<(), Self::Error> {
        self.select(mode)?;
        self.spi.write(bytes).map_err(SpiError::Spi)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use embedded_hal::{
        digital,
        spi::{self, Operation},
    };

    use super::*;
    use crate::{Lcd, Window, assets};

    /// What the controller would latch: each byte with the A0 level at the time.
    type Wire = Rc<RefCell<Vec<(bool, u8)>>>;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct Fault;

    impl spi::Error for Fault {
        fn kind(&self) -> spi::ErrorKind {
            spi::ErrorKind::Other
        }
    }

    impl digital::Error for Fault {
        fn kind(&self) -> digital::ErrorKind {
            digital::ErrorKind::Other
        }
    }

    struct MockSpi {
        wire: Wire,
        a0: Rc<RefCell<bool>>,
        transactions: Rc<RefCell<usize>>,
        broken: bool,
    }

    impl spi::ErrorType for MockSpi {
        type Error = Fault;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Fault> {
            if self.broken {
                return Err(Fault);
            }
            *self.transactions.borrow_mut() += 1;
            for operation in operations {
                if let Operation::Write(bytes) = operation {
                    let a0 = *self.a0.borrow();
                    self.wire.borrow_mut().extend(bytes.iter().map(|&b| (a0, b)));
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        level: Rc<RefCell<bool>>,
        toggles: usize,
        broken: bool,
    }

    impl digital::ErrorType for MockPin {
        type Error = Fault;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Fault> {
            self.set(false)
        }

        fn set_high(&mut self) -> Result<(), Fault> {
            self.set(true)
        }
    }

    impl MockPin {
        fn set(&mut self, level: bool) -> Result<(), Fault> {
            if self.broken {
                return Err(Fault);
            }
            self.toggles += 1;
            *self.level.borrow_mut() = level;
            Ok(())
        }
    }

    struct Rig {
        wire: Wire,
        transactions: Rc<RefCell<usize>>,
        bus: SpiBus<MockSpi, MockPin>,
    }

    fn wired(spi_broken: bool, pin_broken: bool) -> Rig {
        let wire = Wire::default();
        let a0 = Rc::new(RefCell::new(false));
        let transactions = Rc::new(RefCell::new(0));
        let spi = MockSpi {
            wire: wire.clone(),
            a0: a0.clone(),
            transactions: transactions.clone(),
            broken: spi_broken,
        };
        let pin = MockPin {
            level: a0,
            toggles: 0,
            broken: pin_broken,
        };
        Rig {
            wire,
            transactions,
            bus: SpiBus::new(spi, pin),
        }
    }

    #[test]
    fn a0_follows_mode() {
        let mut rig = wired(false, false);
        rig.bus.write(Mode::Command, 0x2C).unwrap();
        rig.bus.write_all(Mode::Data, &[0x1F, 0xFC]).unwrap();
        assert_eq!(*rig.wire.borrow(), vec![(false, 0x2C), (true, 0x1F), (true, 0xFC)]);
    }

    #[test]
    fn blit_reaches_the_wire_in_order() {
        let rig = wired(false, false);
        let mut lcd = Lcd::new(rig.bus);
        lcd.draw_go().unwrap();
        let (_, pin) = lcd.release().release();

        let wire = rig.wire.borrow();
        let commands: Vec<u8> = wire.iter().filter(|(a0, _)| !a0).map(|&(_, b)| b).collect();
        assert_eq!(commands, [0x2A, 0x2B, 0x2C]);
        assert_eq!(wire[1..5], [(true, 0), (true, 16), (true, 0), (true, 26)]);
        let data: Vec<u8> = wire[11..].iter().map(|&(_, b)| b).collect();
        assert_eq!(data, assets::GO.data);
        // one level change per command/data boundary
        assert_eq!(pin.toggles, 6);
    }

    #[test]
    fn data_runs_share_a_transaction() {
        let mut rig = wired(false, false);
        let window = Window::new(0, 2, 0, 0);
        crate::blit::blit(&mut rig.bus, &window, &[1, 2, 3]).unwrap();
        // 2A, its params, 2B, its params, 2C, then the 3 data bytes
        assert_eq!(*rig.transactions.borrow(), 6);
    }

    #[test]
    fn line_failures_are_reported() {
        let mut rig = wired(true, false);
        assert_eq!(rig.bus.write(Mode::Command, 0x2A), Err(SpiError::Spi(Fault)));

        let mut rig = wired(false, true);
        assert_eq!(rig.bus.write(Mode::Command, 0x2A), Err(SpiError::Pin(Fault)));
        assert!(rig.wire.borrow().is_empty());
    }
}
