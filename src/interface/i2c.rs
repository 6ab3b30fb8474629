use embedded_hal as hal;

use super::SensorInterface;
use crate::Error;
#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

pub struct I2cInterface<I2C> {
    /// i2c port
    i2c_port: I2C,
    /// address for i2c communications
    address: u8,
}

impl<I2C, CommE> I2cInterface<I2C>
where
    I2C: hal::blocking::i2c::Write<Error = CommE>
        + hal::blocking::i2c::WriteRead<Error = CommE>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c_port: i2c,
            address,
        }
    }

    /// The 7-bit bus address this interface talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release owned resources
    pub fn release(self) -> I2C {
        self.i2c_port
    }
}

impl<I2C, CommE> SensorInterface for I2cInterface<I2C>
where
    I2C: hal::blocking::i2c::Write<Error = CommE>
        + hal::blocking::i2c::WriteRead<Error = CommE>,
{
    type InterfaceError = Error<CommE>;

    fn register_read(&mut self, reg: u8) -> Result<u8, Self::InterfaceError> {
        let mut block: [u8; 1] = [0; 1];
        self.i2c_port
            .write_read(self.address, &[reg], &mut block)
            .map_err(Error::Comm)?;

        #[cfg(feature = "rttdebug")]
        rprintln!("read reg 0x{:x} {:x?} ", reg, block[0]);

        Ok(block[0])
    }

    fn register_write(&mut self, reg: u8, val: u8) -> Result<(), Self::InterfaceError> {
        #[cfg(feature = "rttdebug")]
        rprintln!("write reg 0x{:x} {:x?} ", reg, val);

        let block: [u8; 2] = [reg, val];
        self.i2c_port
            .write(self.address, &block)
            .map_err(Error::Comm)
    }
}
