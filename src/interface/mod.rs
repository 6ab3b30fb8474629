pub mod i2c;

pub use self::i2c::I2cInterface;

/// A method of communicating with the sensor, one register byte at a time
pub trait SensorInterface {
    /// Interface error type
    type InterfaceError;

    /// Read a single register byte
    fn register_read(&mut self, reg: u8) -> Result<u8, Self::InterfaceError>;

    /// Write a single register byte
    fn register_write(&mut self, reg: u8, val: u8) -> Result<(), Self::InterfaceError>;
}
