/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register level driver for the MPU-6050 6DOF IMU.
//!
//! Every accessor performs live bus transactions; nothing is cached.
//! Multi-byte registers are read and written as two single-byte
//! transactions (high byte first), so another bus master writing the
//! same registers in between can produce a torn value. Serializing
//! access to the device is left to the caller.

#![no_std]

use embedded_hal as hal;

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

pub mod codec;
mod interface;
mod registers;

pub use interface::{I2cInterface, SensorInterface};
use registers::*;

/// I2C address with the AD0 pin pulled low
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// I2C address with the AD0 pin pulled high
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// Errors in this crate
#[derive(Debug)]
pub enum Error<CommE> {
    /// Sensor communication error
    Comm(CommE),
}

pub struct Builder {}

impl Builder {
    /// Create a new driver using I2C interface
    pub fn new_i2c<I2C, CommE>(i2c: I2C, address: u8) -> Mpu6050<I2cInterface<I2C>>
    where
        I2C: hal::blocking::i2c::Write<Error = CommE>
            + hal::blocking::i2c::WriteRead<Error = CommE>,
    {
        let iface = interface::I2cInterface::new(i2c, address);
        Mpu6050::new_with_interface(iface)
    }
}

/// One pass over all the sensor outputs, see [`Mpu6050::get_all`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorReadings {
    pub accel_x: i32,
    pub accel_y: i32,
    pub accel_z: i32,
    /// degrees Celsius
    pub temp: f32,
    pub gyro_x: i32,
    pub gyro_y: i32,
    pub gyro_z: i32,
}

pub struct Mpu6050<SI> {
    pub(crate) si: SI,
}

impl<I2C, CommE> Mpu6050<I2cInterface<I2C>>
where
    I2C: hal::blocking::i2c::Write<Error = CommE> + hal::blocking::i2c::WriteRead<Error = CommE>,
{
    /// Create a driver for a device at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Builder::new_i2c(i2c, DEFAULT_ADDRESS)
    }

    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Builder::new_i2c(i2c, address)
    }

    /// Device address given at construction
    pub fn address(&self) -> u8 {
        self.si.address()
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.si.release()
    }
}

impl<SI, CommE> Mpu6050<SI>
where
    SI: SensorInterface<InterfaceError = Error<CommE>>,
{
    /// Create a driver on any byte-wide register interface
    pub fn new_with_interface(sensor_interface: SI) -> Self {
        Self {
            si: sensor_interface,
        }
    }

    /// Read a register pair: high byte at `reg`, low byte at `reg + 1`
    fn read_word(&mut self, reg: u8) -> Result<i32, SI::InterfaceError> {
        let high = self.si.register_read(reg)?;
        let low = self.si.register_read(reg + 1)?;
        Ok(codec::decode_word(high, low))
    }

    /// Write a register pair, high byte first.
    /// If the low byte write fails the pair is left half written.
    fn write_word(&mut self, reg: u8, value: i32) -> Result<(), SI::InterfaceError> {
        let (high, low) = codec::encode_word(value);
        self.si.register_write(reg, high)?;
        self.si.register_write(reg + 1, low)
    }

    /// Read WHO_AM_I and return true if it matches the MPU-6050 identifier
    pub fn check_identity(&mut self) -> Result<bool, SI::InterfaceError> {
        let chip_id = self.si.register_read(REG_WHO_AM_I)?;

        #[cfg(feature = "rttdebug")]
        rprintln!("whoami: 0x{:0x}  ", chip_id);

        Ok(chip_id == MPU6050_WAI)
    }

    /// Wake the device (`true`) or put it to sleep (`false`).
    ///
    /// Waking also selects the PLL with X gyro reference as clock source.
    /// The resulting power state is not read back.
    pub fn enable(&mut self, on: bool) -> Result<(), SI::InterfaceError> {
        let val = if on { PWR_CLKSEL_PLL_XGYRO } else { PWR_SLEEP };
        self.si.register_write(REG_PWR_MGMT_1, val)
    }

    /// Reset the device, then restore the power configuration it had before.
    ///
    /// Three transactions in order: read PWR_MGMT_1, write DEVICE_RESET,
    /// write back the value read. An error at any step aborts the rest.
    pub fn reset(&mut self) -> Result<(), SI::InterfaceError> {
        let prior = self.si.register_read(REG_PWR_MGMT_1)?;

        #[cfg(feature = "rttdebug")]
        rprintln!("reset, restoring pwr_mgmt_1 0x{:0x}", prior);

        self.si.register_write(REG_PWR_MGMT_1, PWR_DEVICE_RESET)?;
        self.si.register_write(REG_PWR_MGMT_1, prior)
    }

    /// Set the full scale range of the accelerometer
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), SI::InterfaceError> {
        self.si
            .register_write(REG_ACCEL_CONFIG, (range as u8) << FS_SEL_SHIFT)
    }

    /// Set the full scale range of the gyroscope
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), SI::InterfaceError> {
        self.si
            .register_write(REG_GYRO_CONFIG, (range as u8) << FS_SEL_SHIFT)
    }

    pub fn accel_x(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_ACCEL_XOUT_H)
    }

    pub fn accel_y(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_ACCEL_YOUT_H)
    }

    pub fn accel_z(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_ACCEL_ZOUT_H)
    }

    pub fn gyro_x(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_GYRO_XOUT_H)
    }

    pub fn gyro_y(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_GYRO_YOUT_H)
    }

    pub fn gyro_z(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_GYRO_ZOUT_H)
    }

    /// Raw accelerometer axes, X Y Z
    pub fn accel(&mut self) -> Result<[i32; 3], SI::InterfaceError> {
        Ok([self.accel_x()?, self.accel_y()?, self.accel_z()?])
    }

    /// Raw gyroscope axes, X Y Z
    pub fn gyro(&mut self) -> Result<[i32; 3], SI::InterfaceError> {
        Ok([self.gyro_x()?, self.gyro_y()?, self.gyro_z()?])
    }

    /// Die temperature in degrees Celsius.
    ///
    /// Nominal range is -40 to +85; values outside it are returned as is.
    pub fn temperature(&mut self) -> Result<f32, SI::InterfaceError> {
        const LSB_PER_DEGREE: f32 = 340.0;
        const OFFSET_DEGREES: f32 = 36.53;

        let high = self.si.register_read(REG_TEMP_OUT_H)?;
        let low = self.si.register_read(REG_TEMP_OUT_H + 1)?;
        let raw = codec::decode_i16(high, low);
        Ok((raw as f32) / LSB_PER_DEGREE + OFFSET_DEGREES)
    }

    /// Read all seven outputs: accel X Y Z, temperature, gyro X Y Z.
    ///
    /// These are seven separate register pair reads, not one burst, so the
    /// values may come from different sample periods.
    pub fn get_all(&mut self) -> Result<SensorReadings, SI::InterfaceError> {
        Ok(SensorReadings {
            accel_x: self.accel_x()?,
            accel_y: self.accel_y()?,
            accel_z: self.accel_z()?,
            temp: self.temperature()?,
            gyro_x: self.gyro_x()?,
            gyro_y: self.gyro_y()?,
            gyro_z: self.gyro_z()?,
        })
    }

    pub fn accel_offset_x(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_XA_OFFS_H)
    }

    pub fn accel_offset_y(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_YA_OFFS_H)
    }

    pub fn accel_offset_z(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_ZA_OFFS_H)
    }

    pub fn gyro_offset_x(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_XG_OFFS_USRH)
    }

    pub fn gyro_offset_y(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_YG_OFFS_USRH)
    }

    pub fn gyro_offset_z(&mut self) -> Result<i32, SI::InterfaceError> {
        self.read_word(REG_ZG_OFFS_USRH)
    }

    /// Offset setters take any `i32`; values that do not fit 16 bits are
    /// truncated, see [`codec::encode_word`].
    pub fn set_accel_offset_x(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_XA_OFFS_H, offset)
    }

    pub fn set_accel_offset_y(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_YA_OFFS_H, offset)
    }

    pub fn set_accel_offset_z(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_ZA_OFFS_H, offset)
    }

    pub fn set_gyro_offset_x(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_XG_OFFS_USRH, offset)
    }

    pub fn set_gyro_offset_y(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_YG_OFFS_USRH, offset)
    }

    pub fn set_gyro_offset_z(&mut self, offset: i32) -> Result<(), SI::InterfaceError> {
        self.write_word(REG_ZG_OFFS_USRH, offset)
    }
}

/// GYRO_CONFIG FS_SEL, bits [4:3]
#[derive(Copy, Clone, Debug)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum GyroRange {
    Range_250dps = 0b00,
    Range_500dps = 0b01,
    Range_1000dps = 0b10,
    Range_2000dps = 0b11,
}

// Power-on value of FS_SEL is 0
impl Default for GyroRange {
    fn default() -> Self {
        GyroRange::Range_250dps
    }
}

/// ACCEL_CONFIG AFS_SEL, bits [4:3]
#[derive(Copy, Clone, Debug)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum AccelRange {
    Range_2g = 0b00,
    Range_4g = 0b01,
    Range_8g = 0b10,
    Range_16g = 0b11,
}

// Power-on value of AFS_SEL is 0
impl Default for AccelRange {
    fn default() -> Self {
        AccelRange::Range_2g
    }
}
