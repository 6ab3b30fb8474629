/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! MPU-6050 register map.
//!
//! Multi-byte registers are named by their high byte; the low byte
//! always lives at the next address.

/// Accelerometer offset registers (factory trimmed, user adjustable)
pub(crate) const REG_XA_OFFS_H: u8 = 0x06;
pub(crate) const REG_YA_OFFS_H: u8 = 0x08;
pub(crate) const REG_ZA_OFFS_H: u8 = 0x0A;

/// Gyroscope user offset registers
pub(crate) const REG_XG_OFFS_USRH: u8 = 0x13;
pub(crate) const REG_YG_OFFS_USRH: u8 = 0x15;
pub(crate) const REG_ZG_OFFS_USRH: u8 = 0x17;

pub(crate) const REG_GYRO_CONFIG: u8 = 0x1B;
pub(crate) const REG_ACCEL_CONFIG: u8 = 0x1C;

pub(crate) const REG_ACCEL_XOUT_H: u8 = 0x3B;
pub(crate) const REG_ACCEL_YOUT_H: u8 = 0x3D;
pub(crate) const REG_ACCEL_ZOUT_H: u8 = 0x3F;

pub(crate) const REG_TEMP_OUT_H: u8 = 0x41;

pub(crate) const REG_GYRO_XOUT_H: u8 = 0x43;
pub(crate) const REG_GYRO_YOUT_H: u8 = 0x45;
pub(crate) const REG_GYRO_ZOUT_H: u8 = 0x47;

pub(crate) const REG_PWR_MGMT_1: u8 = 0x6B;
pub(crate) const REG_WHO_AM_I: u8 = 0x75;

/// PWR_MGMT_1 values
/// CLKSEL = 1 (PLL with X gyro reference), SLEEP cleared
pub(crate) const PWR_CLKSEL_PLL_XGYRO: u8 = 0x01;
/// SLEEP bit
pub(crate) const PWR_SLEEP: u8 = 1 << 6; // 0x40
/// DEVICE_RESET bit, self-clearing
pub(crate) const PWR_DEVICE_RESET: u8 = 1 << 7; // 0x80

/// Full scale select bits live at [4:3] of GYRO_CONFIG and ACCEL_CONFIG
pub(crate) const FS_SEL_SHIFT: u8 = 3;

/// WHO_AM_I holds the upper six bits of the default I2C address
pub(crate) const MPU6050_WAI: u8 = 0x68;
