/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Two's-complement codec for the 16-bit big-endian register pairs.

/// Combine a register pair into a signed reading.
///
/// Total over every byte pair: the result is always in `[-32768, 32767]`.
pub fn decode_word(high: u8, low: u8) -> i32 {
    let raw = (high as u32) << 8 | (low as u32);
    if raw >= 0x8000 {
        -((0x1_0000 - raw) as i32)
    } else {
        raw as i32
    }
}

/// Split a signed value into the (high, low) bytes of a register pair.
///
/// Values outside `[-32768, 65535]` do not fit a 16-bit register and
/// are truncated to their low 16 bits without error.
pub fn encode_word(value: i32) -> (u8, u8) {
    let raw: u16 = if value < 0 {
        (0x1_0000u32.wrapping_sub(value.unsigned_abs()) & 0xFFFF) as u16
    } else {
        (value as u32 & 0xFFFF) as u16
    };
    ((raw >> 8) as u8, (raw & 0xFF) as u8)
}

/// Reinterpret a register pair as an `i16` bit pattern.
/// Numerically the same as [`decode_word`]; used by the temperature path.
pub fn decode_i16(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}
