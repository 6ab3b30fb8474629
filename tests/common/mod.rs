//! In-memory MPU-6050 register file implementing the blocking I2C traits

#![allow(dead_code)]

use embedded_hal::blocking::i2c::{Write, WriteRead};
use std::cell::RefCell;
use std::rc::Rc;

pub const PWR_MGMT_1: u8 = 0x6B;
/// PWR_MGMT_1 after a device reset: asleep, internal oscillator
pub const PWR_MGMT_1_RESET_VALUE: u8 = 0x40;

/// Bus level operations seen by the fake, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Read { reg: u8, value: u8 },
    Write { reg: u8, value: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusFault;

#[derive(Debug)]
struct State {
    registers: [u8; 256],
    operations: Vec<Operation>,
    fail_on_write_to: Option<u8>,
    writes_before_failure: Option<usize>,
}

/// Cloneable handle; clones share the same register file
#[derive(Debug, Clone)]
pub struct RegisterFile {
    address: u8,
    state: Rc<RefCell<State>>,
}

impl RegisterFile {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            state: Rc::new(RefCell::new(State {
                registers: [0; 256],
                operations: Vec::new(),
                fail_on_write_to: None,
                writes_before_failure: None,
            })),
        }
    }

    pub fn set(&self, reg: u8, value: u8) {
        self.state.borrow_mut().registers[reg as usize] = value;
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.state.borrow().registers[reg as usize]
    }

    /// Store a big-endian word at `reg` / `reg + 1`
    pub fn set_word(&self, reg: u8, value: i16) {
        let [hi, lo] = value.to_be_bytes();
        self.set(reg, hi);
        self.set(reg + 1, lo);
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Make every write to `reg` fail from now on
    pub fn fail_writes_to(&self, reg: u8) {
        self.state.borrow_mut().fail_on_write_to = Some(reg);
    }

    /// Let `count` more writes through, then fail every write after that
    pub fn fail_writes_after(&self, count: usize) {
        self.state.borrow_mut().writes_before_failure = Some(count);
    }
}

impl WriteRead for RegisterFile {
    type Error = BusFault;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), BusFault> {
        assert_eq!(address, self.address, "wrong device address");
        assert_eq!(bytes.len(), 1, "expected a single register address");
        let mut state = self.state.borrow_mut();
        let mut reg = bytes[0];
        for byte in buffer.iter_mut() {
            *byte = state.registers[reg as usize];
            state.operations.push(Operation::Read { reg, value: *byte });
            reg = reg.wrapping_add(1);
        }
        Ok(())
    }
}

impl Write for RegisterFile {
    type Error = BusFault;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusFault> {
        assert_eq!(address, self.address, "wrong device address");
        assert_eq!(bytes.len(), 2, "expected register address and one value");
        let (reg, value) = (bytes[0], bytes[1]);
        let mut state = self.state.borrow_mut();
        if state.fail_on_write_to == Some(reg) {
            return Err(BusFault);
        }
        match state.writes_before_failure {
            Some(0) => return Err(BusFault),
            Some(n) => state.writes_before_failure = Some(n - 1),
            None => {}
        }
        state.operations.push(Operation::Write { reg, value });
        if reg == PWR_MGMT_1 && value & 0x80 != 0 {
            // reset bit self-clears into the power-on default
            state.registers[reg as usize] = PWR_MGMT_1_RESET_VALUE;
        } else {
            state.registers[reg as usize] = value;
        }
        Ok(())
    }
}
