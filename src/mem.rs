use crate::error::Error;

pub const RAM_SIZE: usize = 256;

/// Base of the interrupt vector table. Slot `i` holds the handler address for
/// interrupt `i`.
pub const VECTOR_TABLE: u8 = 0xf8;

#[derive(Debug)]
pub struct Memory {
  ram: [u8; RAM_SIZE],
}

impl Memory {
  pub fn new() -> Memory {
    Memory { ram: [0; RAM_SIZE] }
  }

  /// Build a memory image with `program` at address 0 and zeroes after it.
  pub fn with_program(program: &[u8]) -> Result<Memory, Error> {
    if program.len() > RAM_SIZE {
      return Err(Error::ProgramTooLarge(program.len()));
    }
    let mut result = Memory::new();
    result.write(0, program);
    Ok(result)
  }

  /// Read a byte at address `addr`.
  pub fn rb(&self, addr: u8) -> u8 {
    self.ram[addr as usize]
  }

  /// Write `value` at address `addr`.
  pub fn wb(&mut self, addr: u8, value: u8) {
    self.ram[addr as usize] = value;
  }

  /// Write an arbitrary number of bytes to memory, wrapping at the top.
  pub fn write(&mut self, addr: u8, values: &[u8]) {
    let mut cur = addr;
    for v in values {
      self.wb(cur, *v);
      cur = cur.wrapping_add(1);
    }
  }

  /// Handler address for interrupt `n`.
  pub fn vector(&self, n: u8) -> u8 {
    self.rb(VECTOR_TABLE + (n & 0x7))
  }
}
