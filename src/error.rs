use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can end other than HLT.
#[derive(Debug, Error)]
pub enum Error {
  #[error("unrecognized instruction 0b{opcode:08b} at 0x{pc:02x}")]
  UnknownOpcode { opcode: u8, pc: u8 },

  #[error("file not found: {}", .0.display())]
  ProgramNotFound(PathBuf),

  #[error("stack underflow at 0x{pc:02x}: the stack is empty")]
  StackUnderflow { pc: u8 },

  #[error("division by zero at 0x{pc:02x}")]
  DivisionByZero { pc: u8 },

  #[error("line {line}: invalid instruction {text:?}")]
  InvalidProgram { line: usize, text: String },

  #[error("program is {0} bytes, memory holds 256")]
  ProgramTooLarge(usize),

  #[error("i/o error: {0}")]
  Io(#[from] io::Error),
}

impl Error {
  /// Process status reported for this error.
  pub fn exit_code(&self) -> i32 {
    match *self {
      Error::UnknownOpcode { .. } => 1,
      Error::ProgramNotFound(_) => 2,
      Error::StackUnderflow { .. } => 3,
      Error::DivisionByZero { .. } => 4,
      Error::InvalidProgram { .. } | Error::ProgramTooLarge(_) => 5,
      Error::Io(_) => 6,
    }
  }
}
