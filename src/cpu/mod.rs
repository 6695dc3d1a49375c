mod alu;
mod cpu;
pub mod op;
pub mod reg;

pub use self::alu::AluOp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
  /// General-purpose registers. R5-R7 double as IM, IS and SP.
  pub r: [u8; 8],

  /// Program counter.
  pub pc: u8,

  /// Flag register.
  pub fl: u8,
}

#[derive(Debug)]
pub struct CPU {
  pub regs: Registers,

  /// Interrupts enabled.
  pub ime: bool,
}

/// Outcome of a single fetch-execute cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Continue,
  Halt,
}
