use crate::cpu::Registers;

/// Interrupt mask.
pub const IM: usize = 5;
/// Interrupt status.
pub const IS: usize = 6;
/// Stack pointer.
pub const SP: usize = 7;

/// Initial stack pointer; also the empty-stack threshold.
pub const STACK_TOP: u8 = 0xf4;

pub const E: u8 = 0b001;
pub const G: u8 = 0b010;
pub const L: u8 = 0b100;

impl Registers {
  pub fn new() -> Registers {
    let mut r = [0; 8];
    r[SP] = STACK_TOP;
    Registers { r, pc: 0, fl: 0 }
  }

  pub fn sp(&self) -> u8 {
    self.r[SP]
  }

  /// True when nothing has been pushed below the stack top.
  pub fn stack_empty(&self) -> bool {
    self.r[SP] > STACK_TOP - 1
  }

  pub fn e(&self) -> bool {
    //! Equal flag
    self.fl & E != 0
  }
  pub fn g(&self) -> bool {
    //! Greater-than flag
    self.fl & G != 0
  }
  pub fn l(&self) -> bool {
    //! Less-than flag
    self.fl & L != 0
  }
}
