use crate::cpu::reg;
use crate::cpu::CPU;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
  Add,
  Addi,
  Sub,
  Mul,
  Div,
  Mod,
  And,
  Or,
  Xor,
  Not,
  Shl,
  Shr,
  Inc,
  Dec,
  Cmp,
}

impl CPU {
  /// Run `op` on register `a` with register (or, for ADDI, literal) `b`.
  /// Results are truncated to 8 bits; nothing here overflows.
  pub fn alu(&mut self, op: AluOp, a: u8, b: u8) -> Result<(), Error> {
    let ra = a as usize & 0x7;
    let x = u32::from(self.regs.r[ra]);
    let y = u32::from(self.regs.r[b as usize & 0x7]);

    let result = match op {
      AluOp::Add => x + y,
      AluOp::Addi => x + u32::from(b),
      AluOp::Sub => x.wrapping_sub(y),
      AluOp::Mul => x * y,
      AluOp::Div => {
        if y == 0 {
          return Err(Error::DivisionByZero { pc: self.regs.pc });
        }
        x / y
      }
      AluOp::Mod => {
        if y == 0 {
          return Err(Error::DivisionByZero { pc: self.regs.pc });
        }
        x % y
      }
      AluOp::And => x & y,
      AluOp::Or => x | y,
      AluOp::Xor => !(x & y) & (x | y),
      AluOp::Not => !x,
      AluOp::Shl => x.checked_shl(y).unwrap_or(0),
      AluOp::Shr => x.checked_shr(y).unwrap_or(0),
      AluOp::Inc => x + 1,
      AluOp::Dec => x.wrapping_sub(1),
      AluOp::Cmp => {
        self.regs.fl = if x == y {
          reg::E
        } else if x > y {
          reg::G
        } else {
          reg::L
        };
        return Ok(());
      }
    };

    self.regs.r[ra] = (result & 0xff) as u8;
    Ok(())
  }
}
