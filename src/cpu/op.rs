use std::convert::TryFrom;
use std::fmt;

use crate::error::Error;
use crate::mem::Memory;

/// Every legal LS-8 opcode. The discriminant is the encoded byte:
/// `AABCDDDD`, where `AA` is the operand count, `B` marks ALU operations,
/// `C` marks instructions that set PC themselves, `DDDD` identifies the op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
  Nop = 0x00,
  Hlt = 0x01,
  Ret = 0x11,
  Iret = 0x13,
  Push = 0x45,
  Pop = 0x46,
  Prn = 0x47,
  Pra = 0x48,
  Call = 0x50,
  Int = 0x52,
  Jmp = 0x54,
  Jeq = 0x55,
  Jne = 0x56,
  Jgt = 0x57,
  Jlt = 0x58,
  Jle = 0x59,
  Jge = 0x5a,
  Inc = 0x65,
  Dec = 0x66,
  Not = 0x69,
  Ldi = 0x82,
  Ld = 0x83,
  St = 0x84,
  Add = 0xa0,
  Sub = 0xa1,
  Mul = 0xa2,
  Div = 0xa3,
  Mod = 0xa4,
  Cmp = 0xa7,
  And = 0xa8,
  Or = 0xaa,
  Xor = 0xab,
  Shl = 0xac,
  Shr = 0xad,
  Addi = 0xae,
}

pub const ALL: [Opcode; 35] = [
  Opcode::Nop,
  Opcode::Hlt,
  Opcode::Ret,
  Opcode::Iret,
  Opcode::Push,
  Opcode::Pop,
  Opcode::Prn,
  Opcode::Pra,
  Opcode::Call,
  Opcode::Int,
  Opcode::Jmp,
  Opcode::Jeq,
  Opcode::Jne,
  Opcode::Jgt,
  Opcode::Jlt,
  Opcode::Jle,
  Opcode::Jge,
  Opcode::Inc,
  Opcode::Dec,
  Opcode::Not,
  Opcode::Ldi,
  Opcode::Ld,
  Opcode::St,
  Opcode::Add,
  Opcode::Sub,
  Opcode::Mul,
  Opcode::Div,
  Opcode::Mod,
  Opcode::Cmp,
  Opcode::And,
  Opcode::Or,
  Opcode::Xor,
  Opcode::Shl,
  Opcode::Shr,
  Opcode::Addi,
];

impl TryFrom<u8> for Opcode {
  type Error = u8;

  fn try_from(byte: u8) -> Result<Opcode, u8> {
    ALL.iter().copied().find(|op| *op as u8 == byte).ok_or(byte)
  }
}

impl fmt::Display for Opcode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let name = format!("{:?}", self).to_uppercase();
    f.pad(&name)
  }
}

/// Number of operand bytes following `byte`.
pub fn operand_count(byte: u8) -> u8 {
  byte >> 6
}

/// True when the instruction repositions PC itself.
pub fn sets_pc(byte: u8) -> bool {
  ((byte << 3) >> 7) == 1
}

/// Per-cycle decode of the bytes at PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
  pub op: Opcode,
  pub a: u8,
  pub b: u8,
}

impl Instruction {
  /// Decode the instruction at `pc`, reading exactly as many operand bytes as
  /// the opcode encodes.
  pub fn decode(mem: &Memory, pc: u8) -> Result<Instruction, Error> {
    let byte = mem.rb(pc);
    let op = Opcode::try_from(byte)
      .map_err(|opcode| Error::UnknownOpcode { opcode, pc })?;
    let (a, b) = match operand_count(byte) {
      0 => (0, 0),
      1 => (mem.rb(pc.wrapping_add(1)), 0),
      _ => (mem.rb(pc.wrapping_add(1)), mem.rb(pc.wrapping_add(2))),
    };
    Ok(Instruction { op, a, b })
  }

  pub fn len(&self) -> u8 {
    operand_count(self.op as u8) + 1
  }

  pub fn sets_pc(&self) -> bool {
    sets_pc(self.op as u8)
  }
}
