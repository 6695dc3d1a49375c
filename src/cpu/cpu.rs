use std::io::Write;

use log::{debug, log_enabled, trace, Level};

use crate::cpu::op::{Instruction, Opcode};
use crate::cpu::reg;
use crate::cpu::{AluOp, Registers, Step, CPU};
use crate::error::Error;
use crate::mem::Memory;

impl CPU {
  pub fn new() -> CPU {
    CPU {
      regs: Registers::new(),
      ime: false,
    }
  }

  /// Request interrupt `n` by setting its bit in IS. IS has no bit for
  /// numbers above 7, so those requests are dropped.
  pub fn raise(&mut self, n: u8) {
    if n < 8 {
      self.regs.r[reg::IS] |= 1 << n;
    }
  }

  /// Execute until HLT or a fatal error.
  pub fn run(&mut self, mem: &mut Memory, out: &mut dyn Write) -> Result<(), Error> {
    while self.step(mem, out)? == Step::Continue {}
    Ok(())
  }

  /// Run one cycle: service a pending interrupt if enabled, then fetch,
  /// decode and execute the instruction at PC.
  pub fn step(&mut self, mem: &mut Memory, out: &mut dyn Write) -> Result<Step, Error> {
    if self.ime {
      self.check_interrupts(mem);
    }
    if log_enabled!(Level::Trace) {
      trace!("{}", self.trace(mem));
    }

    let inst = Instruction::decode(mem, self.regs.pc)?;
    let step = self.exec(inst, mem, out)?;
    if step == Step::Continue && !inst.sets_pc() {
      self.regs.pc = self.regs.pc.wrapping_add(inst.len());
    }
    Ok(step)
  }

  /// Dispatch the lowest pending unmasked interrupt, if any.
  fn check_interrupts(&mut self, mem: &mut Memory) {
    let masked = self.regs.r[reg::IM] & self.regs.r[reg::IS];
    if masked == 0 {
      return;
    }
    let n = masked.trailing_zeros() as u8;
    debug!(
      "INTERRUPT {} IM=0b{:08b} IS=0b{:08b}",
      n,
      self.regs.r[reg::IM],
      self.regs.r[reg::IS]
    );
    self.regs.r[reg::IS] &= !(1 << n);
    self.handle_interrupt(mem, n);
  }

  /// Save the machine context on the stack and jump through the vector for
  /// interrupt `n`.
  fn handle_interrupt(&mut self, mem: &mut Memory, n: u8) {
    self.ime = false;
    let pc = self.regs.pc;
    let fl = self.regs.fl;
    self.push(mem, pc);
    self.push(mem, fl);
    for i in 0..reg::SP {
      let value = self.regs.r[i];
      self.push(mem, value);
    }
    self.regs.pc = mem.vector(n);
  }

  fn push(&mut self, mem: &mut Memory, value: u8) {
    self.regs.r[reg::SP] = self.regs.r[reg::SP].wrapping_sub(1);
    mem.wb(self.regs.sp(), value);
  }

  fn pop(&mut self, mem: &Memory) -> Result<u8, Error> {
    if self.regs.stack_empty() {
      return Err(Error::StackUnderflow { pc: self.regs.pc });
    }
    let value = mem.rb(self.regs.sp());
    self.regs.r[reg::SP] = self.regs.r[reg::SP].wrapping_add(1);
    Ok(value)
  }

  /// Execute a decoded instruction. Handlers for opcodes with the "sets PC"
  /// bit leave PC where the next cycle should fetch.
  fn exec(
    &mut self,
    inst: Instruction,
    mem: &mut Memory,
    out: &mut dyn Write,
  ) -> Result<Step, Error> {
    let Instruction { op, a, b } = inst;

    macro_rules! r {
      ($i:expr) => {
        self.regs.r[$i as usize & 0x7]
      };
    }
    macro_rules! jump_if {
      ($cond:expr) => {{
        if $cond {
          self.regs.pc = r!(a);
        } else {
          self.regs.pc = self.regs.pc.wrapping_add(2);
        }
      }};
    }

    match op {
      Opcode::Nop => (),
      Opcode::Hlt => return Ok(Step::Halt),

      Opcode::Ldi => r!(a) = b,
      Opcode::Ld => r!(a) = r!(b),
      Opcode::St => mem.wb(r!(a), r!(b)),
      Opcode::Prn => writeln!(out, "{}", r!(a))?,
      Opcode::Pra => write!(out, "{}", r!(a) as char)?,

      Opcode::Push => {
        let value = r!(a);
        self.push(mem, value);
      }
      Opcode::Pop => r!(a) = self.pop(mem)?,

      Opcode::Call => {
        let retaddr = self.regs.pc.wrapping_add(2);
        self.push(mem, retaddr);
        self.regs.pc = r!(a);
      }
      Opcode::Ret => self.regs.pc = self.pop(mem)?,
      Opcode::Jmp => self.regs.pc = r!(a),
      Opcode::Jeq => jump_if!(self.regs.e()),
      Opcode::Jne => jump_if!(!self.regs.e()),
      Opcode::Jgt => jump_if!(self.regs.g()),
      Opcode::Jlt => jump_if!(self.regs.l()),
      Opcode::Jle => jump_if!(self.regs.l() || self.regs.e()),
      Opcode::Jge => jump_if!(self.regs.g() || self.regs.e()),

      Opcode::Int => {
        let n = r!(a);
        self.raise(n);
        self.regs.pc = self.regs.pc.wrapping_add(2);
      }
      Opcode::Iret => {
        for i in (0..reg::SP).rev() {
          self.regs.r[i] = self.pop(mem)?;
        }
        self.regs.fl = self.pop(mem)?;
        self.regs.pc = self.pop(mem)?;
        self.ime = true;
        debug!("IRET to 0x{:02x}", self.regs.pc);
      }

      Opcode::Add => self.alu(AluOp::Add, a, b)?,
      Opcode::Addi => self.alu(AluOp::Addi, a, b)?,
      Opcode::Sub => self.alu(AluOp::Sub, a, b)?,
      Opcode::Mul => self.alu(AluOp::Mul, a, b)?,
      Opcode::Div => self.alu(AluOp::Div, a, b)?,
      Opcode::Mod => self.alu(AluOp::Mod, a, b)?,
      Opcode::Cmp => self.alu(AluOp::Cmp, a, b)?,
      Opcode::And => self.alu(AluOp::And, a, b)?,
      Opcode::Or => self.alu(AluOp::Or, a, b)?,
      Opcode::Xor => self.alu(AluOp::Xor, a, b)?,
      Opcode::Shl => self.alu(AluOp::Shl, a, b)?,
      Opcode::Shr => self.alu(AluOp::Shr, a, b)?,
      Opcode::Not => self.alu(AluOp::Not, a, 0)?,
      Opcode::Inc => self.alu(AluOp::Inc, a, 0)?,
      Opcode::Dec => self.alu(AluOp::Dec, a, 0)?,
    }
    Ok(Step::Continue)
  }

  /// One-line dump of PC, the next three bytes and all registers.
  pub fn trace(&self, mem: &Memory) -> String {
    let pc = self.regs.pc;
    let mut line = format!(
      "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
      pc,
      mem.rb(pc),
      mem.rb(pc.wrapping_add(1)),
      mem.rb(pc.wrapping_add(2)),
    );
    for r in self.regs.r.iter() {
      line.push_str(&format!(" {:02X}", r));
    }
    line
  }
}
