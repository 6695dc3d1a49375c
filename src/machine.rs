use std::io::Write;

use log::info;

use crate::cpu::{Step, CPU};
use crate::error::Error;
use crate::mem::Memory;
use crate::timer::Timer;

pub struct Machine {
  cpu: CPU,
  mem: Memory,
  timer: Option<Timer>,
}

impl Machine {
  pub fn new(program: &[u8]) -> Result<Machine, Error> {
    Ok(Machine {
      cpu: CPU::new(),
      mem: Memory::with_program(program)?,
      timer: None,
    })
  }

  pub fn with_interrupts(mut self, enabled: bool) -> Machine {
    self.cpu.ime = enabled;
    self
  }

  /// Feed interrupt 0 from `timer`.
  pub fn with_timer(mut self, timer: Timer) -> Machine {
    self.timer = Some(timer);
    self
  }

  /// Run the program until HLT.
  pub fn run(&mut self, out: &mut dyn Write) -> Result<(), Error> {
    match self.timer.as_mut() {
      None => self.cpu.run(&mut self.mem, out)?,
      Some(timer) => loop {
        if timer.poll() {
          self.cpu.raise(0);
        }
        if self.cpu.step(&mut self.mem, out)? == Step::Halt {
          break;
        }
      },
    }
    info!("halted at 0x{:02x}", self.cpu.regs.pc);
    out.flush()?;
    Ok(())
  }
}
