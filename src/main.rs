mod cpu;
mod error;
mod loader;
mod machine;
mod mem;
mod timer;

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use log::error;

use crate::error::Error;
use crate::machine::Machine;
use crate::timer::Timer;

fn main() {
  env_logger::init();

  let matches = App::new("ls8")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Emulator for the LS-8 8-bit computer")
    .arg(
      Arg::with_name("PROGRAM")
        .help("Program to run, one binary byte per line")
        .required(true)
        .index(1),
    )
    .arg(
      Arg::with_name("interrupts")
        .long("interrupts")
        .help("Start with interrupts enabled"),
    )
    .arg(
      Arg::with_name("timer")
        .long("timer")
        .value_name("SECONDS")
        .takes_value(true)
        .help("Raise interrupt 0 every SECONDS seconds"),
    )
    .get_matches();

  if let Err(err) = run(&matches) {
    error!("{:#}", err);
    eprintln!("error: {:#}", err);
    let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
    process::exit(code);
  }
}

fn run(matches: &ArgMatches) -> Result<()> {
  let path = matches.value_of("PROGRAM").context("no program given")?;
  let program = loader::load(path).with_context(|| format!("loading {}", path))?;

  let mut machine =
    Machine::new(&program)?.with_interrupts(matches.is_present("interrupts"));
  if let Some(secs) = matches.value_of("timer") {
    let secs: u64 = secs
      .parse()
      .with_context(|| format!("invalid timer period {:?}", secs))?;
    machine = machine.with_timer(Timer::new(Duration::from_secs(secs)));
  }

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let result = machine.run(&mut out);
  out.flush()?;
  result?;
  Ok(())
}
