use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::mem::RAM_SIZE;

/// Read an `.ls8` program from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|e| match e.kind() {
    io::ErrorKind::NotFound => Error::ProgramNotFound(path.to_path_buf()),
    _ => Error::Io(e),
  })?;
  let program = parse(&text)?;
  info!("loaded {} bytes from {}", program.len(), path.display());
  Ok(program)
}

/// Parse one base-2 byte per line. `#` starts a comment; blank lines are
/// skipped.
pub fn parse(text: &str) -> Result<Vec<u8>, Error> {
  let mut program = Vec::new();
  for (idx, line) in text.lines().enumerate() {
    let instruction = line.split('#').next().unwrap_or("").trim();
    if instruction.is_empty() {
      continue;
    }
    let byte = u8::from_str_radix(instruction, 2).map_err(|_| Error::InvalidProgram {
      line: idx + 1,
      text: instruction.to_string(),
    })?;
    program.push(byte);
  }
  if program.len() > RAM_SIZE {
    return Err(Error::ProgramTooLarge(program.len()));
  }
  Ok(program)
}
