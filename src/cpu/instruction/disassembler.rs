// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! A disassembler for Game Boy opcodes
use super::{Opcode, PREFIX};
use crate::{
    cpu::{behavior::offset, bus::Bus},
    error::Result,
};
use owo_colors::{OwoColorize, Style};

/// Reads the opcode at `addr` without touching any CPU state
pub fn decode(bus: &Bus, addr: u16) -> Result<Opcode> {
    let op = bus.read_byte(addr)?;
    if op != PREFIX {
        return Ok(Opcode::Plain(op));
    }
    let next = offset(addr, 1)?;
    Ok(Opcode::Prefixed(bus.read_byte(next)?))
}

/// Total size in bytes of the instruction at `addr`.
///
/// Invalid opcodes are treated as a single byte.
pub fn length(bus: &Bus, addr: u16) -> Result<u16> {
    let opcode = decode(bus, addr)?;
    Ok(match opcode.instruction() {
        Some(insn) => opcode.width() + insn.operands() as u16,
        None => 1,
    })
}

/// Disassembles Game Boy instructions
pub trait Disassembler {
    /// Disassemble the single instruction at `addr`
    fn once(&self, bus: &Bus, addr: u16) -> Result<String>;
}

/// Disassembles Game Boy instructions, printing them in the provided [owo_colors::Style]s
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dis {
    /// Styles invalid instructions
    pub invalid: Style,
    /// Styles valid instruction
    pub normal: Style,
}

impl Default for Dis {
    fn default() -> Self {
        Self {
            invalid: Style::new().bold().red(),
            normal: Style::new().green(),
        }
    }
}

impl Dis {
    /// A disassembler which emits no escape codes
    pub fn plain() -> Self {
        Self {
            invalid: Style::new(),
            normal: Style::new(),
        }
    }
}

impl Disassembler for Dis {
    fn once(&self, bus: &Bus, addr: u16) -> Result<String> {
        let opcode = decode(bus, addr)?;
        let Some(insn) = opcode.instruction() else {
            return Ok(format!("{}", format_args!("inval  {opcode}").style(self.invalid)));
        };
        let byte = |n: u16| bus.read_byte(offset(addr, (opcode.width() + n) as i32)?);
        let name = insn.name();
        let text = match insn.operands() {
            1 => {
                let b = byte(0)?;
                if name.ends_with("r8") {
                    name.replace("r8", &format!("{:+}", b as i8))
                } else {
                    name.replace("d8", &format!("${b:02x}"))
                        .replace("a8", &format!("${b:02x}"))
                }
            }
            2 => {
                let word = u16::from_le_bytes([byte(0)?, byte(1)?]);
                name.replace("d16", &format!("${word:04x}"))
                    .replace("a16", &format!("${word:04x}"))
            }
            _ => name.to_string(),
        };
        Ok(format!("{}", text.style(self.normal)))
    }
}
