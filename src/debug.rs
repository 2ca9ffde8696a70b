// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! An interactive, line-oriented debugger
//!
//! The [Debugger] is a [Hook]: the [CPU] hands itself to the debugger before every
//! instruction. When PC sits on an enabled breakpoint, or step mode is on, the debugger
//! reads commands from its [Transport] until one of them resumes execution.
//!
//! See [Command] for the command set.


pub mod command;
pub mod transport;

pub use self::{
    command::Command,
    transport::{LineIo, StdIo, Transport},
};
use crate::{
    cpu::{behavior::offset, bus::Bus, registers::*, Flow, Hook, CPU},
    error::{Error, Result},
};
use std::collections::BTreeMap;

/// Bytes per row of a memory dump
const COLUMNS: u16 = 16;

/// The prompt shown while waiting for a command
pub const PROMPT: &str = "> ";

/// Stops execution when PC reaches `addr`, while enabled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    /// The address to stop at
    pub addr: u16,
    /// Disabled breakpoints are kept, but never hit
    pub enabled: bool,
}

/// Inspects and controls a running [CPU] through a [Transport]
#[derive(Debug)]
pub struct Debugger<T: Transport> {
    io: T,
    breaks: BTreeMap<u32, Breakpoint>,
    break_count: u32,
    step_mode: bool,
}

impl Debugger<StdIo> {
    /// Constructs a debugger which talks to the terminal
    pub fn stdio() -> Self {
        Debugger::new(StdIo::stdio())
    }
}

impl<T: Transport> Debugger<T> {
    /// Constructs a debugger with no breakpoints, in step mode
    pub fn new(io: T) -> Self {
        Debugger {
            io,
            breaks: BTreeMap::new(),
            break_count: 0,
            step_mode: true,
        }
    }

    /// Adds an enabled breakpoint at `addr`, and returns its id.
    ///
    /// Ids count up from 1, and are never reused.
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// let mut debugger = Debugger::new(LineIo::new(&b""[..], vec![]));
    /// assert_eq!(1, debugger.add_breakpoint(0x10));
    /// debugger.delete_breakpoint(1);
    /// assert_eq!(2, debugger.add_breakpoint(0x10));
    /// ```
    pub fn add_breakpoint(&mut self, addr: u16) -> u32 {
        self.break_count += 1;
        let id = self.break_count;
        self.breaks.insert(id, Breakpoint { addr, enabled: true });
        log::debug!("breakpoint {id} set at {addr:04x}");
        id
    }

    /// Removes breakpoint `id`, if it exists
    pub fn delete_breakpoint(&mut self, id: u32) -> Option<Breakpoint> {
        let removed = self.breaks.remove(&id);
        if removed.is_some() {
            log::debug!("breakpoint {id} deleted");
        }
        removed
    }

    /// Enables or disables breakpoint `id`
    ///
    /// Returns [Error::UnknownBreakpoint] if there's no such breakpoint.
    pub fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<()> {
        let bp = self
            .breaks
            .get_mut(&id)
            .ok_or(Error::UnknownBreakpoint { id })?;
        bp.enabled = enabled;
        Ok(())
    }

    /// Finds the lowest-numbered enabled breakpoint at `pc`
    pub fn should_break_at(&self, pc: u16) -> Option<u32> {
        self.breaks
            .iter()
            .find(|(_, bp)| bp.enabled && bp.addr == pc)
            .map(|(&id, _)| id)
    }

    /// Gets the breakpoints, ordered by id
    pub fn breakpoints(&self) -> &BTreeMap<u32, Breakpoint> {
        &self.breaks
    }

    /// Reports whether the debugger stops before every instruction
    pub fn step_mode(&self) -> bool {
        self.step_mode
    }

    /// Sets whether the debugger stops before every instruction
    pub fn set_step_mode(&mut self, step_mode: bool) -> &mut Self {
        self.step_mode = step_mode;
        self
    }

    /// Gets the transport
    pub fn transport(&self) -> &T {
        &self.io
    }

    /// Unwraps the transport
    pub fn into_transport(self) -> T {
        self.io
    }

    /// Runs a single command against the `cpu`.
    ///
    /// Returns the [Flow] to resume with, or `None` to keep reading commands.
    pub fn execute(&mut self, cpu: &mut CPU, command: Command) -> Result<Option<Flow>> {
        match command {
            Command::Continue => {
                log::debug!("leaving step mode");
                self.step_mode = false;
                return Ok(Some(Flow::Continue));
            }
            Command::Step => {
                self.step_mode = true;
                return Ok(Some(Flow::Continue));
            }
            Command::Kill => {
                self.io.write_line("Exiting program...")?;
                return Ok(Some(Flow::Kill));
            }
            Command::Registers => {
                for line in register_lines(cpu.registers()) {
                    self.io.write_line(&line)?;
                }
            }
            Command::Memory { start, size } => {
                let (rows, err) = memory_rows(cpu.bus(), start, size);
                for row in rows {
                    self.io.write_line(&row)?;
                }
                if let Some(e) = err {
                    self.io.write_line(&format!("Error: {e}"))?;
                }
            }
            Command::Breakpoints => {
                if self.breaks.is_empty() {
                    self.io.write_line("No Breakpoints")?;
                } else {
                    self.io.write_line("Num\tEnb\tAddress")?;
                    for (id, bp) in &self.breaks {
                        let enabled = if bp.enabled { "y" } else { "n" };
                        self.io
                            .write_line(&format!("{id}\t{enabled}\t0x{:04X}", bp.addr))?;
                    }
                }
            }
            Command::Break(addr) => {
                self.add_breakpoint(addr);
            }
            Command::Delete(id) => {
                self.delete_breakpoint(id);
            }
            Command::Enable(id) => self.set_enabled(id, true)?,
            Command::Disable(id) => self.set_enabled(id, false)?,
            Command::Disassemble => {
                let pc = cpu.pc();
                match cpu.decode_at(pc) {
                    Ok((opcode, insn)) => {
                        self.io.write_line("Address\tOpcode\tInstruction")?;
                        self.io.write_line(&format!(
                            "0x{pc:04X}\t0x{:04X}\t{}",
                            opcode.key(),
                            insn.name()
                        ))?;
                    }
                    Err(_) => self.io.write_line(&format!(
                        "Could not disassemble instruction at address 0x{pc:04X}"
                    ))?,
                }
            }
        }
        Ok(None)
    }

    /// Reads and runs commands until one of them resumes execution.
    ///
    /// The end of input ends the session, like [Command::Kill].
    pub fn prompt(&mut self, cpu: &mut CPU) -> Result<Flow> {
        loop {
            let Some(line) = self.io.read_line(PROMPT)? else {
                log::info!("end of operator input");
                return self.execute(cpu, Command::Kill).map(|_| Flow::Kill);
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line
                .parse::<Command>()
                .and_then(|command| self.execute(cpu, command))
            {
                Ok(Some(flow)) => return Ok(flow),
                Ok(None) => {}
                Err(e @ Error::IoError(_)) => return Err(e),
                Err(e) => self.io.write_line(&e.to_string())?,
            }
        }
    }
}

impl<T: Transport> Hook for Debugger<T> {
    fn cycle(&mut self, cpu: &mut CPU) -> Result<Flow> {
        let pc = cpu.pc();
        if let Some(id) = self.should_break_at(pc) {
            log::info!("hit breakpoint {id} at {pc:04x}");
            self.io.write_line(&format!("Breakpoint {id} at 0x{pc:04X}"))?;
        } else if !self.step_mode {
            return Ok(Flow::Continue);
        }
        self.prompt(cpu)
    }
}

/// Formats the register file, then the four flags as bits
fn register_lines(reg: &Registers) -> Vec<String> {
    let bit = |flag| reg.is_flag_set(flag) as u8;
    vec![
        format!("A: 0x{:02X} | F: 0x{:02X}", reg.a, reg.f),
        format!("B: 0x{:02X} | C: 0x{:02X}", reg.b, reg.c),
        format!("D: 0x{:02X} | E: 0x{:02X}", reg.d, reg.e),
        format!("H: 0x{:02X} | L: 0x{:02X}", reg.h, reg.l),
        format!("SP: 0x{:04X}", reg.sp),
        format!("PC: 0x{:04X}", reg.pc),
        "Z N H C".to_string(),
        format!(
            "{} {} {} {}",
            bit(ZERO),
            bit(SUBTRACT),
            bit(HALF_CARRY),
            bit(CARRY)
        ),
    ]
}

/// Formats `size` bytes starting at `start` as a hex dump.
///
/// Each row starts with the address of its first column, and ends with the address
/// of its last. Stops at the first byte which can't be read, returning the rows so far
/// along with the error.
fn memory_rows(bus: &Bus, start: u16, size: u16) -> (Vec<String>, Option<Error>) {
    let mut rows = vec![];
    if size == 0 {
        return (rows, None);
    }
    let header: Vec<String> = (0..COLUMNS).map(|col| format!("{col:02X}")).collect();
    rows.push(format!("ADDR {}", header.join(" ")));
    let mut row = String::new();
    for i in 0..size {
        let read = offset(start, i as i32).and_then(|addr| Ok((addr, bus.read_byte(addr)?)));
        let (addr, byte) = match read {
            Ok(read) => read,
            Err(e) => {
                if !row.is_empty() {
                    rows.push(row);
                }
                return (rows, Some(e));
            }
        };
        if i % COLUMNS == 0 {
            row = format!("{addr:04X} ");
        }
        row.push_str(&format!("{byte:02X} "));
        if (i + 1) % COLUMNS == 0 || i + 1 == size {
            row.push_str(&format!("{addr:04X}"));
            rows.push(std::mem::take(&mut row));
        }
    }
    (rows, None)
}
