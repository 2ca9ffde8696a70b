// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Decodes and runs instructions

#[cfg(test)]
mod tests;

pub mod behavior;
pub mod bus;
pub mod flags;
pub mod instruction;
pub mod registers;

use self::{
    behavior::offset,
    bus::{Bus, Region::*},
    flags::ControlFlags,
    instruction::{
        disassembler::{self, Dis, Disassembler},
        Instruction, Opcode, PREFIX,
    },
    registers::Registers,
};
use crate::{
    debug::Debugger,
    error::{Error, Result},
};
use owo_colors::OwoColorize;

/// The address the cartridge program starts at, once the boot ROM is done
pub const CART_ENTRY: u16 = 0x0100;

/// What the engine should do after a [Hook] returns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Fetch and execute the next instruction
    Continue,
    /// Stop running immediately
    Kill,
}

/// Observes the [CPU] before every instruction is fetched
///
/// The unit type is the free-running hook.
pub trait Hook {
    /// Called once per cycle, before the instruction at PC is fetched
    fn cycle(&mut self, cpu: &mut CPU) -> Result<Flow>;
}

impl Hook for () {
    fn cycle(&mut self, _: &mut CPU) -> Result<Flow> {
        Ok(Flow::Continue)
    }
}

/// Represents the internal state of the CPU interpreter
#[derive(Clone, Debug, PartialEq)]
pub struct CPU {
    /// Flags that control how the CPU behaves, but which aren't inherent to the
    /// Game Boy. Includes debug and trace modes.
    pub flags: ControlFlags,
    reg: Registers,
    bus: Bus,
    // Execution data
    halted: bool,
    cycle: usize,
    disassembler: Dis,
}

// public interface
impl CPU {
    /// Constructs a new CPU, loading the boot ROM and optionally a cartridge
    ///
    /// Fails with [Error::RomSize] if either image is too large for its region.
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let cpu = CPU::new(&[0x00], None, ControlFlags::default())?;
    /// assert_eq!(0x0000, cpu.pc());
    /// #    Ok(())
    /// # }
    /// ```
    pub fn new(boot: &[u8], cart: Option<&[u8]>, flags: ControlFlags) -> Result<Self> {
        let mut bus = Bus::new();
        bus.load_region(BootRom, boot)?;
        if let Some(cart) = cart {
            bus.load_region(CartRom, cart)?;
        }
        Ok(Self::with_bus(bus, flags))
    }

    /// Constructs a new CPU around an existing [Bus]
    ///
    /// When [ControlFlags::boot] is clear, the boot ROM is unmapped and
    /// execution begins at the cartridge entry point.
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let mut cpu = CPU::with_bus(
    ///     bus! { BootRom = &[0x21, 0x34, 0x12] }?,
    ///     ControlFlags::default(),
    /// );
    /// cpu.step()?;
    /// assert_eq!(0x1234, cpu.registers().hl());
    /// assert_eq!(3, cpu.pc());
    /// #    Ok(())
    /// # }
    /// ```
    pub fn with_bus(bus: Bus, flags: ControlFlags) -> Self {
        let mut cpu = CPU {
            flags,
            reg: Registers::new(),
            bus,
            halted: false,
            cycle: 0,
            disassembler: Dis::default(),
        };
        cpu.reset();
        cpu
    }

    /// Replaces the disassembler used for trace output
    pub fn set_disassembler(&mut self, disassembler: Dis) -> &mut Self {
        self.disassembler = disassembler;
        self
    }

    /// Gets the program counter
    pub fn pc(&self) -> u16 {
        self.reg.pc
    }

    /// Gets the register file
    pub fn registers(&self) -> &Registers {
        &self.reg
    }

    /// Gets the register file mutably
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.reg
    }

    /// Gets the address space
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Gets the address space mutably
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Gets the number of instructions the CPU has executed
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// let cpu = CPU::default();
    /// assert_eq!(0, cpu.cycle());
    /// ```
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Reports whether the CPU stopped on a fatal error
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Resets the emulator.
    ///
    /// Zeroes the registers and cycle count, releases the halted state,
    /// and remaps the boot ROM according to [ControlFlags::boot].
    /// Does not touch the contents of memory.
    pub fn reset(&mut self) {
        self.reg.reset();
        self.cycle = 0;
        self.halted = false;
        let boot = self.flags.boot && self.bus.get_region(BootRom).is_some();
        self.bus.set_boot_mapped(boot);
        if !boot {
            self.reg.pc = CART_ENTRY;
        }
    }

    /// Decodes the instruction at `addr`, without executing it
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let cpu = CPU::with_bus(bus! { BootRom = &[0xcb, 0x7c] }?, ControlFlags::default());
    /// let (opcode, insn) = cpu.decode_at(0)?;
    /// assert_eq!(0xcb7c, opcode.key());
    /// assert_eq!("BIT 7,H", insn.name());
    /// #    Ok(())
    /// # }
    /// ```
    pub fn decode_at(&self, addr: u16) -> Result<(Opcode, Instruction)> {
        let opcode = disassembler::decode(&self.bus, addr)?;
        let insn = opcode
            .instruction()
            .ok_or(Error::DecodeError { opcode, addr })?;
        Ok((opcode, insn))
    }

    /// Fetches, decodes and executes a single instruction
    ///
    /// Any error moves the CPU into the halted state, after which
    /// every call returns [Error::Halted].
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let mut cpu = CPU::with_bus(
    ///     bus! { BootRom = &[0xaf, 0xd3] }?, // xor a; invalid!
    ///     ControlFlags::default(),
    /// );
    /// cpu.step()?;
    /// assert!(cpu.step().is_err());
    /// assert!(cpu.is_halted());
    /// #    Ok(())
    /// # }
    /// ```
    pub fn step(&mut self) -> Result<Instruction> {
        if self.halted {
            return Err(Error::Halted);
        }
        self.fetch_execute().map_err(|e| {
            self.halted = true;
            log::error!("halted after {} cycles at {:04x}: {e}", self.cycle, self.reg.pc);
            e
        })
    }

    /// Runs the `hook`, then executes one instruction unless the hook asked to stop
    pub fn tick(&mut self, hook: &mut impl Hook) -> Result<Flow> {
        if hook.cycle(self)? == Flow::Kill {
            return Ok(Flow::Kill);
        }
        self.step()?;
        Ok(Flow::Continue)
    }

    /// Runs until killed, with the interactive debugger on stdio if
    /// [ControlFlags::debug] is set.
    pub fn run(&mut self) -> Result<()> {
        if self.flags.debug {
            self.run_with(&mut Debugger::stdio())
        } else {
            self.run_with(&mut ())
        }
    }

    /// Runs until the `hook` kills the session
    ///
    /// There is no other way out of the loop: every fatal condition is returned as an [Error].
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let mut cpu = CPU::with_bus(
    ///     bus! { BootRom = &[0x18, 0x80] }?, // jr -128
    ///     ControlFlags::default(),
    /// );
    /// let err = cpu.run_with(&mut ()).unwrap_err();
    /// assert!(matches!(err, Error::InvalidJump { pc: 0x0002, offset: -128 }));
    /// #    Ok(())
    /// # }
    /// ```
    pub fn run_with(&mut self, hook: &mut impl Hook) -> Result<()> {
        while self.tick(hook)? == Flow::Continue {}
        Ok(())
    }
}

impl CPU {
    /// Reads the byte at PC, and advances PC past it
    fn fetch(&mut self) -> Result<u8> {
        let byte = self.bus.read_byte(self.reg.pc)?;
        self.reg.pc = offset(self.reg.pc, 1)?;
        Ok(byte)
    }

    fn fetch_execute(&mut self) -> Result<Instruction> {
        let addr = self.reg.pc;
        let opcode = match self.fetch()? {
            PREFIX => Opcode::Prefixed(self.fetch()?),
            byte => Opcode::Plain(byte),
        };
        let insn = opcode
            .instruction()
            .ok_or(Error::DecodeError { opcode, addr })?;
        // The listing shows the operands as they were before execution
        let listing = self.flags.trace.then(|| {
            self.disassembler
                .once(&self.bus, addr)
                .unwrap_or_else(|_| insn.to_string())
        });
        insn.execute(&mut self.bus, &mut self.reg)?;
        self.cycle += 1;
        log::trace!("{:04x}: {opcode} {insn}", addr);
        if let Some(listing) = listing {
            std::println!(
                "{:3} {:04x}: {:<6} {}",
                self.cycle.bright_black(),
                addr,
                opcode.to_string(),
                listing
            );
        }
        Ok(insn)
    }
}

impl Default for CPU {
    /// Constructs a CPU with no ROM, whose PC points at the cartridge entry
    fn default() -> Self {
        CPU::with_bus(
            Bus::new(),
            ControlFlags {
                boot: false,
                ..Default::default()
            },
        )
    }
}
