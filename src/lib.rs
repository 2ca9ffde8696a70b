// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE.txt for details)

#![warn(missing_docs)]
//! This crate implements the core of a Game Boy (DMG) as if it were a bare CPU on a bus:
//! a register file, a small memory map, and the part of the instruction set that the
//! boot ROM exercises. An interactive debugger rides along on every cycle.
//!
//! It is not (yet) a full emulator. There's no PPU, no timers, and no interrupts.

pub mod cpu;
pub mod debug;
pub mod error;

pub use prelude::*;

/// Common imports for gbemu
pub mod prelude {
    use super::*;
    pub use crate::bus;
    pub use cpu::{
        bus::{Bus, Region::*},
        flags::ControlFlags,
        instruction::{
            disassembler::{Dis, Disassembler},
            Instruction, Opcode,
        },
        registers::Registers,
        Flow, Hook, CPU,
    };
    pub use debug::{Debugger, LineIo, Transport};
    pub use error::{Error, Result};
}
