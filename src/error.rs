// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for gbemu

use crate::cpu::{bus::Region, instruction::Opcode};
use std::fmt::Display;
use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of bus access that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Access {
    /// A load from the bus
    Read,
    /// A store to the bus
    Write,
}

impl Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Access::Read => "read from",
            Access::Write => "write to",
        })
    }
}

/// Error type for gbemu.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetched an opcode which has no entry in the dispatch table
    #[error("fetched unknown opcode {opcode} from address {addr:04x}")]
    DecodeError {
        /// The offending opcode
        opcode: Opcode,
        /// The address it was fetched from
        addr: u16,
    },
    /// Touched an address which no [Region] maps, or wrote into ROM
    #[error("{access} unmapped address {addr:04x}")]
    UnmappedAddress {
        /// The offending address
        addr: u16,
        /// Whether the access was a read or a write
        access: Access,
    },
    /// A relative jump left the 16-bit address space
    #[error("relative jump from {pc:04x} by {offset} leaves the address space")]
    InvalidJump {
        /// The program counter the offset was applied to
        pc: u16,
        /// The signed offset
        offset: i8,
    },
    /// PC or SP arithmetic left the 16-bit address space
    #[error("address {addr:04x} offset by {delta} leaves the address space")]
    AddressOverflow {
        /// The base address
        addr: u16,
        /// The signed displacement
        delta: i32,
    },
    /// The ROM image does not fit in its [Region]
    #[error("provided ROM of size {size}B is too large for {region} ({capacity}B)")]
    RomSize {
        /// The region being loaded
        region: Region,
        /// Size of the provided image
        size: usize,
        /// Size of the region
        capacity: usize,
    },
    /// The engine has already stopped on a fatal error
    #[error("the cpu is halted")]
    Halted,
    /// The debugger did not understand a command
    #[error("Unknown or invalid command: {command}")]
    UnknownCommand {
        /// The offending command line
        command: String,
    },
    /// The debugger was asked about a breakpoint which does not exist
    #[error("Unknown breakpoint: {id}")]
    UnknownBreakpoint {
        /// The offending breakpoint id
        id: u32,
    },
    /// Error originated in [std::io]
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
