// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Parses debugger commands
//!
//! | long form                       | short form      |
//! |---------------------------------|-----------------|
//! | `continue`                      | `c`             |
//! | `step`                          | `s`             |
//! | `info registers`                | `i r`           |
//! | `info mem <start:hex> <size:hex>` | `i m ...`     |
//! | `info breakpoints`              | `i b`           |
//! | `break <addr:hex>`              | `b ...`         |
//! | `delete <id>`                   | `d ...`         |
//! | `enable <id>`                   | `en ...`        |
//! | `disable <id>`                  | `dis ...`       |
//! | `disassemble`                   | `disas`         |
//! | `kill`                          | `k`             |
//!
//! Hex arguments are one to four hex digits. Words are separated by exactly one space.

use crate::error::Error;
use std::str::FromStr;

/// A single debugger command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave step mode and run freely
    Continue,
    /// Execute one instruction, then stop again
    Step,
    /// Print every register and the flags
    Registers,
    /// Print `size` bytes of memory starting at `start`
    Memory {
        /// First address to print
        start: u16,
        /// Number of bytes to print
        size: u16,
    },
    /// List the breakpoints
    Breakpoints,
    /// Add a breakpoint at an address
    Break(u16),
    /// Delete a breakpoint by id
    Delete(u32),
    /// Enable a breakpoint by id
    Enable(u32),
    /// Disable a breakpoint by id
    Disable(u32),
    /// Decode the instruction at PC
    Disassemble,
    /// End the session
    Kill,
}

/// Parses one to four hex digits
fn hex(arg: &str) -> Option<u16> {
    if !(1..=4).contains(&arg.len()) || !arg.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(arg, 16).ok()
}

/// Parses a decimal breakpoint id
fn id(arg: &str) -> Option<u32> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

impl FromStr for Command {
    type Err = Error;

    /// Parses a command. Commands are case-sensitive.
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # use gbemu::debug::Command;
    /// assert_eq!(Some(Command::Break(0x10)), "b 10".parse().ok());
    /// assert_eq!(
    ///     Some(Command::Memory { start: 0x8000, size: 0x10 }),
    ///     "info mem 8000 0010".parse().ok()
    /// );
    /// assert!("Continue".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let words: Vec<&str> = s.trim().split(' ').collect();
        let command = match words.as_slice() {
            ["c" | "continue"] => Some(Command::Continue),
            ["s" | "step"] => Some(Command::Step),
            ["i", "r"] | ["info", "registers"] => Some(Command::Registers),
            ["i", "m", start, size] | ["info", "mem", start, size] => hex(start)
                .zip(hex(size))
                .map(|(start, size)| Command::Memory { start, size }),
            ["i", "b"] | ["info", "breakpoints"] => Some(Command::Breakpoints),
            ["b" | "break", addr] => hex(addr).map(Command::Break),
            ["d" | "delete", n] => id(n).map(Command::Delete),
            ["en" | "enable", n] => id(n).map(Command::Enable),
            ["dis" | "disable", n] => id(n).map(Command::Disable),
            ["disas" | "disassemble"] => Some(Command::Disassemble),
            ["k" | "kill"] => Some(Command::Kill),
            _ => None,
        };
        command.ok_or_else(|| Error::UnknownCommand {
            command: s.trim().to_string(),
        })
    }
}
