// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Contains implementations for each [Instruction](super::instruction::Instruction)
//!
//! Every instruction is a plain function over the [Bus] and [Registers].
//! On entry, PC points just past the opcode. An instruction which takes
//! an immediate operand consumes it from `[PC]` and advances PC past it.
//!
//! Families of near-identical opcodes share one function, parameterized
//! over the register index or condition it encodes.

pub mod alu;
pub mod bits;
pub mod control;
pub mod load;
pub mod stack;

use super::{
    bus::Bus,
    registers::{Registers, R8},
};
use crate::error::{Error, Result};

/// The signature shared by every instruction
pub type Exec = fn(&mut Bus, &mut Registers) -> Result<()>;

/// Displaces `addr` by `delta`, failing if the result leaves the address space
#[inline]
pub fn offset(addr: u16, delta: i32) -> Result<u16> {
    u16::try_from(addr as i32 + delta).map_err(|_| Error::AddressOverflow { addr, delta })
}

/// Consumes an immediate byte from `[PC]`
#[inline]
pub fn imm8(bus: &Bus, reg: &mut Registers) -> Result<u8> {
    let value = bus.read_byte(reg.pc)?;
    reg.pc = offset(reg.pc, 1)?;
    Ok(value)
}

/// Consumes a little-endian immediate word from `[PC]`
#[inline]
pub fn imm16(bus: &Bus, reg: &mut Registers) -> Result<u16> {
    let lo = imm8(bus, reg)?;
    let hi = imm8(bus, reg)?;
    Ok(u16::from_le_bytes([lo, hi]))
}

/// Reads an 8-bit operand, which may be the memory cell at `(HL)`
#[inline]
pub fn read_r8(bus: &Bus, reg: &Registers, r: R8) -> Result<u8> {
    match reg.r8(r) {
        Some(value) => Ok(value),
        None => bus.read_byte(reg.hl()),
    }
}

/// Writes an 8-bit operand, which may be the memory cell at `(HL)`
#[inline]
pub fn write_r8(bus: &mut Bus, reg: &mut Registers, r: R8, value: u8) -> Result<()> {
    if !reg.set_r8(r, value) {
        bus.write_byte(reg.hl(), value)?;
    }
    Ok(())
}
