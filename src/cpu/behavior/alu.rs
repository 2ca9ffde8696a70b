// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Arithmetic and logic
//!
//! |opcode| effect                                       |
//! |------|----------------------------------------------|
//! |`03`  | `INC rr` Increment register pair, no flags   |
//! |`04`  | `INC r`  Z0H-                                |
//! |`05`  | `DEC r`  Z1H-                                |
//! |`0b`  | `DEC rr` Decrement register pair, no flags   |
//! |`a8`  | `XOR r`  Z000                                |
//! |`b8`  | `CP r`   Z1HC, A is not written              |
//! |`ee`  | `XOR d8`                                     |
//! |`fe`  | `CP d8`                                      |

use super::*;
use crate::cpu::registers::{CARRY, HALF_CARRY, R16, SP, SUBTRACT, ZERO};

/// Increments `value`, setting Z, N and H. C is untouched.
pub fn inc(reg: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    reg.set_flags(ZERO, result == 0);
    reg.set_flags(SUBTRACT, false);
    reg.set_flags(HALF_CARRY, result & 0xf == 0);
    result
}

/// Decrements `value`, setting Z, N and H. C is untouched.
pub fn dec(reg: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    reg.set_flags(ZERO, result == 0);
    reg.set_flags(SUBTRACT, true);
    reg.set_flags(HALF_CARRY, value & 0xf == 0);
    result
}

/// Exclusive-ors `value` into A
pub fn xor(reg: &mut Registers, value: u8) {
    reg.a ^= value;
    reg.set_flags(ZERO, reg.a == 0);
    reg.set_flags(SUBTRACT | HALF_CARRY | CARRY, false);
}

/// Compares `value` against A, as if subtracting it
pub fn cp(reg: &mut Registers, value: u8) {
    let a = reg.a;
    reg.set_flags(ZERO, value == a);
    reg.set_flags(SUBTRACT, true);
    reg.set_flags(HALF_CARRY, value & 0xf > a & 0xf);
    reg.set_flags(CARRY, value > a);
}

/// |`04`| `INC r`
pub fn inc_r<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, R)?;
    let result = inc(reg, value);
    write_r8(bus, reg, R, result)
}

/// |`05`| `DEC r`
pub fn dec_r<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, R)?;
    let result = dec(reg, value);
    write_r8(bus, reg, R, result)
}

/// |`03`| `INC rr`: Register pairs wrap, but SP must stay in the address space
pub fn inc_rr<const RR: R16>(_: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = match RR {
        SP => offset(reg.sp, 1)?,
        _ => reg.r16(RR).wrapping_add(1),
    };
    reg.set_r16(RR, value);
    Ok(())
}

/// |`0b`| `DEC rr`: Register pairs wrap, but SP must stay in the address space
pub fn dec_rr<const RR: R16>(_: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = match RR {
        SP => offset(reg.sp, -1)?,
        _ => reg.r16(RR).wrapping_sub(1),
    };
    reg.set_r16(RR, value);
    Ok(())
}

/// |`a8`| `XOR r`
pub fn xor_r<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, R)?;
    xor(reg, value);
    Ok(())
}

/// |`ee`| `XOR d8`
pub fn xor_d8(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = imm8(bus, reg)?;
    xor(reg, value);
    Ok(())
}

/// |`b8`| `CP r`
pub fn cp_r<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, R)?;
    cp(reg, value);
    Ok(())
}

/// |`fe`| `CP d8`
pub fn cp_d8(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = imm8(bus, reg)?;
    cp(reg, value);
    Ok(())
}
