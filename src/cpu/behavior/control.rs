// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Control flow
//!
//! Anything that writes the program counter.
//!
//! |opcode| effect                                           |
//! |------|--------------------------------------------------|
//! |`18`  | `JR r8`       PC += signed offset                |
//! |`20`  | `JR cc,r8`    ...if the condition holds          |
//! |`c3`  | `JP a16`      PC = address                       |
//! |`c2`  | `JP cc,a16`   ...if the condition holds          |
//! |`e9`  | `JP HL`       PC = HL                            |
//! |`cd`  | `CALL a16`    Push the return address, then jump |
//! |`c4`  | `CALL cc,a16` ...if the condition holds          |
//! |`c9`  | `RET`         Pop PC                             |
//! |`c0`  | `RET cc`      ...if the condition holds          |

use super::{
    stack::{pop_word, push_word},
    *,
};
use crate::cpu::registers::{CARRY, ZERO};

/// Encodes a branch condition the way opcodes do
pub type Cond = u8;
/// Zero flag clear
pub const COND_NZ: Cond = 0;
/// Zero flag set
pub const COND_Z: Cond = 1;
/// Carry flag clear
pub const COND_NC: Cond = 2;
/// Carry flag set
pub const COND_C: Cond = 3;

/// Evaluates a branch condition against the flags
#[inline]
pub fn condition(reg: &Registers, cc: Cond) -> bool {
    match cc {
        COND_NZ => !reg.is_flag_set(ZERO),
        COND_Z => reg.is_flag_set(ZERO),
        COND_NC => !reg.is_flag_set(CARRY),
        _ => reg.is_flag_set(CARRY),
    }
}

/// Applies a signed offset to PC.
///
/// The sum is taken at full width; a target outside `0..=0xffff` is [Error::InvalidJump].
pub fn relative(pc: u16, offset: i8) -> Result<u16> {
    u16::try_from(pc as i32 + offset as i32).map_err(|_| Error::InvalidJump { pc, offset })
}

/// |`18`| `JR r8`
pub fn jr(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let offset = imm8(bus, reg)? as i8;
    reg.pc = relative(reg.pc, offset)?;
    Ok(())
}

/// |`20`| `JR cc,r8`: The offset is consumed whether or not the branch is taken
pub fn jr_cc<const CC: Cond>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let offset = imm8(bus, reg)? as i8;
    if condition(reg, CC) {
        reg.pc = relative(reg.pc, offset)?;
    }
    Ok(())
}

/// |`c3`| `JP a16`
pub fn jp(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.pc = imm16(bus, reg)?;
    Ok(())
}

/// |`c2`| `JP cc,a16`
pub fn jp_cc<const CC: Cond>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    if condition(reg, CC) {
        reg.pc = addr;
    }
    Ok(())
}

/// |`e9`| `JP HL`
pub fn jp_hl(_: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.pc = reg.hl();
    Ok(())
}

/// |`cd`| `CALL a16`: Pushes the address after the call, then jumps
pub fn call(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    let ret = reg.pc;
    push_word(bus, reg, ret)?;
    reg.pc = addr;
    Ok(())
}

/// |`c4`| `CALL cc,a16`
pub fn call_cc<const CC: Cond>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    if condition(reg, CC) {
        let ret = reg.pc;
        push_word(bus, reg, ret)?;
        reg.pc = addr;
    }
    Ok(())
}

/// |`c9`| `RET`
pub fn ret(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.pc = pop_word(bus, reg)?;
    Ok(())
}

/// |`c0`| `RET cc`: Does nothing at all when the condition fails
pub fn ret_cc<const CC: Cond>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    if condition(reg, CC) {
        reg.pc = pop_word(bus, reg)?;
    }
    Ok(())
}
