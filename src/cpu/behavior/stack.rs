// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Stack operations
//!
//! The stack grows downward. SP points at the most recently pushed word.
//!
//! |opcode| effect                    |
//! |------|---------------------------|
//! |`c5`  | `PUSH rr` BC, DE, HL, AF  |
//! |`c1`  | `POP rr`  BC, DE, HL, AF  |

use super::*;
use crate::cpu::registers::R16;

/// Pre-decrements SP by 2, then writes `value` at the new SP
pub fn push_word(bus: &mut Bus, reg: &mut Registers, value: u16) -> Result<()> {
    reg.sp = offset(reg.sp, -2)?;
    bus.write_word(reg.sp, value)
}

/// Reads the word at SP, then increments SP by 2
pub fn pop_word(bus: &mut Bus, reg: &mut Registers) -> Result<u16> {
    let value = bus.read_word(reg.sp)?;
    reg.sp = offset(reg.sp, 2)?;
    Ok(value)
}

/// |`c5`| `PUSH rr`
pub fn push<const RR: R16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = reg.r16_stack(RR);
    push_word(bus, reg, value)
}

/// |`c1`| `POP rr`: Popping into AF drops the lower nibble of F
pub fn pop<const RR: R16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = pop_word(bus, reg)?;
    reg.set_r16_stack(RR, value);
    Ok(())
}
