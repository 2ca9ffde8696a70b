// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Rotates and single-bit tests
//!
//! |opcode| effect                                             |
//! |------|----------------------------------------------------|
//! |`07`  | `RLCA`                                             |
//! |`0f`  | `RRCA`                                             |
//! |`17`  | `RLA`                                              |
//! |`1f`  | `RRA`                                              |
//! |`cb00`| `RLC r`   Rotate left, bit 7 into bit 0 and C      |
//! |`cb08`| `RRC r`   Rotate right, bit 0 into bit 7 and C     |
//! |`cb10`| `RL r`    Rotate left through C                    |
//! |`cb18`| `RR r`    Rotate right through C                   |
//! |`cb40`| `BIT b,r` Z = !r[b], N = 0, H = 1                  |
//!
//! The accumulator forms behave like their prefixed twins on A,
//! except that they always clear Z.

use super::*;
use crate::cpu::registers::{CARRY, HALF_CARRY, SUBTRACT, ZERO};

/// Sets the flags shared by every rotate
#[inline]
fn rotated(reg: &mut Registers, result: u8, carry: bool) -> u8 {
    reg.set_flags(ZERO, result == 0);
    reg.set_flags(SUBTRACT | HALF_CARRY, false);
    reg.set_flags(CARRY, carry);
    result
}

/// Rotates left; bit 7 lands in bit 0 and in C
pub fn rlc(reg: &mut Registers, value: u8) -> u8 {
    rotated(reg, value.rotate_left(1), value & 0x80 != 0)
}

/// Rotates right; bit 0 lands in bit 7 and in C
pub fn rrc(reg: &mut Registers, value: u8) -> u8 {
    rotated(reg, value.rotate_right(1), value & 0x01 != 0)
}

/// Rotates left through C; the old C fills bit 0
pub fn rl(reg: &mut Registers, value: u8) -> u8 {
    let carry_in = reg.is_flag_set(CARRY) as u8;
    rotated(reg, value << 1 | carry_in, value & 0x80 != 0)
}

/// Rotates right through C; the old C fills bit 7
pub fn rr(reg: &mut Registers, value: u8) -> u8 {
    let carry_in = reg.is_flag_set(CARRY) as u8;
    rotated(reg, value >> 1 | carry_in << 7, value & 0x01 != 0)
}

/// Tests bit `bit` of `value`. Only the flags change.
pub fn bit(reg: &mut Registers, bit: u8, value: u8) {
    reg.set_flags(ZERO, value & (1 << bit) == 0);
    reg.set_flags(SUBTRACT, false);
    reg.set_flags(HALF_CARRY, true);
}

macro_rules! rotate_ops {
    ($($(#[$doc:meta])* $name:ident, $acc:ident => $op:ident;)*) => {$(
        $(#[$doc])*
        pub fn $name<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
            let value = read_r8(bus, reg, R)?;
            let result = $op(reg, value);
            write_r8(bus, reg, R, result)
        }
        #[doc = concat!("Accumulator form of [", stringify!($name), "]; Z is always cleared")]
        pub fn $acc(_: &mut Bus, reg: &mut Registers) -> Result<()> {
            let value = reg.a;
            reg.a = $op(reg, value);
            reg.set_flags(ZERO, false);
            Ok(())
        }
    )*};
}

rotate_ops! {
    /// |`cb00`| `RLC r`
    rlc_r, rlca => rlc;
    /// |`cb08`| `RRC r`
    rrc_r, rrca => rrc;
    /// |`cb10`| `RL r`
    rl_r, rla => rl;
    /// |`cb18`| `RR r`
    rr_r, rra => rr;
}

/// |`cb40`| `BIT b,r`
pub fn bit_r<const BIT: u8, const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, R)?;
    bit(reg, BIT, value);
    Ok(())
}
