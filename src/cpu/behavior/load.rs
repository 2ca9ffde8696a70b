// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Loads and stores
//!
//! |opcode| effect                                  |
//! |------|-----------------------------------------|
//! |`01`  | `LD rr,d16`  Load immediate word        |
//! |`02`  | `LD (rr),A`  Store A through BC or DE   |
//! |`06`  | `LD r,d8`    Load immediate byte        |
//! |`08`  | `LD (a16),SP`                           |
//! |`0a`  | `LD A,(rr)`  Load A through BC or DE    |
//! |`22`  | `LD (HL±),A` Store A through HL, step HL|
//! |`2a`  | `LD A,(HL±)` Load A through HL, step HL |
//! |`40`  | `LD r,r'`    Copy between operands      |
//! |`e0`  | `LDH (a8),A` Store A to `FF00 + a8`     |
//! |`e2`  | `LD (C),A`   Store A to `FF00 + C`      |
//! |`ea`  | `LD (a16),A`                            |
//! |`f0`  | `LDH A,(a8)`                            |
//! |`f2`  | `LD A,(C)`                              |
//! |`f9`  | `LD SP,HL`                              |
//! |`fa`  | `LD A,(a16)`                            |

use super::*;
use crate::cpu::registers::{R16, HL};

/// Base of the I/O page addressed by `LDH`
pub const IO_PAGE: u16 = 0xff00;

/// |`00`| Does nothing
pub fn nop(_: &mut Bus, _: &mut Registers) -> Result<()> {
    Ok(())
}

/// |`40`| `LD r,r'`: Copies operand SRC into operand DST
pub fn ld_r_r<const DST: R8, const SRC: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = read_r8(bus, reg, SRC)?;
    write_r8(bus, reg, DST, value)
}

/// |`06`| `LD r,d8`: Loads an immediate byte into operand R
pub fn ld_r_d8<const R: R8>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = imm8(bus, reg)?;
    write_r8(bus, reg, R, value)
}

/// |`01`| `LD rr,d16`: Loads an immediate word into a register pair or SP
pub fn ld_rr_d16<const RR: R16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let value = imm16(bus, reg)?;
    reg.set_r16(RR, value);
    Ok(())
}

/// |`02`| `LD (rr),A`: Stores A at the address in a register pair
pub fn ld_ind_a<const RR: R16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    bus.write_byte(reg.r16(RR), reg.a)
}

/// |`0a`| `LD A,(rr)`: Loads A from the address in a register pair
pub fn ld_a_ind<const RR: R16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.a = bus.read_byte(reg.r16(RR))?;
    Ok(())
}

/// |`22`| `LD (HL+),A` / `LD (HL-),A`: Stores A at `(HL)`, then steps HL by STEP
pub fn ld_hl_step_a<const STEP: i16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let hl = reg.r16(HL);
    bus.write_byte(hl, reg.a)?;
    reg.set_r16(HL, hl.wrapping_add_signed(STEP));
    Ok(())
}

/// |`2a`| `LD A,(HL+)` / `LD A,(HL-)`: Loads A from `(HL)`, then steps HL by STEP
pub fn ld_a_hl_step<const STEP: i16>(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let hl = reg.r16(HL);
    reg.a = bus.read_byte(hl)?;
    reg.set_r16(HL, hl.wrapping_add_signed(STEP));
    Ok(())
}

/// |`ea`| `LD (a16),A`
pub fn ld_a16_a(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    bus.write_byte(addr, reg.a)
}

/// |`fa`| `LD A,(a16)`
pub fn ld_a_a16(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    reg.a = bus.read_byte(addr)?;
    Ok(())
}

/// |`e0`| `LDH (a8),A`: Stores A into the I/O page
pub fn ldh_a8_a(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let port = imm8(bus, reg)?;
    bus.write_byte(IO_PAGE + port as u16, reg.a)
}

/// |`f0`| `LDH A,(a8)`: Loads A from the I/O page
pub fn ldh_a_a8(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let port = imm8(bus, reg)?;
    reg.a = bus.read_byte(IO_PAGE + port as u16)?;
    Ok(())
}

/// |`e2`| `LD (C),A`: Stores A into the I/O page, at offset C
pub fn ld_c_a(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    bus.write_byte(IO_PAGE + reg.c as u16, reg.a)
}

/// |`f2`| `LD A,(C)`: Loads A from the I/O page, at offset C
pub fn ld_a_c(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.a = bus.read_byte(IO_PAGE + reg.c as u16)?;
    Ok(())
}

/// |`08`| `LD (a16),SP`
pub fn ld_a16_sp(bus: &mut Bus, reg: &mut Registers) -> Result<()> {
    let addr = imm16(bus, reg)?;
    bus.write_word(addr, reg.sp)
}

/// |`f9`| `LD SP,HL`
pub fn ld_sp_hl(_: &mut Bus, reg: &mut Registers) -> Result<()> {
    reg.sp = reg.hl();
    Ok(())
}
