// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Contains the definition of an [Opcode], and the dispatch table which
//! maps each one to its [Instruction]

pub mod disassembler;

use super::{
    behavior::{
        alu, bits,
        control::{self, COND_C, COND_NC, COND_NZ, COND_Z},
        load, stack, Exec,
    },
    bus::Bus,
    registers::*,
};
use crate::error::Result;
use std::fmt::{Debug, Display, Formatter};

/// The byte which introduces a [Opcode::Prefixed] opcode
pub const PREFIX: u8 = 0xcb;

/// The numeric key of an instruction.
///
/// Plain and prefixed opcodes occupy disjoint keyspaces: a prefixed opcode's
/// key is `0xcb00 | second_byte`, which no plain opcode can collide with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opcode {
    /// A single-byte opcode
    Plain(u8),
    /// The byte following a [PREFIX] byte
    Prefixed(u8),
}

impl Opcode {
    /// Gets the 16-bit dispatch key
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// assert_eq!(0x0021, Opcode::Plain(0x21).key());
    /// assert_eq!(0xcb7c, Opcode::Prefixed(0x7c).key());
    /// ```
    pub fn key(self) -> u16 {
        match self {
            Opcode::Plain(op) => op as u16,
            Opcode::Prefixed(op) => u16::from_be_bytes([PREFIX, op]),
        }
    }

    /// Number of bytes the opcode itself occupies
    pub fn width(self) -> u16 {
        match self {
            Opcode::Plain(_) => 1,
            Opcode::Prefixed(_) => 2,
        }
    }

    /// Looks up this opcode in the dispatch table
    pub fn instruction(self) -> Option<Instruction> {
        lookup(self)
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Opcode::Plain(_) => write!(f, "0x{:02X}", self.key()),
            Opcode::Prefixed(_) => write!(f, "0x{:04X}", self.key()),
        }
    }
}

/// A named instruction
#[derive(Clone, Copy)]
pub struct Instruction {
    name: &'static str,
    operands: u8,
    exec: Exec,
}

impl Instruction {
    /// The mnemonic, e.g. `LD HL,d16`
    pub fn name(&self) -> &'static str {
        self.name
    }
    /// Number of immediate operand bytes following the opcode
    pub fn operands(&self) -> u8 {
        self.operands
    }
    /// Runs the instruction. PC must already point past the opcode.
    #[inline(always)]
    pub fn execute(&self, bus: &mut Bus, reg: &mut Registers) -> Result<()> {
        (self.exec)(bus, reg)
    }
}

impl Debug for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("name", &self.name)
            .field("operands", &self.operands)
            .finish_non_exhaustive()
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

fn insn(name: &'static str, operands: u8, exec: Exec) -> Instruction {
    Instruction {
        name,
        operands,
        exec,
    }
}

/// The dispatch table. Returns [None] for opcodes with no instruction.
#[rustfmt::skip]
pub fn lookup(opcode: Opcode) -> Option<Instruction> {
    use Opcode::*;
    Some(match opcode {
        Plain(0x00) => insn("NOP", 0, load::nop),
        Plain(0x01) => insn("LD BC,d16", 2, load::ld_rr_d16::<BC>),
        Plain(0x02) => insn("LD (BC),A", 0, load::ld_ind_a::<BC>),
        Plain(0x03) => insn("INC BC", 0, alu::inc_rr::<BC>),
        Plain(0x04) => insn("INC B", 0, alu::inc_r::<B>),
        Plain(0x05) => insn("DEC B", 0, alu::dec_r::<B>),
        Plain(0x06) => insn("LD B,d8", 1, load::ld_r_d8::<B>),
        Plain(0x07) => insn("RLCA", 0, bits::rlca),
        Plain(0x08) => insn("LD (a16),SP", 2, load::ld_a16_sp),
        Plain(0x0a) => insn("LD A,(BC)", 0, load::ld_a_ind::<BC>),
        Plain(0x0b) => insn("DEC BC", 0, alu::dec_rr::<BC>),
        Plain(0x0c) => insn("INC C", 0, alu::inc_r::<C>),
        Plain(0x0d) => insn("DEC C", 0, alu::dec_r::<C>),
        Plain(0x0e) => insn("LD C,d8", 1, load::ld_r_d8::<C>),
        Plain(0x0f) => insn("RRCA", 0, bits::rrca),
        Plain(0x11) => insn("LD DE,d16", 2, load::ld_rr_d16::<DE>),
        Plain(0x12) => insn("LD (DE),A", 0, load::ld_ind_a::<DE>),
        Plain(0x13) => insn("INC DE", 0, alu::inc_rr::<DE>),
        Plain(0x14) => insn("INC D", 0, alu::inc_r::<D>),
        Plain(0x15) => insn("DEC D", 0, alu::dec_r::<D>),
        Plain(0x16) => insn("LD D,d8", 1, load::ld_r_d8::<D>),
        Plain(0x17) => insn("RLA", 0, bits::rla),
        Plain(0x18) => insn("JR r8", 1, control::jr),
        Plain(0x1a) => insn("LD A,(DE)", 0, load::ld_a_ind::<DE>),
        Plain(0x1b) => insn("DEC DE", 0, alu::dec_rr::<DE>),
        Plain(0x1c) => insn("INC E", 0, alu::inc_r::<E>),
        Plain(0x1d) => insn("DEC E", 0, alu::dec_r::<E>),
        Plain(0x1e) => insn("LD E,d8", 1, load::ld_r_d8::<E>),
        Plain(0x1f) => insn("RRA", 0, bits::rra),
        Plain(0x20) => insn("JR NZ,r8", 1, control::jr_cc::<COND_NZ>),
        Plain(0x21) => insn("LD HL,d16", 2, load::ld_rr_d16::<HL>),
        Plain(0x22) => insn("LD (HL+),A", 0, load::ld_hl_step_a::<1>),
        Plain(0x23) => insn("INC HL", 0, alu::inc_rr::<HL>),
        Plain(0x24) => insn("INC H", 0, alu::inc_r::<H>),
        Plain(0x25) => insn("DEC H", 0, alu::dec_r::<H>),
        Plain(0x26) => insn("LD H,d8", 1, load::ld_r_d8::<H>),
        Plain(0x28) => insn("JR Z,r8", 1, control::jr_cc::<COND_Z>),
        Plain(0x2a) => insn("LD A,(HL+)", 0, load::ld_a_hl_step::<1>),
        Plain(0x2b) => insn("DEC HL", 0, alu::dec_rr::<HL>),
        Plain(0x2c) => insn("INC L", 0, alu::inc_r::<L>),
        Plain(0x2d) => insn("DEC L", 0, alu::dec_r::<L>),
        Plain(0x2e) => insn("LD L,d8", 1, load::ld_r_d8::<L>),
        Plain(0x30) => insn("JR NC,r8", 1, control::jr_cc::<COND_NC>),
        Plain(0x31) => insn("LD SP,d16", 2, load::ld_rr_d16::<SP>),
        Plain(0x32) => insn("LD (HL-),A", 0, load::ld_hl_step_a::<{ -1 }>),
        Plain(0x33) => insn("INC SP", 0, alu::inc_rr::<SP>),
        Plain(0x34) => insn("INC (HL)", 0, alu::inc_r::<HL_IND>),
        Plain(0x35) => insn("DEC (HL)", 0, alu::dec_r::<HL_IND>),
        Plain(0x36) => insn("LD (HL),d8", 1, load::ld_r_d8::<HL_IND>),
        Plain(0x38) => insn("JR C,r8", 1, control::jr_cc::<COND_C>),
        Plain(0x3a) => insn("LD A,(HL-)", 0, load::ld_a_hl_step::<{ -1 }>),
        Plain(0x3b) => insn("DEC SP", 0, alu::dec_rr::<SP>),
        Plain(0x3c) => insn("INC A", 0, alu::inc_r::<A>),
        Plain(0x3d) => insn("DEC A", 0, alu::dec_r::<A>),
        Plain(0x3e) => insn("LD A,d8", 1, load::ld_r_d8::<A>),
        Plain(0x40) => insn("LD B,B", 0, load::ld_r_r::<B, B>),
        Plain(0x41) => insn("LD B,C", 0, load::ld_r_r::<B, C>),
        Plain(0x42) => insn("LD B,D", 0, load::ld_r_r::<B, D>),
        Plain(0x43) => insn("LD B,E", 0, load::ld_r_r::<B, E>),
        Plain(0x44) => insn("LD B,H", 0, load::ld_r_r::<B, H>),
        Plain(0x45) => insn("LD B,L", 0, load::ld_r_r::<B, L>),
        Plain(0x46) => insn("LD B,(HL)", 0, load::ld_r_r::<B, HL_IND>),
        Plain(0x47) => insn("LD B,A", 0, load::ld_r_r::<B, A>),
        Plain(0x48) => insn("LD C,B", 0, load::ld_r_r::<C, B>),
        Plain(0x49) => insn("LD C,C", 0, load::ld_r_r::<C, C>),
        Plain(0x4a) => insn("LD C,D", 0, load::ld_r_r::<C, D>),
        Plain(0x4b) => insn("LD C,E", 0, load::ld_r_r::<C, E>),
        Plain(0x4c) => insn("LD C,H", 0, load::ld_r_r::<C, H>),
        Plain(0x4d) => insn("LD C,L", 0, load::ld_r_r::<C, L>),
        Plain(0x4e) => insn("LD C,(HL)", 0, load::ld_r_r::<C, HL_IND>),
        Plain(0x4f) => insn("LD C,A", 0, load::ld_r_r::<C, A>),
        Plain(0x50) => insn("LD D,B", 0, load::ld_r_r::<D, B>),
        Plain(0x51) => insn("LD D,C", 0, load::ld_r_r::<D, C>),
        Plain(0x52) => insn("LD D,D", 0, load::ld_r_r::<D, D>),
        Plain(0x53) => insn("LD D,E", 0, load::ld_r_r::<D, E>),
        Plain(0x54) => insn("LD D,H", 0, load::ld_r_r::<D, H>),
        Plain(0x55) => insn("LD D,L", 0, load::ld_r_r::<D, L>),
        Plain(0x56) => insn("LD D,(HL)", 0, load::ld_r_r::<D, HL_IND>),
        Plain(0x57) => insn("LD D,A", 0, load::ld_r_r::<D, A>),
        Plain(0x58) => insn("LD E,B", 0, load::ld_r_r::<E, B>),
        Plain(0x59) => insn("LD E,C", 0, load::ld_r_r::<E, C>),
        Plain(0x5a) => insn("LD E,D", 0, load::ld_r_r::<E, D>),
        Plain(0x5b) => insn("LD E,E", 0, load::ld_r_r::<E, E>),
        Plain(0x5c) => insn("LD E,H", 0, load::ld_r_r::<E, H>),
        Plain(0x5d) => insn("LD E,L", 0, load::ld_r_r::<E, L>),
        Plain(0x5e) => insn("LD E,(HL)", 0, load::ld_r_r::<E, HL_IND>),
        Plain(0x5f) => insn("LD E,A", 0, load::ld_r_r::<E, A>),
        Plain(0x60) => insn("LD H,B", 0, load::ld_r_r::<H, B>),
        Plain(0x61) => insn("LD H,C", 0, load::ld_r_r::<H, C>),
        Plain(0x62) => insn("LD H,D", 0, load::ld_r_r::<H, D>),
        Plain(0x63) => insn("LD H,E", 0, load::ld_r_r::<H, E>),
        Plain(0x64) => insn("LD H,H", 0, load::ld_r_r::<H, H>),
        Plain(0x65) => insn("LD H,L", 0, load::ld_r_r::<H, L>),
        Plain(0x66) => insn("LD H,(HL)", 0, load::ld_r_r::<H, HL_IND>),
        Plain(0x67) => insn("LD H,A", 0, load::ld_r_r::<H, A>),
        Plain(0x68) => insn("LD L,B", 0, load::ld_r_r::<L, B>),
        Plain(0x69) => insn("LD L,C", 0, load::ld_r_r::<L, C>),
        Plain(0x6a) => insn("LD L,D", 0, load::ld_r_r::<L, D>),
        Plain(0x6b) => insn("LD L,E", 0, load::ld_r_r::<L, E>),
        Plain(0x6c) => insn("LD L,H", 0, load::ld_r_r::<L, H>),
        Plain(0x6d) => insn("LD L,L", 0, load::ld_r_r::<L, L>),
        Plain(0x6e) => insn("LD L,(HL)", 0, load::ld_r_r::<L, HL_IND>),
        Plain(0x6f) => insn("LD L,A", 0, load::ld_r_r::<L, A>),
        Plain(0x70) => insn("LD (HL),B", 0, load::ld_r_r::<HL_IND, B>),
        Plain(0x71) => insn("LD (HL),C", 0, load::ld_r_r::<HL_IND, C>),
        Plain(0x72) => insn("LD (HL),D", 0, load::ld_r_r::<HL_IND, D>),
        Plain(0x73) => insn("LD (HL),E", 0, load::ld_r_r::<HL_IND, E>),
        Plain(0x74) => insn("LD (HL),H", 0, load::ld_r_r::<HL_IND, H>),
        Plain(0x75) => insn("LD (HL),L", 0, load::ld_r_r::<HL_IND, L>),
        Plain(0x77) => insn("LD (HL),A", 0, load::ld_r_r::<HL_IND, A>),
        Plain(0x78) => insn("LD A,B", 0, load::ld_r_r::<A, B>),
        Plain(0x79) => insn("LD A,C", 0, load::ld_r_r::<A, C>),
        Plain(0x7a) => insn("LD A,D", 0, load::ld_r_r::<A, D>),
        Plain(0x7b) => insn("LD A,E", 0, load::ld_r_r::<A, E>),
        Plain(0x7c) => insn("LD A,H", 0, load::ld_r_r::<A, H>),
        Plain(0x7d) => insn("LD A,L", 0, load::ld_r_r::<A, L>),
        Plain(0x7e) => insn("LD A,(HL)", 0, load::ld_r_r::<A, HL_IND>),
        Plain(0x7f) => insn("LD A,A", 0, load::ld_r_r::<A, A>),
        Plain(0xa8) => insn("XOR B", 0, alu::xor_r::<B>),
        Plain(0xa9) => insn("XOR C", 0, alu::xor_r::<C>),
        Plain(0xaa) => insn("XOR D", 0, alu::xor_r::<D>),
        Plain(0xab) => insn("XOR E", 0, alu::xor_r::<E>),
        Plain(0xac) => insn("XOR H", 0, alu::xor_r::<H>),
        Plain(0xad) => insn("XOR L", 0, alu::xor_r::<L>),
        Plain(0xae) => insn("XOR (HL)", 0, alu::xor_r::<HL_IND>),
        Plain(0xaf) => insn("XOR A", 0, alu::xor_r::<A>),
        Plain(0xb8) => insn("CP B", 0, alu::cp_r::<B>),
        Plain(0xb9) => insn("CP C", 0, alu::cp_r::<C>),
        Plain(0xba) => insn("CP D", 0, alu::cp_r::<D>),
        Plain(0xbb) => insn("CP E", 0, alu::cp_r::<E>),
        Plain(0xbc) => insn("CP H", 0, alu::cp_r::<H>),
        Plain(0xbd) => insn("CP L", 0, alu::cp_r::<L>),
        Plain(0xbe) => insn("CP (HL)", 0, alu::cp_r::<HL_IND>),
        Plain(0xbf) => insn("CP A", 0, alu::cp_r::<A>),
        Plain(0xc0) => insn("RET NZ", 0, control::ret_cc::<COND_NZ>),
        Plain(0xc1) => insn("POP BC", 0, stack::pop::<BC>),
        Plain(0xc2) => insn("JP NZ,a16", 2, control::jp_cc::<COND_NZ>),
        Plain(0xc3) => insn("JP a16", 2, control::jp),
        Plain(0xc4) => insn("CALL NZ,a16", 2, control::call_cc::<COND_NZ>),
        Plain(0xc5) => insn("PUSH BC", 0, stack::push::<BC>),
        Plain(0xc8) => insn("RET Z", 0, control::ret_cc::<COND_Z>),
        Plain(0xc9) => insn("RET", 0, control::ret),
        Plain(0xca) => insn("JP Z,a16", 2, control::jp_cc::<COND_Z>),
        Plain(0xcc) => insn("CALL Z,a16", 2, control::call_cc::<COND_Z>),
        Plain(0xcd) => insn("CALL a16", 2, control::call),
        Plain(0xd0) => insn("RET NC", 0, control::ret_cc::<COND_NC>),
        Plain(0xd1) => insn("POP DE", 0, stack::pop::<DE>),
        Plain(0xd2) => insn("JP NC,a16", 2, control::jp_cc::<COND_NC>),
        Plain(0xd4) => insn("CALL NC,a16", 2, control::call_cc::<COND_NC>),
        Plain(0xd5) => insn("PUSH DE", 0, stack::push::<DE>),
        Plain(0xd8) => insn("RET C", 0, control::ret_cc::<COND_C>),
        Plain(0xda) => insn("JP C,a16", 2, control::jp_cc::<COND_C>),
        Plain(0xdc) => insn("CALL C,a16", 2, control::call_cc::<COND_C>),
        Plain(0xe0) => insn("LDH (a8),A", 1, load::ldh_a8_a),
        Plain(0xe1) => insn("POP HL", 0, stack::pop::<HL>),
        Plain(0xe2) => insn("LD (C),A", 0, load::ld_c_a),
        Plain(0xe5) => insn("PUSH HL", 0, stack::push::<HL>),
        Plain(0xe9) => insn("JP HL", 0, control::jp_hl),
        Plain(0xea) => insn("LD (a16),A", 2, load::ld_a16_a),
        Plain(0xee) => insn("XOR d8", 1, alu::xor_d8),
        Plain(0xf0) => insn("LDH A,(a8)", 1, load::ldh_a_a8),
        Plain(0xf1) => insn("POP AF", 0, stack::pop::<AF>),
        Plain(0xf2) => insn("LD A,(C)", 0, load::ld_a_c),
        Plain(0xf5) => insn("PUSH AF", 0, stack::push::<AF>),
        Plain(0xf9) => insn("LD SP,HL", 0, load::ld_sp_hl),
        Plain(0xfa) => insn("LD A,(a16)", 2, load::ld_a_a16),
        Plain(0xfe) => insn("CP d8", 1, alu::cp_d8),

        Prefixed(0x00) => insn("RLC B", 0, bits::rlc_r::<B>),
        Prefixed(0x01) => insn("RLC C", 0, bits::rlc_r::<C>),
        Prefixed(0x02) => insn("RLC D", 0, bits::rlc_r::<D>),
        Prefixed(0x03) => insn("RLC E", 0, bits::rlc_r::<E>),
        Prefixed(0x04) => insn("RLC H", 0, bits::rlc_r::<H>),
        Prefixed(0x05) => insn("RLC L", 0, bits::rlc_r::<L>),
        Prefixed(0x06) => insn("RLC (HL)", 0, bits::rlc_r::<HL_IND>),
        Prefixed(0x07) => insn("RLC A", 0, bits::rlc_r::<A>),
        Prefixed(0x08) => insn("RRC B", 0, bits::rrc_r::<B>),
        Prefixed(0x09) => insn("RRC C", 0, bits::rrc_r::<C>),
        Prefixed(0x0a) => insn("RRC D", 0, bits::rrc_r::<D>),
        Prefixed(0x0b) => insn("RRC E", 0, bits::rrc_r::<E>),
        Prefixed(0x0c) => insn("RRC H", 0, bits::rrc_r::<H>),
        Prefixed(0x0d) => insn("RRC L", 0, bits::rrc_r::<L>),
        Prefixed(0x0e) => insn("RRC (HL)", 0, bits::rrc_r::<HL_IND>),
        Prefixed(0x0f) => insn("RRC A", 0, bits::rrc_r::<A>),
        Prefixed(0x10) => insn("RL B", 0, bits::rl_r::<B>),
        Prefixed(0x11) => insn("RL C", 0, bits::rl_r::<C>),
        Prefixed(0x12) => insn("RL D", 0, bits::rl_r::<D>),
        Prefixed(0x13) => insn("RL E", 0, bits::rl_r::<E>),
        Prefixed(0x14) => insn("RL H", 0, bits::rl_r::<H>),
        Prefixed(0x15) => insn("RL L", 0, bits::rl_r::<L>),
        Prefixed(0x16) => insn("RL (HL)", 0, bits::rl_r::<HL_IND>),
        Prefixed(0x17) => insn("RL A", 0, bits::rl_r::<A>),
        Prefixed(0x18) => insn("RR B", 0, bits::rr_r::<B>),
        Prefixed(0x19) => insn("RR C", 0, bits::rr_r::<C>),
        Prefixed(0x1a) => insn("RR D", 0, bits::rr_r::<D>),
        Prefixed(0x1b) => insn("RR E", 0, bits::rr_r::<E>),
        Prefixed(0x1c) => insn("RR H", 0, bits::rr_r::<H>),
        Prefixed(0x1d) => insn("RR L", 0, bits::rr_r::<L>),
        Prefixed(0x1e) => insn("RR (HL)", 0, bits::rr_r::<HL_IND>),
        Prefixed(0x1f) => insn("RR A", 0, bits::rr_r::<A>),
        Prefixed(0x40) => insn("BIT 0,B", 0, bits::bit_r::<0, B>),
        Prefixed(0x41) => insn("BIT 0,C", 0, bits::bit_r::<0, C>),
        Prefixed(0x42) => insn("BIT 0,D", 0, bits::bit_r::<0, D>),
        Prefixed(0x43) => insn("BIT 0,E", 0, bits::bit_r::<0, E>),
        Prefixed(0x44) => insn("BIT 0,H", 0, bits::bit_r::<0, H>),
        Prefixed(0x45) => insn("BIT 0,L", 0, bits::bit_r::<0, L>),
        Prefixed(0x46) => insn("BIT 0,(HL)", 0, bits::bit_r::<0, HL_IND>),
        Prefixed(0x47) => insn("BIT 0,A", 0, bits::bit_r::<0, A>),
        Prefixed(0x48) => insn("BIT 1,B", 0, bits::bit_r::<1, B>),
        Prefixed(0x49) => insn("BIT 1,C", 0, bits::bit_r::<1, C>),
        Prefixed(0x4a) => insn("BIT 1,D", 0, bits::bit_r::<1, D>),
        Prefixed(0x4b) => insn("BIT 1,E", 0, bits::bit_r::<1, E>),
        Prefixed(0x4c) => insn("BIT 1,H", 0, bits::bit_r::<1, H>),
        Prefixed(0x4d) => insn("BIT 1,L", 0, bits::bit_r::<1, L>),
        Prefixed(0x4e) => insn("BIT 1,(HL)", 0, bits::bit_r::<1, HL_IND>),
        Prefixed(0x4f) => insn("BIT 1,A", 0, bits::bit_r::<1, A>),
        Prefixed(0x50) => insn("BIT 2,B", 0, bits::bit_r::<2, B>),
        Prefixed(0x51) => insn("BIT 2,C", 0, bits::bit_r::<2, C>),
        Prefixed(0x52) => insn("BIT 2,D", 0, bits::bit_r::<2, D>),
        Prefixed(0x53) => insn("BIT 2,E", 0, bits::bit_r::<2, E>),
        Prefixed(0x54) => insn("BIT 2,H", 0, bits::bit_r::<2, H>),
        Prefixed(0x55) => insn("BIT 2,L", 0, bits::bit_r::<2, L>),
        Prefixed(0x56) => insn("BIT 2,(HL)", 0, bits::bit_r::<2, HL_IND>),
        Prefixed(0x57) => insn("BIT 2,A", 0, bits::bit_r::<2, A>),
        Prefixed(0x58) => insn("BIT 3,B", 0, bits::bit_r::<3, B>),
        Prefixed(0x59) => insn("BIT 3,C", 0, bits::bit_r::<3, C>),
        Prefixed(0x5a) => insn("BIT 3,D", 0, bits::bit_r::<3, D>),
        Prefixed(0x5b) => insn("BIT 3,E", 0, bits::bit_r::<3, E>),
        Prefixed(0x5c) => insn("BIT 3,H", 0, bits::bit_r::<3, H>),
        Prefixed(0x5d) => insn("BIT 3,L", 0, bits::bit_r::<3, L>),
        Prefixed(0x5e) => insn("BIT 3,(HL)", 0, bits::bit_r::<3, HL_IND>),
        Prefixed(0x5f) => insn("BIT 3,A", 0, bits::bit_r::<3, A>),
        Prefixed(0x60) => insn("BIT 4,B", 0, bits::bit_r::<4, B>),
        Prefixed(0x61) => insn("BIT 4,C", 0, bits::bit_r::<4, C>),
        Prefixed(0x62) => insn("BIT 4,D", 0, bits::bit_r::<4, D>),
        Prefixed(0x63) => insn("BIT 4,E", 0, bits::bit_r::<4, E>),
        Prefixed(0x64) => insn("BIT 4,H", 0, bits::bit_r::<4, H>),
        Prefixed(0x65) => insn("BIT 4,L", 0, bits::bit_r::<4, L>),
        Prefixed(0x66) => insn("BIT 4,(HL)", 0, bits::bit_r::<4, HL_IND>),
        Prefixed(0x67) => insn("BIT 4,A", 0, bits::bit_r::<4, A>),
        Prefixed(0x68) => insn("BIT 5,B", 0, bits::bit_r::<5, B>),
        Prefixed(0x69) => insn("BIT 5,C", 0, bits::bit_r::<5, C>),
        Prefixed(0x6a) => insn("BIT 5,D", 0, bits::bit_r::<5, D>),
        Prefixed(0x6b) => insn("BIT 5,E", 0, bits::bit_r::<5, E>),
        Prefixed(0x6c) => insn("BIT 5,H", 0, bits::bit_r::<5, H>),
        Prefixed(0x6d) => insn("BIT 5,L", 0, bits::bit_r::<5, L>),
        Prefixed(0x6e) => insn("BIT 5,(HL)", 0, bits::bit_r::<5, HL_IND>),
        Prefixed(0x6f) => insn("BIT 5,A", 0, bits::bit_r::<5, A>),
        Prefixed(0x70) => insn("BIT 6,B", 0, bits::bit_r::<6, B>),
        Prefixed(0x71) => insn("BIT 6,C", 0, bits::bit_r::<6, C>),
        Prefixed(0x72) => insn("BIT 6,D", 0, bits::bit_r::<6, D>),
        Prefixed(0x73) => insn("BIT 6,E", 0, bits::bit_r::<6, E>),
        Prefixed(0x74) => insn("BIT 6,H", 0, bits::bit_r::<6, H>),
        Prefixed(0x75) => insn("BIT 6,L", 0, bits::bit_r::<6, L>),
        Prefixed(0x76) => insn("BIT 6,(HL)", 0, bits::bit_r::<6, HL_IND>),
        Prefixed(0x77) => insn("BIT 6,A", 0, bits::bit_r::<6, A>),
        Prefixed(0x78) => insn("BIT 7,B", 0, bits::bit_r::<7, B>),
        Prefixed(0x79) => insn("BIT 7,C", 0, bits::bit_r::<7, C>),
        Prefixed(0x7a) => insn("BIT 7,D", 0, bits::bit_r::<7, D>),
        Prefixed(0x7b) => insn("BIT 7,E", 0, bits::bit_r::<7, E>),
        Prefixed(0x7c) => insn("BIT 7,H", 0, bits::bit_r::<7, H>),
        Prefixed(0x7d) => insn("BIT 7,L", 0, bits::bit_r::<7, L>),
        Prefixed(0x7e) => insn("BIT 7,(HL)", 0, bits::bit_r::<7, HL_IND>),
        Prefixed(0x7f) => insn("BIT 7,A", 0, bits::bit_r::<7, A>),

        _ => return None,
    })
}
