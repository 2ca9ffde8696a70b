// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The CPU-visible register file
//!
//! Eight byte registers and two word registers. Byte registers pair up
//! as `AF`, `BC`, `DE` and `HL`, with the first-named register in the high byte.

/// Zero flag: the last result was zero
pub const ZERO: u8 = 1 << 7;
/// Subtract flag: the last operation was a subtraction
pub const SUBTRACT: u8 = 1 << 6;
/// Half-carry flag: the last operation carried across the low nibble
pub const HALF_CARRY: u8 = 1 << 5;
/// Carry flag: the last operation carried out of the byte
pub const CARRY: u8 = 1 << 4;

/// The lower nibble of F does not exist
const FLAG_MASK: u8 = ZERO | SUBTRACT | HALF_CARRY | CARRY;

/// Indexes an 8-bit operand the way opcodes encode it.
///
/// Index [HL_IND] is the memory cell addressed by HL, which lives on the bus
/// rather than in the register file.
pub type R8 = usize;
/// B
pub const B: R8 = 0;
/// C
pub const C: R8 = 1;
/// D
pub const D: R8 = 2;
/// E
pub const E: R8 = 3;
/// H
pub const H: R8 = 4;
/// L
pub const L: R8 = 5;
/// (HL)
pub const HL_IND: R8 = 6;
/// A
pub const A: R8 = 7;

/// Indexes a 16-bit register pair the way opcodes encode it
pub type R16 = usize;
/// BC
pub const BC: R16 = 0;
/// DE
pub const DE: R16 = 1;
/// HL
pub const HL: R16 = 2;
/// SP, in load and arithmetic encodings
pub const SP: R16 = 3;
/// AF, in stack encodings
pub const AF: R16 = 3;

/// Represents the register file of the CPU
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// B
    pub b: u8,
    /// C
    pub c: u8,
    /// D
    pub d: u8,
    /// E
    pub e: u8,
    /// Flags. Only the upper nibble exists.
    pub f: u8,
    /// H
    pub h: u8,
    /// L
    pub l: u8,
    /// Stack pointer
    pub sp: u16,
    /// Program counter
    pub pc: u16,
}

#[inline(always)]
fn pair(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}

impl Registers {
    /// Constructs a zeroed register file
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every register, including F
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reads AF
    pub fn af(&self) -> u16 {
        pair(self.a, self.f)
    }
    /// Sets AF. The lower nibble of F always reads as zero.
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// let mut reg = Registers::new();
    /// reg.set_af(0x12ff);
    /// assert_eq!(0x12f0, reg.af());
    /// ```
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = f & FLAG_MASK;
    }
    /// Reads BC
    pub fn bc(&self) -> u16 {
        pair(self.b, self.c)
    }
    /// Sets BC
    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }
    /// Reads DE
    pub fn de(&self) -> u16 {
        pair(self.d, self.e)
    }
    /// Sets DE
    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }
    /// Reads HL
    pub fn hl(&self) -> u16 {
        pair(self.h, self.l)
    }
    /// Sets HL
    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    /// Sets every flag in `mask` to `value`, leaving the rest alone
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// use gbemu::cpu::registers::{CARRY, ZERO};
    /// let mut reg = Registers::new();
    /// reg.set_flags(ZERO | CARRY, true);
    /// assert_eq!(0x90, reg.f);
    /// reg.set_flags(ZERO, false);
    /// assert_eq!(0x10, reg.f);
    /// ```
    pub fn set_flags(&mut self, mask: u8, value: bool) {
        let mask = mask & FLAG_MASK;
        if value {
            self.f |= mask;
        } else {
            self.f &= !mask;
        }
    }

    /// Returns true if `flag` is set
    pub fn is_flag_set(&self, flag: u8) -> bool {
        self.f & flag != 0
    }

    /// Reads a byte register by its opcode index.
    ///
    /// [HL_IND] has no backing register, and reads as `None`.
    pub fn r8(&self, reg: R8) -> Option<u8> {
        Some(match reg {
            B => self.b,
            C => self.c,
            D => self.d,
            E => self.e,
            H => self.h,
            L => self.l,
            A => self.a,
            _ => return None,
        })
    }

    /// Writes a byte register by its opcode index, and reports whether it exists
    pub fn set_r8(&mut self, reg: R8, value: u8) -> bool {
        match reg {
            B => self.b = value,
            C => self.c = value,
            D => self.d = value,
            E => self.e = value,
            H => self.h = value,
            L => self.l = value,
            A => self.a = value,
            _ => return false,
        }
        true
    }

    /// Reads BC, DE, HL or SP by opcode index
    pub fn r16(&self, reg: R16) -> u16 {
        match reg {
            BC => self.bc(),
            DE => self.de(),
            HL => self.hl(),
            _ => self.sp,
        }
    }

    /// Writes BC, DE, HL or SP by opcode index
    pub fn set_r16(&mut self, reg: R16, value: u16) {
        match reg {
            BC => self.set_bc(value),
            DE => self.set_de(value),
            HL => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Reads BC, DE, HL or AF by stack opcode index
    pub fn r16_stack(&self, reg: R16) -> u16 {
        match reg {
            AF => self.af(),
            reg => self.r16(reg),
        }
    }

    /// Writes BC, DE, HL or AF by stack opcode index
    pub fn set_r16_stack(&mut self, reg: R16, value: u16) {
        match reg {
            AF => self.set_af(value),
            reg => self.set_r16(reg, value),
        }
    }
}
