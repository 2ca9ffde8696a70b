// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Unit tests for [super::CPU]
//!
//! These run instructions, and ensure their output is consistent with previous builds
//!
//! General test format:
//! 1. Prepare to do the thing
//! 2. Do the thing
//! 3. Compare the result to the expected result

use super::*;
use crate::{bus, cpu::registers::*};
use rand::random;


/// Loads `program` as the boot ROM, at address 0
fn setup_environment(program: &[u8]) -> CPU {
    CPU::with_bus(
        bus! { BootRom = program }.expect("Test program should fit in the boot ROM"),
        ControlFlags::default(),
    )
}

/// Runs `steps` instructions of `program`, after letting `setup` prepare the CPU
fn run(program: &[u8], steps: usize, setup: impl FnOnce(&mut CPU)) -> CPU {
    let mut cpu = setup_environment(program);
    setup(&mut cpu);
    for _ in 0..steps {
        cpu.step().expect("Test program should run without error");
    }
    cpu
}

/// Runs one instruction of `program`, which is expected to fail
fn fail(program: &[u8], setup: impl FnOnce(&mut CPU)) -> (CPU, Error) {
    let mut cpu = setup_environment(program);
    setup(&mut cpu);
    let err = cpu.step().expect_err("Test program should fail");
    (cpu, err)
}

mod load {
    use super::*;

    /// 40-7f: LD r,r'
    #[test]
    fn ld_r_r() {
        for dst in [B, C, D, E, H, L, A] {
            for src in [B, C, D, E, H, L, A] {
                let value = random::<u8>();
                let op = 0x40 | (dst as u8) << 3 | src as u8;
                let cpu = run(&[op], 1, |cpu| {
                    cpu.reg.set_r8(src, value);
                });
                assert_eq!(Some(value), cpu.reg.r8(dst), "{op:02x}");
                assert_eq!(1, cpu.pc());
            }
        }
    }

    /// 46, 70: LD r,(HL) and LD (HL),r
    #[test]
    fn ld_through_hl() {
        let cpu = run(&[0x70, 0x4e], 2, |cpu| {
            cpu.reg.set_hl(0x8123);
            cpu.reg.b = 0x5a;
        });
        assert_eq!(0x5a, cpu.bus.read_byte(0x8123).unwrap());
        assert_eq!(0x5a, cpu.reg.c);
    }

    /// 06, 36: LD r,d8
    #[test]
    fn ld_r_d8() {
        let cpu = run(&[0x06, 0x42, 0x3e, 0x99, 0x36, 0x77], 3, |cpu| {
            cpu.reg.set_hl(0x9fff);
        });
        assert_eq!(0x42, cpu.reg.b);
        assert_eq!(0x99, cpu.reg.a);
        assert_eq!(0x77, cpu.bus.read_byte(0x9fff).unwrap());
        assert_eq!(6, cpu.pc());
    }

    /// 01, 11, 21, 31: LD rr,d16
    #[test]
    fn ld_rr_d16() {
        let cpu = run(
            &[
                0x01, 0x34, 0x12, // ld bc, 1234
                0x11, 0x78, 0x56, // ld de, 5678
                0x21, 0xbc, 0x9a, // ld hl, 9abc
                0x31, 0xfe, 0xff, // ld sp, fffe
            ],
            4,
            |_| {},
        );
        assert_eq!(0x1234, cpu.reg.bc());
        assert_eq!(0x5678, cpu.reg.de());
        assert_eq!(0x9abc, cpu.reg.hl());
        assert_eq!(0xfffe, cpu.reg.sp);
        assert_eq!(12, cpu.pc());
    }

    /// 02, 12, 0a, 1a: indirect loads through BC and DE
    #[test]
    fn ld_indirect() {
        let cpu = run(&[0x02, 0x1a], 2, |cpu| {
            cpu.reg.set_bc(0x8000);
            cpu.reg.set_de(0xff80);
            cpu.reg.a = 0xa5;
            cpu.bus.write_byte(0xff80, 0x3c).unwrap();
        });
        assert_eq!(0xa5, cpu.bus.read_byte(0x8000).unwrap());
        assert_eq!(0x3c, cpu.reg.a);
    }

    /// 22, 32: LD (HL+),A and LD (HL-),A
    #[test]
    fn ld_hl_step_a() {
        let cpu = run(&[0x32, 0x32, 0x22], 3, |cpu| {
            cpu.reg.set_hl(0x9fff);
            cpu.reg.a = 0xee;
        });
        assert_eq!(0xee, cpu.bus.read_byte(0x9fff).unwrap());
        assert_eq!(0xee, cpu.bus.read_byte(0x9ffe).unwrap());
        assert_eq!(0x9ffe, cpu.reg.hl());
    }

    /// 2a, 3a: LD A,(HL+) and LD A,(HL-)
    #[test]
    fn ld_a_hl_step() {
        let cpu = run(&[0x2a], 1, |cpu| {
            cpu.reg.set_hl(0xfffe);
            cpu.bus.write_byte(0xfffe, 0x12).unwrap();
        });
        assert_eq!(0x12, cpu.reg.a);
        assert_eq!(0xffff, cpu.reg.hl());
        let cpu = run(&[0x3a], 1, |cpu| cpu.reg.set_hl(0x0000));
        assert_eq!(0x3a, cpu.reg.a);
        assert_eq!(0xffff, cpu.reg.hl(), "HL- should wrap");
    }

    /// e0, f0, e2, f2: the high page
    #[test]
    fn ldh() {
        let cpu = run(&[0xe0, 0x80, 0xe2], 2, |cpu| {
            cpu.reg.a = 0x12;
            cpu.reg.c = 0x81;
        });
        assert_eq!(0x12, cpu.bus.read_byte(0xff80).unwrap());
        assert_eq!(0x12, cpu.bus.read_byte(0xff81).unwrap());
        let cpu = run(&[0xf0, 0x44, 0xf2], 2, |cpu| {
            cpu.bus.write_byte(0xff44, 0x90).unwrap();
            cpu.bus.write_byte(0xff10, 0x80).unwrap();
            cpu.reg.c = 0x10;
        });
        assert_eq!(0x80, cpu.reg.a);
    }

    /// ea, fa: LD (a16),A and LD A,(a16)
    #[test]
    fn ld_a16() {
        let value = random::<u8>();
        let cpu = run(&[0xea, 0x00, 0x80, 0xaf, 0xfa, 0x00, 0x80], 3, |cpu| {
            cpu.reg.a = value;
        });
        assert_eq!(value, cpu.reg.a);
        assert_eq!(7, cpu.pc());
    }

    /// 08: LD (a16),SP
    #[test]
    fn ld_a16_sp() {
        let cpu = run(&[0x08, 0x10, 0x80], 1, |cpu| cpu.reg.sp = 0xbeef);
        assert_eq!(0xef, cpu.bus.read_byte(0x8010).unwrap());
        assert_eq!(0xbe, cpu.bus.read_byte(0x8011).unwrap());
    }

    /// f9: LD SP,HL
    #[test]
    fn ld_sp_hl() {
        let cpu = run(&[0xf9], 1, |cpu| cpu.reg.set_hl(0xc0de));
        assert_eq!(0xc0de, cpu.reg.sp);
    }

    #[test]
    fn store_into_rom() {
        let (cpu, err) = fail(&[0x77], |cpu| cpu.reg.set_hl(0x0010));
        assert!(matches!(
            err,
            Error::UnmappedAddress {
                addr: 0x0010,
                access: crate::error::Access::Write
            }
        ));
        assert!(cpu.is_halted());
    }
}

mod alu {
    use super::*;

    /// 04: INC r
    #[test]
    fn inc() {
        for value in 0..=0xffu8 {
            let carry = random::<bool>();
            let cpu = run(&[0x04], 1, |cpu| {
                cpu.reg.b = value;
                cpu.reg.set_flags(SUBTRACT, true);
                cpu.reg.set_flags(CARRY, carry);
            });
            let result = value.wrapping_add(1);
            assert_eq!(result, cpu.reg.b);
            assert_eq!(result == 0, cpu.reg.is_flag_set(ZERO), "{value:02x}");
            assert!(!cpu.reg.is_flag_set(SUBTRACT));
            assert_eq!(value & 0xf == 0xf, cpu.reg.is_flag_set(HALF_CARRY), "{value:02x}");
            assert_eq!(carry, cpu.reg.is_flag_set(CARRY));
        }
    }

    /// 05: DEC r
    #[test]
    fn dec() {
        for value in 0..=0xffu8 {
            let carry = random::<bool>();
            let cpu = run(&[0x3d], 1, |cpu| {
                cpu.reg.a = value;
                cpu.reg.set_flags(CARRY, carry);
            });
            let result = value.wrapping_sub(1);
            assert_eq!(result, cpu.reg.a);
            assert_eq!(result == 0, cpu.reg.is_flag_set(ZERO), "{value:02x}");
            assert!(cpu.reg.is_flag_set(SUBTRACT));
            assert_eq!(value & 0xf == 0, cpu.reg.is_flag_set(HALF_CARRY), "{value:02x}");
            assert_eq!(carry, cpu.reg.is_flag_set(CARRY));
        }
    }

    /// 34: INC (HL)
    #[test]
    fn inc_hl_ind() {
        let cpu = run(&[0x34], 1, |cpu| {
            cpu.reg.set_hl(0x8000);
            cpu.bus.write_byte(0x8000, 0xff).unwrap();
        });
        assert_eq!(0x00, cpu.bus.read_byte(0x8000).unwrap());
        assert!(cpu.reg.is_flag_set(ZERO | HALF_CARRY));
    }

    /// 03, 0b: INC rr and DEC rr wrap, and touch no flags
    #[test]
    fn inc_dec_rr() {
        let cpu = run(&[0x03, 0x1b, 0x23], 3, |cpu| {
            cpu.reg.set_bc(0xffff);
            cpu.reg.set_de(0x0000);
            cpu.reg.set_hl(0x00ff);
            cpu.reg.f = 0xf0;
        });
        assert_eq!(0x0000, cpu.reg.bc());
        assert_eq!(0xffff, cpu.reg.de());
        assert_eq!(0x0100, cpu.reg.hl());
        assert_eq!(0xf0, cpu.reg.f);
    }

    /// 33, 3b: SP must not leave the address space
    #[test]
    fn inc_dec_sp() {
        let cpu = run(&[0x33, 0x3b, 0x3b], 3, |cpu| cpu.reg.sp = 0x8000);
        assert_eq!(0x7fff, cpu.reg.sp);
        let (_, err) = fail(&[0x3b], |cpu| cpu.reg.sp = 0);
        assert!(matches!(err, Error::AddressOverflow { addr: 0, delta: -1 }));
        let (_, err) = fail(&[0x33], |cpu| cpu.reg.sp = 0xffff);
        assert!(matches!(err, Error::AddressOverflow { addr: 0xffff, delta: 1 }));
    }

    /// a8-af, ee: XOR
    #[test]
    fn xor() {
        let (a, b) = (random::<u8>(), random::<u8>());
        let cpu = run(&[0xa8], 1, |cpu| {
            cpu.reg.a = a;
            cpu.reg.b = b;
            cpu.reg.f = 0xf0;
        });
        assert_eq!(a ^ b, cpu.reg.a);
        assert_eq!(if a == b { ZERO } else { 0 }, cpu.reg.f);
        let cpu = run(&[0xee, 0x0f], 1, |cpu| cpu.reg.a = 0xff);
        assert_eq!(0xf0, cpu.reg.a);
        let cpu = run(&[0xae], 1, |cpu| {
            cpu.reg.a = 0x55;
            cpu.reg.set_hl(0x8000);
            cpu.bus.write_byte(0x8000, 0x55).unwrap();
        });
        assert_eq!(0, cpu.reg.a);
        assert_eq!(ZERO, cpu.reg.f);
    }

    /// b8-bf, fe: CP
    #[test]
    fn cp() {
        // (a, operand, flags)
        for (a, value, flags) in [
            (0x90, 0x90, ZERO | SUBTRACT),
            (0x90, 0x91, SUBTRACT | HALF_CARRY | CARRY),
            (0x10, 0x01, SUBTRACT | HALF_CARRY),
            (0x3c, 0x2f, SUBTRACT | HALF_CARRY),
            (0x3c, 0x40, SUBTRACT | CARRY),
            (0xff, 0x00, SUBTRACT),
        ] {
            let cpu = run(&[0xfe, value], 1, |cpu| cpu.reg.a = a);
            assert_eq!(flags, cpu.reg.f, "cp {a:02x}, {value:02x}");
            assert_eq!(a, cpu.reg.a, "cp must not write A");
        }
        let cpu = run(&[0xbf], 1, |cpu| cpu.reg.a = random());
        assert_eq!(ZERO | SUBTRACT, cpu.reg.f);
    }
}

mod control {
    use super::*;

    /// 18: JR r8
    #[test]
    fn jr() {
        assert_eq!(0x12, run(&[0x18, 0x10], 1, |_| {}).pc());
        assert_eq!(0x02, run(&[0x18, 0x00], 1, |_| {}).pc());
        let cpu = run(&[0x18, 0xfe], 5, |_| {});
        assert_eq!(0x00, cpu.pc(), "jr -2 should loop forever");
        assert_eq!(5, cpu.cycle());
    }

    #[test]
    fn jr_out_of_range() {
        let (cpu, err) = fail(&[0x18, 0xfd], |_| {});
        assert!(matches!(err, Error::InvalidJump { pc: 2, offset: -3 }));
        assert!(cpu.is_halted());
    }

    #[test]
    fn jr_past_the_end() {
        let mut cpu = setup_environment(&[]);
        cpu.bus.write_word(0xfffc, 0x7f18).unwrap();
        cpu.reg.pc = 0xfffc;
        let err = cpu.step().unwrap_err();
        assert!(matches!(err, Error::InvalidJump { pc: 0xfffe, offset: 0x7f }));
    }

    /// 20, 28, 30, 38: JR cc,r8
    #[test]
    fn jr_cc() {
        // (opcode, flags, taken)
        for (op, flags, taken) in [
            (0x20, 0, true),
            (0x20, ZERO, false),
            (0x28, ZERO, true),
            (0x28, CARRY, false),
            (0x30, ZERO, true),
            (0x30, CARRY, false),
            (0x38, CARRY, true),
            (0x38, 0, false),
        ] {
            let cpu = run(&[op, 0x05], 1, |cpu| cpu.reg.f = flags);
            assert_eq!(if taken { 0x07 } else { 0x02 }, cpu.pc(), "{op:02x} {flags:02x}");
        }
    }

    /// c3, c2, e9: JP
    #[test]
    fn jp() {
        assert_eq!(0x1234, run(&[0xc3, 0x34, 0x12], 1, |_| {}).pc());
        assert_eq!(0x0003, run(&[0xca, 0x34, 0x12], 1, |_| {}).pc());
        assert_eq!(0x1234, run(&[0xc2, 0x34, 0x12], 1, |_| {}).pc());
        assert_eq!(0xbeef, run(&[0xe9], 1, |cpu| cpu.reg.set_hl(0xbeef)).pc());
    }

    /// cd, c9: CALL and RET
    #[test]
    fn call_ret() {
        let program = [
            0xcd, 0x05, 0x00, // call 0005
            0x00, 0x00, // nop; nop
            0xc9, // ret
        ];
        let cpu = run(&program, 1, |cpu| cpu.reg.sp = 0xfffe);
        assert_eq!(0x0005, cpu.pc());
        assert_eq!(0xfffc, cpu.reg.sp);
        assert_eq!(0x0003, cpu.bus.read_word(0xfffc).unwrap());
        let cpu = run(&program, 2, |cpu| cpu.reg.sp = 0xfffe);
        assert_eq!(0x0003, cpu.pc());
        assert_eq!(0xfffe, cpu.reg.sp);
    }

    /// c4, cc, d4, dc: CALL cc,a16
    #[test]
    fn call_cc() {
        let cpu = run(&[0xdc, 0x00, 0x10], 1, |cpu| cpu.reg.sp = 0xfffe);
        assert_eq!(0x0003, cpu.pc());
        assert_eq!(0xfffe, cpu.reg.sp, "untaken call must not push");
        let cpu = run(&[0xd4, 0x00, 0x10], 1, |cpu| cpu.reg.sp = 0xfffe);
        assert_eq!(0x1000, cpu.pc());
        assert_eq!(0xfffc, cpu.reg.sp);
    }

    /// c0, c8, d0, d8: RET cc
    #[test]
    fn ret_cc() {
        let setup = |cpu: &mut CPU| {
            cpu.reg.sp = 0xfffc;
            cpu.bus.write_word(0xfffc, 0x1234).unwrap();
            cpu.reg.f = ZERO;
        };
        let cpu = run(&[0xc0], 1, setup);
        assert_eq!(0x0001, cpu.pc());
        assert_eq!(0xfffc, cpu.reg.sp);
        let cpu = run(&[0xc8], 1, setup);
        assert_eq!(0x1234, cpu.pc());
        assert_eq!(0xfffe, cpu.reg.sp);
    }
}

mod stack {
    use super::*;

    /// c5 c1, d5 d1, e5 e1: PUSH rr, then POP rr
    #[test]
    fn push_pop() {
        for (push, pop, pair) in [(0xc5, 0xd1, BC), (0xd5, 0xe1, DE), (0xe5, 0xc1, HL)] {
            let value = random::<u16>();
            let cpu = run(&[push, pop], 2, |cpu| {
                cpu.reg.sp = 0xfffe;
                cpu.reg.set_r16(pair, value);
            });
            assert_eq!(0xfffe, cpu.reg.sp);
            assert_eq!(value, cpu.bus.read_word(0xfffc).unwrap());
        }
    }

    #[test]
    fn push_moves_between_pairs() {
        let cpu = run(&[0xc5, 0xe1], 2, |cpu| {
            cpu.reg.sp = 0xfffe;
            cpu.reg.set_bc(0xabcd);
        });
        assert_eq!(0xabcd, cpu.reg.hl());
    }

    /// f5, f1: AF drops the lower nibble of F
    #[test]
    fn pop_af() {
        let cpu = run(&[0xf1], 1, |cpu| {
            cpu.reg.sp = 0xff80;
            cpu.bus.write_word(0xff80, 0x12ff).unwrap();
        });
        assert_eq!(0x12, cpu.reg.a);
        assert_eq!(0xf0, cpu.reg.f);
        let cpu = run(&[0xf5], 1, |cpu| {
            cpu.reg.sp = 0xff82;
            cpu.reg.set_af(0x3480);
        });
        assert_eq!(0x3480, cpu.bus.read_word(0xff80).unwrap());
    }

    #[test]
    fn stack_overflow() {
        let (_, err) = fail(&[0xc5], |cpu| cpu.reg.sp = 0x0001);
        assert!(matches!(err, Error::AddressOverflow { addr: 1, delta: -2 }));
        let (_, err) = fail(&[0xc5], |cpu| cpu.reg.sp = 0x0000);
        assert!(matches!(err, Error::AddressOverflow { .. }));
        let (_, err) = fail(&[0xc9], |cpu| cpu.reg.sp = 0xffff);
        assert!(matches!(err, Error::UnmappedAddress { addr: 0xffff, .. }));
    }
}

mod bits {
    use super::*;

    /// cb00-cb1f: prefixed rotates
    #[test]
    fn rotates() {
        // (opcode, value, carry in, result, carry out)
        for (op, value, carry, result, carry_out) in [
            (0x00, 0x85, false, 0x0b, true),  // rlc b
            (0x08, 0x01, false, 0x80, true),  // rrc b
            (0x10, 0x80, false, 0x00, true),  // rl b
            (0x10, 0x80, true, 0x01, true),   // rl b
            (0x10, 0x11, false, 0x22, false), // rl b
            (0x18, 0x01, false, 0x00, true),  // rr b
            (0x18, 0x01, true, 0x80, true),   // rr b
            (0x18, 0x8a, false, 0x45, false), // rr b
        ] {
            let cpu = run(&[0xcb, op], 1, |cpu| {
                cpu.reg.b = value;
                cpu.reg.set_flags(CARRY, carry);
                cpu.reg.set_flags(SUBTRACT | HALF_CARRY, true);
            });
            assert_eq!(result, cpu.reg.b, "cb{op:02x} {value:02x}");
            assert_eq!(carry_out, cpu.reg.is_flag_set(CARRY), "cb{op:02x} {value:02x}");
            assert_eq!(result == 0, cpu.reg.is_flag_set(ZERO), "cb{op:02x} {value:02x}");
            assert!(!cpu.reg.is_flag_set(SUBTRACT | HALF_CARRY));
            assert_eq!(2, cpu.pc());
        }
    }

    /// cb16: RL (HL)
    #[test]
    fn rotate_hl_ind() {
        let cpu = run(&[0xcb, 0x16], 1, |cpu| {
            cpu.reg.set_hl(0x8000);
            cpu.bus.write_byte(0x8000, 0x40).unwrap();
        });
        assert_eq!(0x80, cpu.bus.read_byte(0x8000).unwrap());
    }

    /// 07, 0f, 17, 1f: the accumulator always clears Z
    #[test]
    fn accumulator_rotates_clear_zero() {
        for op in [0x07, 0x0f, 0x17, 0x1f] {
            let cpu = run(&[op], 1, |cpu| {
                cpu.reg.a = 0;
                cpu.reg.f = ZERO;
            });
            assert_eq!(0, cpu.reg.a);
            assert_eq!(0, cpu.reg.f, "{op:02x}");
        }
        let cpu = run(&[0x17], 1, |cpu| {
            cpu.reg.a = 0x95;
            cpu.reg.f = CARRY;
        });
        assert_eq!(0x2b, cpu.reg.a);
        assert_eq!(CARRY, cpu.reg.f);
    }

    /// cb40-cb7f: BIT b,r
    #[test]
    fn bit() {
        for bit in 0..8u8 {
            for r in [B, C, D, E, H, L, A] {
                let value = random::<u8>();
                let carry = random::<bool>();
                let op = 0x40 | bit << 3 | r as u8;
                let cpu = run(&[0xcb, op], 1, |cpu| {
                    cpu.reg.set_r8(r, value);
                    cpu.reg.set_flags(SUBTRACT, true);
                    cpu.reg.set_flags(CARRY, carry);
                });
                assert_eq!(Some(value), cpu.reg.r8(r), "BIT must not write its operand");
                assert_eq!(value & 1 << bit == 0, cpu.reg.is_flag_set(ZERO), "cb{op:02x}");
                assert!(!cpu.reg.is_flag_set(SUBTRACT));
                assert!(cpu.reg.is_flag_set(HALF_CARRY));
                assert_eq!(carry, cpu.reg.is_flag_set(CARRY));
            }
        }
    }

    /// cb7e: BIT 7,(HL)
    #[test]
    fn bit_hl_ind() {
        let cpu = run(&[0xcb, 0x7e], 1, |cpu| {
            cpu.reg.set_hl(0x8000);
            cpu.bus.write_byte(0x8000, 0x80).unwrap();
        });
        assert!(!cpu.reg.is_flag_set(ZERO));
        assert_eq!(0x80, cpu.bus.read_byte(0x8000).unwrap());
    }
}

mod engine {
    use super::*;

    #[test]
    fn prefixed_fetch_consumes_two_bytes() {
        let cpu = run(&[0xcb, 0x7c], 1, |_| {});
        assert_eq!(2, cpu.pc());
        assert_eq!(1, cpu.cycle());
    }

    #[test]
    fn decode_error_reports_fetch_address() {
        let mut cpu = setup_environment(&[0x00, 0xcb, 0x30]);
        cpu.step().unwrap();
        let err = cpu.step().unwrap_err();
        assert!(matches!(
            err,
            Error::DecodeError {
                opcode: Opcode::Prefixed(0x30),
                addr: 0x0001
            }
        ));
        assert_eq!(1, cpu.cycle());
    }

    #[test]
    fn halted_cpu_stays_halted() {
        let (mut cpu, _) = fail(&[0xd3], |_| {});
        assert!(matches!(cpu.step(), Err(Error::Halted)));
        assert!(matches!(cpu.tick(&mut ()), Err(Error::Halted)));
        cpu.reset();
        assert!(!cpu.is_halted());
    }

    #[test]
    fn reset() {
        let mut cpu = run(&[0x21, 0x34, 0x12], 1, |_| {});
        cpu.reset();
        assert_eq!(Registers::default(), *cpu.registers());
        assert_eq!(0, cpu.cycle());
    }

    #[test]
    fn boot_rom_hands_over_to_cartridge() {
        let boot = [
            0x3e, 0x01, // ld a, 1
            0xe0, 0x50, // ldh (50), a
        ];
        let mut cart = vec![0; 0x4000];
        cart[0x0000] = 0x99;
        cart[0x0004] = 0x88;
        let mut cpu = CPU::new(&boot, Some(cart.as_slice()), ControlFlags::default()).unwrap();
        assert_eq!(0x3e, cpu.bus.read_byte(0x0000).unwrap());
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert!(!cpu.bus.boot_mapped());
        assert_eq!(0x99, cpu.bus.read_byte(0x0000).unwrap());
        assert_eq!(0x88, cpu.bus.read_byte(0x0004).unwrap());
    }

    #[test]
    fn skip_boot() {
        let mut cart = vec![0; 0x4000];
        cart[0x0100] = 0x3c; // inc a
        let flags = ControlFlags {
            boot: false,
            ..Default::default()
        };
        let mut cpu = CPU::new(&[0xff; 0x100], Some(cart.as_slice()), flags).unwrap();
        assert_eq!(CART_ENTRY, cpu.pc());
        assert_eq!(0x00, cpu.bus.read_byte(0x0000).unwrap());
        cpu.step().unwrap();
        assert_eq!(1, cpu.reg.a);
    }

    #[test]
    fn oversize_roms_are_rejected() {
        assert!(matches!(
            CPU::new(&[0; 0x101], None, ControlFlags::default()),
            Err(Error::RomSize { .. })
        ));
        assert!(matches!(
            CPU::new(&[], Some(&[0; 0x4001][..]), ControlFlags::default()),
            Err(Error::RomSize { .. })
        ));
    }

    #[test]
    fn trace_mode() {
        let mut cpu = setup_environment(&[0x21, 0x34, 0x12, 0xcb, 0x7c]);
        cpu.flags.trace();
        cpu.set_disassembler(Dis::plain());
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(5, cpu.pc());
    }

    struct Countdown(usize);
    impl Hook for Countdown {
        fn cycle(&mut self, _: &mut CPU) -> Result<Flow> {
            Ok(match self.0.checked_sub(1) {
                Some(n) => {
                    self.0 = n;
                    Flow::Continue
                }
                None => Flow::Kill,
            })
        }
    }

    #[test]
    fn hook_runs_before_every_instruction() {
        let mut cpu = setup_environment(&[0x18, 0xfe]);
        cpu.run_with(&mut Countdown(10)).unwrap();
        assert_eq!(10, cpu.cycle());
    }

    #[test]
    fn free_run_ends_in_error() {
        let mut cpu = setup_environment(&[0x00; 0x100]);
        let err = cpu.run().unwrap_err();
        // The boot ROM is all nops, and ends where unmapped memory begins
        assert!(matches!(err, Error::UnmappedAddress { addr: 0x0100, .. }), "{err}");
        assert_eq!(0x100, cpu.cycle());
    }
}
