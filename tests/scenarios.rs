//! Black-box scenarios taken from the concrete CPU Core and cabinet I/O
//! test vectors: each sets up a tiny program or raw state, runs it, and
//! checks the documented result.

use invaders8080::memory::Memory;
use invaders8080::processor::Cpu;
use invaders8080::shift;
use pretty_assertions::assert_eq;

fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(Memory::blank(), false);
    for (i, byte) in program.iter().enumerate() {
        cpu.memory.write(i as u16, *byte);
    }
    cpu
}

#[test]
fn inr_preserves_carry_scenario() {
    let mut cpu = cpu_with_program(&[0x3C]); // INR A
    cpu.regs.a = 0x00;
    cpu.regs.flags.cy = true;
    cpu.step();

    assert_eq!(cpu.regs.a, 0x01);
    assert!(!cpu.regs.flags.z);
    assert!(!cpu.regs.flags.s);
    assert!(!cpu.regs.flags.p);
    assert!(cpu.regs.flags.cy);
    assert!(!cpu.regs.flags.ac);
}

#[test]
fn add_with_auxiliary_carry_scenario() {
    let mut cpu = cpu_with_program(&[0x80]); // ADD B
    cpu.regs.a = 0x2E;
    cpu.regs.b = 0x74;
    cpu.step();

    assert_eq!(cpu.regs.a, 0xA2);
    assert!(!cpu.regs.flags.cy);
    assert!(cpu.regs.flags.ac);
    assert!(!cpu.regs.flags.z);
    assert!(cpu.regs.flags.s);
    assert!(!cpu.regs.flags.p);
}

#[test]
fn sub_producing_borrow_scenario() {
    let mut cpu = cpu_with_program(&[0x90]); // SUB B
    cpu.regs.a = 0x3E;
    cpu.regs.b = 0x3F;
    cpu.step();

    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.flags.cy);
    assert!(cpu.regs.flags.ac);
    assert!(!cpu.regs.flags.z);
    assert!(cpu.regs.flags.s);
    assert!(cpu.regs.flags.p);
}

#[test]
fn shift_register_readout_scenario() {
    let program = [
        0x3E, 0xAA, // MVI A, 0xAA
        0xD3, 0x04, // OUT 4
        0x3E, 0x55, // MVI A, 0x55
        0xD3, 0x04, // OUT 4
        0x3E, 0x03, // MVI A, 0x03
        0xD3, 0x02, // OUT 2
        0xDB, 0x03, // IN 3
    ];
    let mut cpu = cpu_with_program(&program);
    for _ in 0..7 {
        cpu.step();
    }
    assert_eq!(cpu.regs.a, 0x2A);
}

#[test]
fn shift_register_formula_matches_raw_helper() {
    let mut scratch = invaders8080::registers::CabinetScratch::default();
    shift::store(&mut scratch, 0xAA);
    shift::store(&mut scratch, 0x55);
    shift::set_offset(&mut scratch, 3);
    assert_eq!(shift::read(&scratch), 0x2A);
}

#[test]
fn conditional_call_cycles_depend_on_whether_taken() {
    let mut not_taken = cpu_with_program(&[0xCC, 0x00, 0x10]); // CZ 0x1000
    not_taken.regs.flags.z = false;
    assert_eq!(not_taken.step(), 11);

    let mut taken = cpu_with_program(&[0xCC, 0x00, 0x10]);
    taken.regs.flags.z = true;
    assert_eq!(taken.step(), 17);
}

#[test]
fn interrupt_injection_pushes_pc_and_clears_ie() {
    let mut cpu = cpu_with_program(&[]);
    cpu.regs.pc = 0x1234;
    cpu.regs.sp = 0x2400;
    cpu.regs.ie = true;

    cpu.generate_interrupt(2);

    assert_eq!(cpu.memory.read(0x23FF), 0x12);
    assert_eq!(cpu.memory.read(0x23FE), 0x34);
    assert_eq!(cpu.regs.sp, 0x23FE);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert!(!cpu.regs.ie);
}

#[test]
fn push_pop_round_trips_all_pairs() {
    let mut cpu = cpu_with_program(&[]);
    cpu.regs.sp = 0x2400;
    cpu.regs.set_bc(0x1234);
    cpu.regs.set_de(0x5678);
    cpu.regs.set_hl(0x9ABC);
    cpu.regs.a = 0x42;
    cpu.regs.flags.z = true;
    cpu.regs.flags.cy = true;

    cpu.push_u16(cpu.regs.bc());
    cpu.push_u16(cpu.regs.de());
    cpu.push_u16(cpu.regs.hl());
    let psw = ((cpu.regs.a as u16) << 8) | cpu.regs.flags.to_byte() as u16;
    cpu.push_u16(psw);

    let popped_psw = cpu.pop_u16();
    let popped_hl = cpu.pop_u16();
    let popped_de = cpu.pop_u16();
    let popped_bc = cpu.pop_u16();

    assert_eq!(popped_bc, 0x1234);
    assert_eq!(popped_de, 0x5678);
    assert_eq!(popped_hl, 0x9ABC);
    assert_eq!(popped_psw, psw);
    assert_eq!(cpu.regs.sp, 0x2400);
}

#[test]
fn daa_corrects_both_nibbles() {
    let mut cpu = cpu_with_program(&[0x27]); // DAA
    cpu.regs.a = 0x9B;
    cpu.step();
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.regs.flags.cy);
}

#[test]
fn rom_too_large_is_rejected_before_any_execution() {
    let oversized = vec![0u8; 0x4000];
    assert!(Memory::load(&oversized, false).is_err());
}
