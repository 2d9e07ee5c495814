//! Tests for the ASL/LSR/ROL/ROR shift and rotate instructions.
//!
//! Each test covers the shifted-out bit becoming the new Carry, plus the
//! accumulator/memory operand split.

use nes6502::{FlatMemory, MemoryBus, CPU, CARRY, NEGATIVE, ZERO};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0A); // ASL A
    cpu.set_a(0x81);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag(CARRY)); // bit 7 shifted out
    assert!(!cpu.flag(ZERO));
    assert!(!cpu.flag(NEGATIVE));
    assert_eq!(cycles, 2);
}

#[test]
fn test_asl_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.memory_mut().write(0x8000, 0x06); // ASL $10
    cpu.memory_mut().write(0x8001, 0x10);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(!cpu.flag(CARRY));
    assert!(cpu.flag(NEGATIVE));
    assert_eq!(cycles, 5);
}

#[test]
fn test_lsr_accumulator_bit_zero_to_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x4A); // LSR A
    cpu.set_a(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(CARRY));
    assert!(cpu.flag(ZERO));
    assert!(!cpu.flag(NEGATIVE)); // LSR can never set bit 7
}

#[test]
fn test_rol_carry_in_and_out() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x2A); // ROL A
    cpu.set_a(0x80);
    cpu.set_flag(CARRY, true);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x01); // carry rotated into bit 0
    assert!(cpu.flag(CARRY)); // old bit 7 rotated out
}

#[test]
fn test_ror_carry_into_bit_seven() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x6A); // ROR A
    cpu.set_a(0x02);
    cpu.set_flag(CARRY, true);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag(CARRY));
    assert!(cpu.flag(NEGATIVE));
}

#[test]
fn test_ror_memory_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0x03);
    cpu.memory_mut().write(0x8000, 0x6E); // ROR $1234
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x1234), 0x01);
    assert!(cpu.flag(CARRY));
    assert_eq!(cycles, 6);
}

#[test]
fn test_shift_absolute_x_has_fixed_seven_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x1300, 0x01);
    cpu.memory_mut().write(0x8000, 0x1E); // ASL $12FF,X (page crossed)
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x12);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x1300), 0x02);
    assert_eq!(cycles, 7); // RMW: no page-cross penalty on top
}

#[test]
fn test_rol_chain_through_memory() {
    // ROL $10 twice: 0x40 -> 0x80 -> 0x00 with carry out.
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.memory_mut().write(0x8000, 0x26);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x8002, 0x26);
    cpu.memory_mut().write(0x8003, 0x10);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(!cpu.flag(CARRY));

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag(CARRY));
    assert!(cpu.flag(ZERO));
}
