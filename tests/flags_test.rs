//! Tests for the flag set/clear instructions.

use nes6502::{FlatMemory, MemoryBus, CPU, CARRY, DECIMAL, INTERRUPT_DISABLE, OVERFLOW};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_sec_clc() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x38); // SEC
    cpu.memory_mut().write(0x8001, 0x18); // CLC

    let cycles = cpu.step().unwrap();
    assert!(cpu.flag(CARRY));
    assert_eq!(cycles, 2);

    cpu.step().unwrap();
    assert!(!cpu.flag(CARRY));
}

#[test]
fn test_sei_cli() {
    let mut cpu = setup_cpu();
    // InterruptDisable starts set from power-on.
    cpu.memory_mut().write(0x8000, 0x58); // CLI
    cpu.memory_mut().write(0x8001, 0x78); // SEI

    cpu.step().unwrap();
    assert!(!cpu.flag(INTERRUPT_DISABLE));
    cpu.step().unwrap();
    assert!(cpu.flag(INTERRUPT_DISABLE));
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xF8); // SED
    cpu.memory_mut().write(0x8001, 0xD8); // CLD

    cpu.step().unwrap();
    assert!(cpu.flag(DECIMAL));
    cpu.step().unwrap();
    assert!(!cpu.flag(DECIMAL));
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.set_flag(OVERFLOW, true);
    cpu.memory_mut().write(0x8000, 0xB8); // CLV

    cpu.step().unwrap();
    assert!(!cpu.flag(OVERFLOW));
}

#[test]
fn test_flag_ops_touch_only_their_flag() {
    let mut cpu = setup_cpu();
    cpu.set_flag(OVERFLOW, true);
    cpu.set_flag(DECIMAL, true);
    cpu.memory_mut().write(0x8000, 0x38); // SEC

    cpu.step().unwrap();
    assert!(cpu.flag(CARRY));
    assert!(cpu.flag(OVERFLOW));
    assert!(cpu.flag(DECIMAL));
    assert!(cpu.flag(INTERRUPT_DISABLE));
}
