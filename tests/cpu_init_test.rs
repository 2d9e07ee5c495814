//! Tests for CPU power-on and reset state.

use nes6502::{FlatMemory, MemoryBus, MirroredMemory, CPU, INTERRUPT_DISABLE, UNUSED};

#[test]
fn test_power_on_loads_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_power_on_register_defaults() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 0);
    assert!(cpu.flag(INTERRUPT_DISABLE));
    assert!(cpu.flag(UNUSED));
}

#[test]
fn test_reset_vector_read_through_prg_mirror() {
    // With a 16KB PRG bank mirrored, the vector at 0xFFFC folds to 0xBFFC;
    // a loader writing either alias must produce the same PC.
    let mut memory = MirroredMemory::new(true);
    memory.write(0xBFFC, 0x00);
    memory.write(0xBFFD, 0xC0);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_reset_reloads_vector_after_memory_changes() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let mut cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x8000);

    cpu.memory_mut().write(0xFFFC, 0x00);
    cpu.memory_mut().write(0xFFFD, 0x90);
    cpu.set_a(0x55);
    cpu.reset();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
}
