//! # ALU Instructions
//!
//! Arithmetic (ADC, SBC), bitwise logic (AND, ORA, EOR, BIT), and compares
//! (CMP, CPX, CPY).
//!
//! Arithmetic is always binary: the Decimal flag is tracked by the status
//! register but no BCD correction is applied, matching the NES variant of
//! the 6502 whose decimal circuitry is disabled.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::flags::{signed_overflow, CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::memory::MemoryBus;

/// ADC: add operand and carry-in to the accumulator.
///
/// Affects Carry, Zero, Overflow, Negative. Returns the page-cross extra
/// cycle for indexed modes.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    add_with_carry(cpu, value);
    crossed as u32
}

/// SBC: subtract operand with borrow.
///
/// Implemented as ADC of the operand's complement; the carry flag is the
/// inverted borrow, exactly as on hardware.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    add_with_carry(cpu, value ^ 0xFF);
    crossed as u32
}

/// Shared ADC/SBC core: 8-bit add with carry-in, Carry from bit 8 of the
/// 16-bit sum, Overflow from the two's-complement sign rule.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.is_set(CARRY) as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.update(sum as i16, CARRY | ZERO | NEGATIVE);
    cpu.status.assign(OVERFLOW, signed_overflow(a, value, result));
    cpu.a = result;
}

/// AND: bitwise AND into the accumulator. Affects Zero, Negative.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.a &= value;
    cpu.status.update(cpu.a as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// ORA: bitwise OR into the accumulator. Affects Zero, Negative.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.a |= value;
    cpu.status.update(cpu.a as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// EOR: bitwise exclusive-OR into the accumulator. Affects Zero, Negative.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.a ^= value;
    cpu.status.update(cpu.a as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// BIT: test accumulator against memory without storing.
///
/// Zero from `A & M`; Negative and Overflow copied from bits 7 and 6 of
/// the memory operand.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (value, _) = cpu.operand_value(mode, operand_pc);
    cpu.status.assign(ZERO, cpu.a & value == 0);
    cpu.status.assign(NEGATIVE, value & 0x80 != 0);
    cpu.status.assign(OVERFLOW, value & 0x40 != 0);
}

/// CMP: compare accumulator with operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    let reg = cpu.a;
    compare(cpu, reg, value);
    crossed as u32
}

/// CPX: compare X register with operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    let reg = cpu.x;
    compare(cpu, reg, value);
    crossed as u32
}

/// CPY: compare Y register with operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    let reg = cpu.y;
    compare(cpu, reg, value);
    crossed as u32
}

/// Subtract without storing: Carry set when `reg >= value` (no borrow),
/// Zero/Negative from the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, reg: u8, value: u8) {
    let diff = reg as u16 + (!value) as u16 + 1;
    cpu.status.update(diff as i16, CARRY | ZERO | NEGATIVE);
}
