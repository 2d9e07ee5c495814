//! # Load and Store Instructions
//!
//! Loads update Zero/Negative from the loaded value; stores affect no
//! flags. Store opcodes never take the page-cross penalty — their indexed
//! variants carry the higher fixed base cost in the opcode table.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::flags::{NEGATIVE, ZERO};
use crate::memory::MemoryBus;

/// LDA: load accumulator. Affects Zero, Negative.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.a = value;
    cpu.status.update(value as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// LDX: load X register. Affects Zero, Negative.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.x = value;
    cpu.status.update(value as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// LDY: load Y register. Affects Zero, Negative.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let (value, crossed) = cpu.operand_value(mode, operand_pc);
    cpu.y = value;
    cpu.status.update(value as i16, ZERO | NEGATIVE);
    crossed as u32
}

/// STA: store accumulator. No flag effect.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (addr, _) = cpu.resolve_addr(mode, operand_pc);
    cpu.memory.write(addr, cpu.a);
}

/// STX: store X register. No flag effect.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (addr, _) = cpu.resolve_addr(mode, operand_pc);
    cpu.memory.write(addr, cpu.x);
}

/// STY: store Y register. No flag effect.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (addr, _) = cpu.resolve_addr(mode, operand_pc);
    cpu.memory.write(addr, cpu.y);
}
