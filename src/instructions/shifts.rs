//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Accumulator mode operates on A; every other mode
//! performs a read-modify-write on the resolved address. The shifted-out
//! bit becomes the new Carry; Zero and Negative follow the result. The
//! indexed memory variants have fixed base costs (no page-cross penalty).

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::flags::{Status, CARRY, NEGATIVE, ZERO};
use crate::memory::MemoryBus;

/// ASL: arithmetic shift left; bit 7 into Carry.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    modify(cpu, mode, operand_pc, |status, old| {
        status.assign(CARRY, old & 0x80 != 0);
        old << 1
    });
}

/// LSR: logical shift right; bit 0 into Carry.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    modify(cpu, mode, operand_pc, |status, old| {
        status.assign(CARRY, old & 0x01 != 0);
        old >> 1
    });
}

/// ROL: rotate left through Carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    modify(cpu, mode, operand_pc, |status, old| {
        let carry_in = status.is_set(CARRY) as u8;
        status.assign(CARRY, old & 0x80 != 0);
        (old << 1) | carry_in
    });
}

/// ROR: rotate right through Carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    modify(cpu, mode, operand_pc, |status, old| {
        let carry_in = if status.is_set(CARRY) { 0x80 } else { 0 };
        status.assign(CARRY, old & 0x01 != 0);
        (old >> 1) | carry_in
    });
}

/// Applies `transform` to the accumulator or the memory operand, writes
/// the result back, and updates Zero/Negative. The transform sets Carry
/// from the shifted-out bit before the result is produced.
fn modify<M, F>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16, transform: F)
where
    M: MemoryBus,
    F: FnOnce(&mut Status, u8) -> u8,
{
    let result = match mode {
        AddressingMode::Accumulator => {
            let result = transform(&mut cpu.status, cpu.a);
            cpu.a = result;
            result
        }
        _ => {
            let (addr, _) = cpu.resolve_addr(mode, operand_pc);
            let result = transform(&mut cpu.status, cpu.memory.read(addr));
            cpu.memory.write(addr, result);
            result
        }
    };
    cpu.status.update(result as i16, ZERO | NEGATIVE);
}
