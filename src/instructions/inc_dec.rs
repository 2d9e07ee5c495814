//! # Increment and Decrement Instructions
//!
//! Memory (INC, DEC) and register (INX, INY, DEX, DEY) variants; all wrap
//! at the 8-bit boundary and update Zero/Negative.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::flags::{NEGATIVE, ZERO};
use crate::memory::MemoryBus;

/// INC: increment memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (addr, _) = cpu.resolve_addr(mode, operand_pc);
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.status.update(result as i16, ZERO | NEGATIVE);
}

/// DEC: decrement memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) {
    let (addr, _) = cpu.resolve_addr(mode, operand_pc);
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.status.update(result as i16, ZERO | NEGATIVE);
}

/// INX: increment X register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update(cpu.x as i16, ZERO | NEGATIVE);
}

/// INY: increment Y register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update(cpu.y as i16, ZERO | NEGATIVE);
}

/// DEX: decrement X register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update(cpu.x as i16, ZERO | NEGATIVE);
}

/// DEY: decrement Y register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update(cpu.y as i16, ZERO | NEGATIVE);
}
