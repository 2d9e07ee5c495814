//! # Register Transfer Instructions
//!
//! Register-to-register copies. All update Zero/Negative except TXS,
//! which moves X into the stack pointer untouched by the flag logic.

use crate::cpu::CPU;
use crate::flags::{NEGATIVE, ZERO};
use crate::memory::MemoryBus;

/// TAX: A -> X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.status.update(cpu.x as i16, ZERO | NEGATIVE);
}

/// TAY: A -> Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.status.update(cpu.y as i16, ZERO | NEGATIVE);
}

/// TXA: X -> A.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.status.update(cpu.a as i16, ZERO | NEGATIVE);
}

/// TYA: Y -> A.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.status.update(cpu.a as i16, ZERO | NEGATIVE);
}

/// TSX: SP -> X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.status.update(cpu.x as i16, ZERO | NEGATIVE);
}

/// TXS: X -> SP. No flag effect.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
