//! # Stack Instructions
//!
//! PHA/PHP push to 0x0100 + SP then decrement SP; PLA/PLP increment SP
//! then pull. PHP pushes with Break and the unused bit forced to 1; PLP
//! discards the pushed Break and keeps the unused bit set.

use crate::cpu::CPU;
use crate::flags::{BREAK, NEGATIVE, UNUSED, ZERO};
use crate::memory::MemoryBus;

/// PHA: push accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.push(a);
}

/// PHP: push processor status with Break|Unused set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status.for_push(true);
    cpu.push(status);
}

/// PLA: pull accumulator. Affects Zero, Negative.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pop();
    cpu.a = value;
    cpu.status.update(value as i16, ZERO | NEGATIVE);
}

/// PLP: pull processor status.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let bits = cpu.pop();
    cpu.status.set_bits((bits | UNUSED) & !BREAK);
}
