//! # Branch Instructions
//!
//! All eight conditional branches. Each tests exactly one flag and, when
//! the condition holds, redirects PC to the Relative-mode target.
//!
//! Cycle timing:
//! - 2 cycles if the branch is not taken (base cost only)
//! - +1 cycle when taken
//! - +1 more when the target is on a different page than the instruction
//!   that follows the branch
//!
//! No flags are affected.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::flags::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::memory::MemoryBus;

/// BPL: branch if Negative clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = !cpu.status.is_set(NEGATIVE);
    branch_if(cpu, mode, operand_pc, take)
}

/// BMI: branch if Negative set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = cpu.status.is_set(NEGATIVE);
    branch_if(cpu, mode, operand_pc, take)
}

/// BVC: branch if Overflow clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = !cpu.status.is_set(OVERFLOW);
    branch_if(cpu, mode, operand_pc, take)
}

/// BVS: branch if Overflow set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = cpu.status.is_set(OVERFLOW);
    branch_if(cpu, mode, operand_pc, take)
}

/// BCC: branch if Carry clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = !cpu.status.is_set(CARRY);
    branch_if(cpu, mode, operand_pc, take)
}

/// BCS: branch if Carry set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = cpu.status.is_set(CARRY);
    branch_if(cpu, mode, operand_pc, take)
}

/// BNE: branch if Zero clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = !cpu.status.is_set(ZERO);
    branch_if(cpu, mode, operand_pc, take)
}

/// BEQ: branch if Zero set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand_pc: u16) -> u32 {
    let take = cpu.status.is_set(ZERO);
    branch_if(cpu, mode, operand_pc, take)
}

/// Applies the branch when taken and returns the extra cycles (1, or 2 on
/// a page cross). PC already points past the branch instruction, so the
/// page comparison is between fall-through and target addresses.
fn branch_if<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    operand_pc: u16,
    take: bool,
) -> u32 {
    if !take {
        return 0;
    }

    let (target, _) = cpu.resolve_addr(mode, operand_pc);
    let mut extra = 1;
    if (cpu.pc & 0xFF00) != (target & 0xFF00) {
        extra += 1;
    }
    cpu.pc = target;
    extra
}
