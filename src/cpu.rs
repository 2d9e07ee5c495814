//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor
//! state and the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: the [`Status`] register
//! - **Cycle counter**: monotonically increasing u64
//!
//! ## Execution Model
//!
//! One call to [`CPU::step`] executes one instruction:
//! 1. fetch the opcode byte at PC and look up its descriptor
//! 2. advance PC by the instruction length (before address resolution, so
//!    Relative mode measures from the post-fetch PC)
//! 3. resolve the effective address from the saved operand position
//! 4. run the instruction semantics and update the declared flags
//! 5. return base cycles plus any page-cross/branch penalties
//!
//! Unassigned opcode bytes surface as
//! [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError) with PC
//! already advanced past the byte, so a harness can count them and keep
//! going.

use std::fmt;

use crate::addressing::{self, AddressingMode};
use crate::flags::{Status, INTERRUPT_DISABLE};
use crate::instructions::{
    alu, branches, control, flags as flag_ops, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::{MemoryBus, MEMORY_SIZE};
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::ExecutionError;

/// Reset vector: PC is loaded from here on power-up and reset.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Stack page base; SP is an offset into this page.
const STACK_BASE: u16 = 0x0100;

/// Stack pointer start-up value.
const SP_INIT: u8 = 0xFD;

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory exclusively and is generic over the memory
/// implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xA9); // LDA #$42
/// memory.write(0x8001, 0x42);
///
/// let mut cpu = CPU::new(memory);
/// let cycles = cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8002);
/// assert_eq!(cycles, 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus, in the 6502 power-on
    /// state: PC loaded from the reset vector at 0xFFFC/0xFFFD
    /// (little-endian), SP = 0xFD, InterruptDisable and the unused bit
    /// set, everything else zeroed.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: SP_INIT,
            status: Status::power_on(),
            cycles: 0,
            memory,
        };
        cpu.pc = cpu.read_word(RESET_VECTOR);
        cpu
    }

    /// Re-runs the power-on sequence against the owned memory: registers
    /// cleared, SP and status to their start-up values, PC reloaded from
    /// the reset vector. The cycle counter restarts at zero.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = SP_INIT;
        self.status = Status::power_on();
        self.cycles = 0;
        self.pc = self.read_word(RESET_VECTOR);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// The returned count is the descriptor's base cost plus +1 for a
    /// page-crossing read, +1 for a taken branch, and +1 more for a taken
    /// branch that lands on a different page. The cumulative total is
    /// available via [`CPU::cycles`].
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] for unassigned
    /// opcode bytes. PC has already advanced past the byte, so execution
    /// can continue after the error is observed.
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let operand_pc = self.pc.wrapping_add(1);
        self.pc = self.pc.wrapping_add(metadata.size as u16);

        let extra = self.execute(opcode, metadata.mnemonic, metadata.mode, operand_pc)?;

        let total = metadata.cycles as u32 + extra;
        self.cycles += total as u64;
        Ok(total)
    }

    /// Runs the CPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the actual number of cycles consumed (may overshoot the
    /// budget by the tail of the final instruction). Useful for
    /// frame-locked drivers (e.g. 29780 CPU cycles per NTSC frame).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Services a non-maskable interrupt: pushes PC and status (Break
    /// clear), sets InterruptDisable, loads PC from 0xFFFA. Returns the 7
    /// cycles the entry sequence consumes.
    pub fn nmi(&mut self) -> u32 {
        self.service_interrupt(NMI_VECTOR);
        self.cycles += 7;
        7
    }

    /// Services a maskable interrupt request, unless InterruptDisable is
    /// set, in which case nothing happens and 0 is returned. Otherwise
    /// identical to [`CPU::nmi`] but through the 0xFFFE vector.
    pub fn irq(&mut self) -> u32 {
        if self.status.is_set(INTERRUPT_DISABLE) {
            return 0;
        }
        self.service_interrupt(IRQ_VECTOR);
        self.cycles += 7;
        7
    }

    fn service_interrupt(&mut self, vector: u16) {
        let pc = self.pc;
        self.push_word(pc);
        let status = self.status.for_push(false);
        self.push(status);
        self.status.insert(INTERRUPT_DISABLE);
        self.pc = self.read_word(vector);
    }

    /// Snapshot of the full address space as seen through the bus.
    pub fn dump_memory(&self) -> Box<[u8; MEMORY_SIZE]> {
        let mut out = Box::new([0u8; MEMORY_SIZE]);
        for addr in 0..MEMORY_SIZE {
            out[addr] = self.memory.read(addr as u16);
        }
        out
    }

    // ========== Dispatch ==========

    /// Executes one decoded instruction; returns the dynamic extra cycles
    /// (page-cross and branch penalties).
    fn execute(
        &mut self,
        opcode: u8,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        operand_pc: u16,
    ) -> Result<u32, ExecutionError> {
        use Mnemonic::*;

        let extra = match mnemonic {
            // Loads and stores
            LDA => load_store::lda(self, mode, operand_pc),
            LDX => load_store::ldx(self, mode, operand_pc),
            LDY => load_store::ldy(self, mode, operand_pc),
            STA => {
                load_store::sta(self, mode, operand_pc);
                0
            }
            STX => {
                load_store::stx(self, mode, operand_pc);
                0
            }
            STY => {
                load_store::sty(self, mode, operand_pc);
                0
            }

            // Arithmetic and logic
            ADC => alu::adc(self, mode, operand_pc),
            SBC => alu::sbc(self, mode, operand_pc),
            AND => alu::and(self, mode, operand_pc),
            ORA => alu::ora(self, mode, operand_pc),
            EOR => alu::eor(self, mode, operand_pc),
            BIT => {
                alu::bit(self, mode, operand_pc);
                0
            }
            CMP => alu::cmp(self, mode, operand_pc),
            CPX => alu::cpx(self, mode, operand_pc),
            CPY => alu::cpy(self, mode, operand_pc),

            // Shifts and rotates
            ASL => {
                shifts::asl(self, mode, operand_pc);
                0
            }
            LSR => {
                shifts::lsr(self, mode, operand_pc);
                0
            }
            ROL => {
                shifts::rol(self, mode, operand_pc);
                0
            }
            ROR => {
                shifts::ror(self, mode, operand_pc);
                0
            }

            // Increments and decrements
            INC => {
                inc_dec::inc(self, mode, operand_pc);
                0
            }
            DEC => {
                inc_dec::dec(self, mode, operand_pc);
                0
            }
            INX => {
                inc_dec::inx(self);
                0
            }
            INY => {
                inc_dec::iny(self);
                0
            }
            DEX => {
                inc_dec::dex(self);
                0
            }
            DEY => {
                inc_dec::dey(self);
                0
            }

            // Branches
            BPL => branches::bpl(self, mode, operand_pc),
            BMI => branches::bmi(self, mode, operand_pc),
            BVC => branches::bvc(self, mode, operand_pc),
            BVS => branches::bvs(self, mode, operand_pc),
            BCC => branches::bcc(self, mode, operand_pc),
            BCS => branches::bcs(self, mode, operand_pc),
            BNE => branches::bne(self, mode, operand_pc),
            BEQ => branches::beq(self, mode, operand_pc),

            // Transfers
            TAX => {
                transfer::tax(self);
                0
            }
            TAY => {
                transfer::tay(self);
                0
            }
            TXA => {
                transfer::txa(self);
                0
            }
            TYA => {
                transfer::tya(self);
                0
            }
            TSX => {
                transfer::tsx(self);
                0
            }
            TXS => {
                transfer::txs(self);
                0
            }

            // Stack
            PHA => {
                stack::pha(self);
                0
            }
            PHP => {
                stack::php(self);
                0
            }
            PLA => {
                stack::pla(self);
                0
            }
            PLP => {
                stack::plp(self);
                0
            }

            // Flag operations
            CLC => {
                flag_ops::clc(self);
                0
            }
            SEC => {
                flag_ops::sec(self);
                0
            }
            CLI => {
                flag_ops::cli(self);
                0
            }
            SEI => {
                flag_ops::sei(self);
                0
            }
            CLD => {
                flag_ops::cld(self);
                0
            }
            SED => {
                flag_ops::sed(self);
                0
            }
            CLV => {
                flag_ops::clv(self);
                0
            }

            // Control transfer
            JMP => {
                control::jmp(self, mode, operand_pc);
                0
            }
            JSR => {
                control::jsr(self, mode, operand_pc);
                0
            }
            RTS => {
                control::rts(self);
                0
            }
            RTI => {
                control::rti(self);
                0
            }
            BRK => {
                control::brk(self);
                0
            }
            NOP => 0,

            ILL => return Err(ExecutionError::UnimplementedOpcode(opcode)),
        };

        Ok(extra)
    }

    // ========== Operand Resolution ==========

    /// Resolves the effective address for a mode that must have one.
    pub(crate) fn resolve_addr(&self, mode: AddressingMode, operand_pc: u16) -> (u16, bool) {
        match addressing::operand_address(self, mode, operand_pc) {
            Some(resolved) => resolved,
            None => unreachable!("addressing mode {:?} has no effective address", mode),
        }
    }

    /// Reads the operand value for a read-class instruction. Accumulator
    /// mode yields the A register; every other mode dereferences its
    /// resolved address.
    pub(crate) fn operand_value(&self, mode: AddressingMode, operand_pc: u16) -> (u8, bool) {
        match addressing::operand_address(self, mode, operand_pc) {
            Some((addr, crossed)) => (self.memory.read(addr), crossed),
            None => (self.a, false),
        }
    }

    /// Little-endian 16-bit read through the bus.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // ========== Stack Helpers ==========
    //
    // The stack lives on page 0x0100. Push writes at 0x0100 + SP then
    // decrements SP; pull increments SP then reads at 0x0100 + SP.

    pub(crate) fn push(&mut self, value: u8) {
        let addr = STACK_BASE | self.sp as u16;
        self.memory.write(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = STACK_BASE | self.sp as u16;
        self.memory.read(addr)
    }

    /// Pushes a 16-bit value, high byte first (return-address layout).
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value. The full stack address is
    /// 0x0100 + SP; the stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `mask` is set.
    pub fn flag(&self, mask: u8) -> bool {
        self.status.is_set(mask)
    }

    /// Returns the total number of CPU cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus (program loading, test setup).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Mutators ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets or clears the flags in `mask`.
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.status.assign(mask, on);
    }
}

impl<M: MemoryBus> fmt::Display for CPU<M> {
    /// Diagnostic one-line rendering of registers and flags, e.g.
    /// `A:00 X:00 Y:00 SP:FD PC:8000 P:24 [..-.dI..] CYC:0`. Human-readable
    /// only; nothing parses this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.status.bits();
        let mut rendered = String::with_capacity(8);
        for (bit, letter) in [
            (crate::flags::NEGATIVE, 'N'),
            (crate::flags::OVERFLOW, 'V'),
            (crate::flags::UNUSED, '-'),
            (crate::flags::BREAK, 'B'),
            (crate::flags::DECIMAL, 'D'),
            (crate::flags::INTERRUPT_DISABLE, 'I'),
            (crate::flags::ZERO, 'Z'),
            (crate::flags::CARRY, 'C'),
        ] {
            rendered.push(if p & bit != 0 { letter } else { '.' });
        }
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:{:02X} [{}] CYC:{}",
            self.a, self.x, self.y, self.sp, self.pc, p, rendered, self.cycles
        )
    }
}
