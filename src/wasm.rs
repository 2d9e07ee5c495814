//! WebAssembly bindings for the CPU core.
//!
//! Provides a JavaScript-callable emulator handle: construct with the
//! desired PRG mirroring, poke a program into memory, then step and
//! inspect registers. Enabled with the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::{MemoryBus, MirroredMemory, CPU};

/// JavaScript-facing emulator handle owning one CPU and its memory map.
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<MirroredMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Creates an emulator over a zeroed NES address map.
    ///
    /// The CPU samples the reset vector at construction; call `reset`
    /// after loading a program that supplies one.
    #[wasm_bindgen(constructor)]
    pub fn new(mirror_prg: bool) -> Emulator {
        Emulator {
            cpu: CPU::new(MirroredMemory::new(mirror_prg)),
        }
    }

    /// Writes one byte through the bus (mirroring applied).
    pub fn write_mem(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Reads one byte through the bus (mirroring applied).
    pub fn read_mem(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Copies a program image into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.cpu
                .memory_mut()
                .write(addr.wrapping_add(offset as u16), byte);
        }
    }

    /// Re-runs the power-on sequence (PC from the reset vector).
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction; returns the cycles consumed.
    ///
    /// An unassigned opcode byte surfaces as a JavaScript error carrying
    /// the offending byte value.
    pub fn step(&mut self) -> Result<u32, JsValue> {
        self.cpu
            .step()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// One-line diagnostic rendering of registers and flags.
    pub fn trace(&self) -> String {
        self.cpu.to_string()
    }
}
