//! Opcode table validation tests.
//!
//! Verifies that the opcode metadata table is complete and internally
//! consistent.

use nes6502::{instruction_length, AddressingMode, Mnemonic, OPCODE_TABLE};

#[test]
fn test_table_has_256_entries() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_documented_and_sentinel_counts() {
    let documented = OPCODE_TABLE
        .iter()
        .filter(|m| m.mnemonic != Mnemonic::ILL)
        .count();
    assert_eq!(documented, 151, "NMOS 6502 has 151 documented opcodes");
    assert_eq!(256 - documented, 105);
}

#[test]
fn test_sizes_are_pure_function_of_mode() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(
            metadata.size,
            instruction_length(metadata.mode),
            "opcode {:#04X} size disagrees with its addressing mode",
            opcode
        );
        assert!(metadata.size >= 1 && metadata.size <= 3);
    }
}

#[test]
fn test_documented_opcodes_have_nonzero_cycles() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if metadata.mnemonic != Mnemonic::ILL {
            assert!(
                metadata.cycles > 0,
                "documented opcode {:#04X} has zero cycles",
                opcode
            );
        } else {
            assert_eq!(metadata.cycles, 0);
            assert_eq!(metadata.size, 1);
        }
    }
}

#[test]
fn test_lda_family_descriptors() {
    let expected = [
        (0xA9u8, AddressingMode::Immediate, 2u8),
        (0xA5, AddressingMode::ZeroPage, 3),
        (0xB5, AddressingMode::ZeroPageX, 4),
        (0xAD, AddressingMode::Absolute, 4),
        (0xBD, AddressingMode::AbsoluteX, 4),
        (0xB9, AddressingMode::AbsoluteY, 4),
        (0xA1, AddressingMode::IndirectX, 6),
        (0xB1, AddressingMode::IndirectY, 5),
    ];
    for (opcode, mode, cycles) in expected {
        let m = &OPCODE_TABLE[opcode as usize];
        assert_eq!(m.mnemonic, Mnemonic::LDA);
        assert_eq!(m.mode, mode);
        assert_eq!(m.cycles, cycles);
    }
}

#[test]
fn test_branch_opcodes_are_relative() {
    for opcode in [0x10u8, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let m = &OPCODE_TABLE[opcode as usize];
        assert_eq!(m.mode, AddressingMode::Relative);
        assert_eq!(m.cycles, 2);
        assert_eq!(m.size, 2);
    }
}

#[test]
fn test_store_indexed_variants_carry_fixed_cost() {
    // Stores never take the dynamic page-cross penalty; their indexed
    // variants bake the extra cycle into the base cost instead.
    assert_eq!(OPCODE_TABLE[0x9D].cycles, 5); // STA abs,X
    assert_eq!(OPCODE_TABLE[0x99].cycles, 5); // STA abs,Y
    assert_eq!(OPCODE_TABLE[0x91].cycles, 6); // STA (zp),Y
}

#[test]
fn test_known_illegal_bytes_are_sentinels() {
    for opcode in [0x02u8, 0x03, 0x04, 0x07, 0x0B, 0x1A, 0x80, 0xFF] {
        assert_eq!(
            OPCODE_TABLE[opcode as usize].mnemonic,
            Mnemonic::ILL,
            "byte {:#04X} should be unassigned",
            opcode
        );
    }
}
