use crate::addressing::AddressingMode;

/// The mnemonic-level operation an opcode byte dispatches to. Several
/// illegal opcodes reuse a documented operation's implementation verbatim
/// (the duplicate SBC at 0xEB, and every illegal NOP), which is why there
/// are fewer `Operation` variants than opcode bytes.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Documented load/store/transfer.
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Documented stack.
    Pha,
    Php,
    Pla,
    Plp,
    // Documented flags.
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,
    // Documented logic.
    And,
    Ora,
    Eor,
    Bit,
    // Documented shift/rotate.
    Asl,
    Lsr,
    Rol,
    Ror,
    // Documented arithmetic.
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    // Documented branches.
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvs,
    Bvc,
    // Documented jumps/subroutines/interrupts.
    Jmp,
    Jsr,
    Rts,
    Rti,
    Brk,
    // Documented no-op.
    Nop,
    // Illegal read-modify-write combos.
    Slo,
    Rla,
    Sre,
    Rra,
    Dcp,
    Isc,
    // Illegal store combos.
    Sax,
    Lax,
    // Illegal "clean" combos.
    Anc,
    Alr,
    Arr,
    Sbx,
    Las,
    // Unstable illegals: stable-convention formulas only, see ops::illegal.
    Ane,
    Lxa,
    Sha,
    Shx,
    Shy,
    Tas,
    // Halts the CPU until reset.
    Jam,
}

/// One of the 256 fixed entries in the NMOS 6502 dispatch table: which
/// addressing mode decodes the operand, which operation executes, and the
/// base cycle count before any page-cross/branch/BCD penalty is added.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    pub mode: AddressingMode,
    pub op: Operation,
    pub cycles: u8,
}

const fn e(mode: AddressingMode, op: Operation, cycles: u8) -> OpcodeEntry {
    OpcodeEntry { mode, op, cycles }
}

/// The full NMOS 6502 opcode table, reproduced verbatim from the published
/// references (e.g. http://www.oxyron.de/html/opcodes02.html), including
/// every undocumented opcode. Every byte has an entry; none is ever
/// missing. Built once as a `const`, not a runtime-initialized singleton.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeEntry; 256] = {
    use AddressingMode::*;
    use Operation::*;
    [
        // 0x00-0x0F
        e(Implied, Brk, 7), e(IndirectX, Ora, 6), e(Implied, Jam, 2), e(IndirectX, Slo, 8),
        e(ZeroPage, Nop, 3), e(ZeroPage, Ora, 3), e(ZeroPage, Asl, 5), e(ZeroPage, Slo, 5),
        e(Implied, Php, 3), e(Immediate, Ora, 2), e(Accumulator, Asl, 2), e(Immediate, Anc, 2),
        e(Absolute, Nop, 4), e(Absolute, Ora, 4), e(Absolute, Asl, 6), e(Absolute, Slo, 6),
        // 0x10-0x1F
        e(Relative, Bpl, 2), e(IndirectY, Ora, 5), e(Implied, Jam, 2), e(IndirectY, Slo, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, Ora, 4), e(ZeroPageX, Asl, 6), e(ZeroPageX, Slo, 6),
        e(Implied, Clc, 2), e(AbsoluteY, Ora, 4), e(Implied, Nop, 2), e(AbsoluteY, Slo, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, Ora, 4), e(AbsoluteX, Asl, 7), e(AbsoluteX, Slo, 7),
        // 0x20-0x2F
        e(Absolute, Jsr, 6), e(IndirectX, And, 6), e(Implied, Jam, 2), e(IndirectX, Rla, 8),
        e(ZeroPage, Bit, 3), e(ZeroPage, And, 3), e(ZeroPage, Rol, 5), e(ZeroPage, Rla, 5),
        e(Implied, Plp, 4), e(Immediate, And, 2), e(Accumulator, Rol, 2), e(Immediate, Anc, 2),
        e(Absolute, Bit, 4), e(Absolute, And, 4), e(Absolute, Rol, 6), e(Absolute, Rla, 6),
        // 0x30-0x3F
        e(Relative, Bmi, 2), e(IndirectY, And, 5), e(Implied, Jam, 2), e(IndirectY, Rla, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, And, 4), e(ZeroPageX, Rol, 6), e(ZeroPageX, Rla, 6),
        e(Implied, Sec, 2), e(AbsoluteY, And, 4), e(Implied, Nop, 2), e(AbsoluteY, Rla, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, And, 4), e(AbsoluteX, Rol, 7), e(AbsoluteX, Rla, 7),
        // 0x40-0x4F
        e(Implied, Rti, 6), e(IndirectX, Eor, 6), e(Implied, Jam, 2), e(IndirectX, Sre, 8),
        e(ZeroPage, Nop, 3), e(ZeroPage, Eor, 3), e(ZeroPage, Lsr, 5), e(ZeroPage, Sre, 5),
        e(Implied, Pha, 3), e(Immediate, Eor, 2), e(Accumulator, Lsr, 2), e(Immediate, Alr, 2),
        e(Absolute, Jmp, 3), e(Absolute, Eor, 4), e(Absolute, Lsr, 6), e(Absolute, Sre, 6),
        // 0x50-0x5F
        e(Relative, Bvc, 2), e(IndirectY, Eor, 5), e(Implied, Jam, 2), e(IndirectY, Sre, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, Eor, 4), e(ZeroPageX, Lsr, 6), e(ZeroPageX, Sre, 6),
        e(Implied, Cli, 2), e(AbsoluteY, Eor, 4), e(Implied, Nop, 2), e(AbsoluteY, Sre, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, Eor, 4), e(AbsoluteX, Lsr, 7), e(AbsoluteX, Sre, 7),
        // 0x60-0x6F
        e(Implied, Rts, 6), e(IndirectX, Adc, 6), e(Implied, Jam, 2), e(IndirectX, Rra, 8),
        e(ZeroPage, Nop, 3), e(ZeroPage, Adc, 3), e(ZeroPage, Ror, 5), e(ZeroPage, Rra, 5),
        e(Implied, Pla, 4), e(Immediate, Adc, 2), e(Accumulator, Ror, 2), e(Immediate, Arr, 2),
        e(Indirect, Jmp, 5), e(Absolute, Adc, 4), e(Absolute, Ror, 6), e(Absolute, Rra, 6),
        // 0x70-0x7F
        e(Relative, Bvs, 2), e(IndirectY, Adc, 5), e(Implied, Jam, 2), e(IndirectY, Rra, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, Adc, 4), e(ZeroPageX, Ror, 6), e(ZeroPageX, Rra, 6),
        e(Implied, Sei, 2), e(AbsoluteY, Adc, 4), e(Implied, Nop, 2), e(AbsoluteY, Rra, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, Adc, 4), e(AbsoluteX, Ror, 7), e(AbsoluteX, Rra, 7),
        // 0x80-0x8F
        e(Immediate, Nop, 2), e(IndirectX, Sta, 6), e(Immediate, Nop, 2), e(IndirectX, Sax, 6),
        e(ZeroPage, Sty, 3), e(ZeroPage, Sta, 3), e(ZeroPage, Stx, 3), e(ZeroPage, Sax, 3),
        e(Implied, Dey, 2), e(Immediate, Nop, 2), e(Implied, Txa, 2), e(Immediate, Ane, 2),
        e(Absolute, Sty, 4), e(Absolute, Sta, 4), e(Absolute, Stx, 4), e(Absolute, Sax, 4),
        // 0x90-0x9F
        e(Relative, Bcc, 2), e(IndirectY, Sta, 6), e(Implied, Jam, 2), e(IndirectY, Sha, 6),
        e(ZeroPageX, Sty, 4), e(ZeroPageX, Sta, 4), e(ZeroPageY, Stx, 4), e(ZeroPageY, Sax, 4),
        e(Implied, Tya, 2), e(AbsoluteY, Sta, 5), e(Implied, Txs, 2), e(AbsoluteY, Tas, 5),
        e(AbsoluteX, Shy, 5), e(AbsoluteX, Sta, 5), e(AbsoluteY, Shx, 5), e(AbsoluteY, Sha, 5),
        // 0xA0-0xAF
        e(Immediate, Ldy, 2), e(IndirectX, Lda, 6), e(Immediate, Ldx, 2), e(IndirectX, Lax, 6),
        e(ZeroPage, Ldy, 3), e(ZeroPage, Lda, 3), e(ZeroPage, Ldx, 3), e(ZeroPage, Lax, 3),
        e(Implied, Tay, 2), e(Immediate, Lda, 2), e(Implied, Tax, 2), e(Immediate, Lxa, 2),
        e(Absolute, Ldy, 4), e(Absolute, Lda, 4), e(Absolute, Ldx, 4), e(Absolute, Lax, 4),
        // 0xB0-0xBF
        e(Relative, Bcs, 2), e(IndirectY, Lda, 5), e(Implied, Jam, 2), e(IndirectY, Lax, 5),
        e(ZeroPageX, Ldy, 4), e(ZeroPageX, Lda, 4), e(ZeroPageY, Ldx, 4), e(ZeroPageY, Lax, 4),
        e(Implied, Clv, 2), e(AbsoluteY, Lda, 4), e(Implied, Tsx, 2), e(AbsoluteY, Las, 4),
        e(AbsoluteX, Ldy, 4), e(AbsoluteX, Lda, 4), e(AbsoluteY, Ldx, 4), e(AbsoluteY, Lax, 4),
        // 0xC0-0xCF
        e(Immediate, Cpy, 2), e(IndirectX, Cmp, 6), e(Immediate, Nop, 2), e(IndirectX, Dcp, 8),
        e(ZeroPage, Cpy, 3), e(ZeroPage, Cmp, 3), e(ZeroPage, Dec, 5), e(ZeroPage, Dcp, 5),
        e(Implied, Iny, 2), e(Immediate, Cmp, 2), e(Implied, Dex, 2), e(Immediate, Sbx, 2),
        e(Absolute, Cpy, 4), e(Absolute, Cmp, 4), e(Absolute, Dec, 6), e(Absolute, Dcp, 6),
        // 0xD0-0xDF
        e(Relative, Bne, 2), e(IndirectY, Cmp, 5), e(Implied, Jam, 2), e(IndirectY, Dcp, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, Cmp, 4), e(ZeroPageX, Dec, 6), e(ZeroPageX, Dcp, 6),
        e(Implied, Cld, 2), e(AbsoluteY, Cmp, 4), e(Implied, Nop, 2), e(AbsoluteY, Dcp, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, Cmp, 4), e(AbsoluteX, Dec, 7), e(AbsoluteX, Dcp, 7),
        // 0xE0-0xEF
        e(Immediate, Cpx, 2), e(IndirectX, Sbc, 6), e(Immediate, Nop, 2), e(IndirectX, Isc, 8),
        e(ZeroPage, Cpx, 3), e(ZeroPage, Sbc, 3), e(ZeroPage, Inc, 5), e(ZeroPage, Isc, 5),
        e(Implied, Inx, 2), e(Immediate, Sbc, 2), e(Implied, Nop, 2), e(Immediate, Sbc, 2),
        e(Absolute, Cpx, 4), e(Absolute, Sbc, 4), e(Absolute, Inc, 6), e(Absolute, Isc, 6),
        // 0xF0-0xFF
        e(Relative, Beq, 2), e(IndirectY, Sbc, 5), e(Implied, Jam, 2), e(IndirectY, Isc, 8),
        e(ZeroPageX, Nop, 4), e(ZeroPageX, Sbc, 4), e(ZeroPageX, Inc, 6), e(ZeroPageX, Isc, 6),
        e(Implied, Sed, 2), e(AbsoluteY, Sbc, 4), e(Implied, Nop, 2), e(AbsoluteY, Isc, 7),
        e(AbsoluteX, Nop, 4), e(AbsoluteX, Sbc, 4), e(AbsoluteX, Inc, 7), e(AbsoluteX, Isc, 7),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_has_an_entry() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn jam_opcodes_match_the_documented_set() {
        let jam_bytes = [
            0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
        ];
        for byte in jam_bytes {
            assert_eq!(OPCODE_TABLE[byte as usize].op, Operation::Jam);
        }
        let jam_count = OPCODE_TABLE.iter().filter(|e| e.op == Operation::Jam).count();
        assert_eq!(jam_count, jam_bytes.len());
    }

    #[test]
    fn brk_is_seven_cycles() {
        assert_eq!(OPCODE_TABLE[0x00].cycles, 7);
    }
}
