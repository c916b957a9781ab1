use crate::bus::Bus;
use crate::cpu::Cpu;

/// The ten distinct ways a 6502 instruction can reference its operand.
/// `Relative` exists only for branches and is resolved specially by the
/// branch operations (see `ops::branch`), not through the generic
/// penalty-address bookkeeping the other indexed modes use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

/// Where an operand lives once the addressing mode has been resolved.
/// Implied instructions have no operand at all; accumulator-mode
/// instructions operate on the `A` register in place; everything else
/// resolves to a 16-bit effective address on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Address(u16),
}

impl<B: Bus> Cpu<B> {
    /// Decode the operand for `mode`, consuming 0, 1, or 2 bytes at `pc`
    /// and advancing `pc` past them. Sets `penalty_address` when absolute
    /// indexed or (indirect),Y crosses a page boundary — the addressing
    /// mode's business, never the operation's.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Address(addr)
            }
            AddressingMode::ZeroPage => {
                let addr = self.next_u8() as u16;
                Operand::Address(addr)
            }
            AddressingMode::ZeroPageX => {
                let addr = self.next_u8().wrapping_add(self.x) as u16;
                Operand::Address(addr)
            }
            AddressingMode::ZeroPageY => {
                let addr = self.next_u8().wrapping_add(self.y) as u16;
                Operand::Address(addr)
            }
            // The branch target; page-crossing here is accounted for by
            // the branch operation itself (spec: "branch handles").
            AddressingMode::Relative => {
                let offset = self.next_u8() as i8;
                let addr = self.pc.wrapping_add(offset as u16);
                Operand::Address(addr)
            }
            AddressingMode::Absolute => {
                let addr = self.next_u16();
                Operand::Address(addr)
            }
            AddressingMode::AbsoluteX => {
                let base = self.next_u16();
                let addr = base.wrapping_add(self.x as u16);
                self.note_page_cross(base, addr);
                Operand::Address(addr)
            }
            AddressingMode::AbsoluteY => {
                let base = self.next_u16();
                let addr = base.wrapping_add(self.y as u16);
                self.note_page_cross(base, addr);
                Operand::Address(addr)
            }
            // Reproduces the documented NMOS hardware bug: the high byte
            // is fetched from (ptr & 0xFF00) | ((ptr + 1) & 0xFF) — the
            // low byte of the pointer wraps without carrying into the
            // high byte.
            AddressingMode::Indirect => {
                let ptr = self.next_u16();
                let lo = self.bus.read(ptr);
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.bus.read(hi_addr);
                Operand::Address(u16::from_le_bytes([lo, hi]))
            }
            // (Indirect,X): the zero-page pointer is formed by (op + X),
            // wrapping within zero page before either byte is read.
            AddressingMode::IndirectX => {
                let zp = self.next_u8().wrapping_add(self.x);
                let lo = self.bus.read(zp as u16);
                let hi = self.bus.read(zp.wrapping_add(1) as u16);
                Operand::Address(u16::from_le_bytes([lo, hi]))
            }
            // (Indirect),Y: the pointer itself wraps within zero page, but
            // Y is added to the resulting 16-bit address afterwards (which
            // may legitimately cross a page — that's the penalty case).
            AddressingMode::IndirectY => {
                let zp = self.next_u8();
                let lo = self.bus.read(zp as u16);
                let hi = self.bus.read(zp.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                self.note_page_cross(base, addr);
                Operand::Address(addr)
            }
        }
    }

    fn note_page_cross(&mut self, base: u16, offset: u16) {
        if base & 0xFF00 != offset & 0xFF00 {
            self.penalty_address = true;
        }
    }
}
