use crate::addressing::Operand;
use crate::bus::Bus;
use crate::constants::InterruptVectors;
use crate::cpu::Cpu;

pub(crate) fn jmp<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    cpu.set_pc(super::operand_address(operand));
}

/// JSR pushes the address of its own last byte (`pc - 1` at the point the
/// operand has already been decoded), not the address of the next
/// instruction; [`rts`] pulls that value back and adds one to compensate.
pub(crate) fn jsr<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let target = super::operand_address(operand);
    let return_addr = cpu.pc().wrapping_sub(1);
    cpu.push_u16(return_addr);
    cpu.set_pc(target);
}

pub(crate) fn rts<B: Bus>(cpu: &mut Cpu<B>) {
    let addr = cpu.pull_u16();
    cpu.set_pc(addr.wrapping_add(1));
}

/// RTI pulls status then pc, the reverse order IRQ/NMI/BRK pushed them in,
/// and performs no `+1` adjustment on the pulled pc — unlike RTS, the
/// pushed value here is already the true resume address.
pub(crate) fn rti<B: Bus>(cpu: &mut Cpu<B>) {
    let status = cpu.pull_u8();
    cpu.set_status(status);
    let addr = cpu.pull_u16();
    cpu.set_pc(addr);
}

/// Software BRK is a two-byte instruction: the byte after the opcode is a
/// padding/signature byte that is fetched and discarded, and the pushed
/// return address points past it. Pushes status with Break=1, same as PHP.
pub(crate) fn brk<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.next_u8();
    let return_addr = cpu.pc();
    cpu.push_u16(return_addr);
    let status = cpu.flags().pack(true);
    cpu.push_u8(status);
    let mut flags = cpu.flags();
    flags.interrupt_disable = true;
    cpu.set_flags(flags);
    let vector = cpu.bus_mut().read_u16(InterruptVectors::IrqBrk as u16);
    cpu.set_pc(vector);
}

#[cfg(test)]
mod tests {
    use crate::cpu::Cpu;
    use crate::test_util::VecBus;

    #[test]
    fn jsr_then_rts_roundtrips_to_the_instruction_after_jsr() {
        let mut bus = VecBus::new();
        bus.load(0x0200, &[0x20, 0x00, 0x03]); // JSR $0300
        bus.load(0x0300, &[0x60]); // RTS
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x0200);
        cpu.set_sp(0xFD);

        cpu.step(); // JSR
        assert_eq!(cpu.pc(), 0x0300);

        cpu.step(); // RTS
        assert_eq!(cpu.pc(), 0x0203);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn brk_then_rti_roundtrips_flags_and_pc() {
        let mut bus = VecBus::new();
        bus.load(0x0200, &[0x00, 0x00]); // BRK, padding byte
        bus.load(0xFFFE, &[0x00, 0x04]); // IRQ/BRK vector -> $0400
        bus.load(0x0400, &[0x40]); // RTI
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x0200);
        cpu.set_sp(0xFD);
        let mut flags = cpu.flags();
        flags.carry = true;
        flags.negative = true;
        cpu.set_flags(flags);

        cpu.step(); // BRK
        assert_eq!(cpu.pc(), 0x0400);
        assert!(cpu.flags().interrupt_disable);

        cpu.step(); // RTI
        assert_eq!(cpu.pc(), 0x0202);
        assert!(cpu.flags().carry);
        assert!(cpu.flags().negative);
        assert_eq!(cpu.sp(), 0xFD);
    }
}
