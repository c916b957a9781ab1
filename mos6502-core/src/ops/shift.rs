use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;

/// The shift/rotate family is read-modify-write: the addressing mode's
/// page-cross penalty never applies to it (the table's base cycle count
/// already assumes the worst case), so these read through [`super::read_operand`]
/// rather than the penalty-flagging variant.
pub(crate) fn asl<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let carry = value & 0x80 != 0;
    let result = value << 1;
    super::write_operand(cpu, operand, result);
    let mut flags = cpu.flags();
    flags.carry = carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

pub(crate) fn lsr<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let carry = value & 0x01 != 0;
    let result = value >> 1;
    super::write_operand(cpu, operand, result);
    let mut flags = cpu.flags();
    flags.carry = carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

pub(crate) fn rol<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let old_carry = cpu.flags().carry;
    let new_carry = value & 0x80 != 0;
    let result = (value << 1) | (old_carry as u8);
    super::write_operand(cpu, operand, result);
    let mut flags = cpu.flags();
    flags.carry = new_carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

pub(crate) fn ror<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let old_carry = cpu.flags().carry;
    let new_carry = value & 0x01 != 0;
    let result = (value >> 1) | ((old_carry as u8) << 7);
    super::write_operand(cpu, operand, result);
    let mut flags = cpu.flags();
    flags.carry = new_carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}
