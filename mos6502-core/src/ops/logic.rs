use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;

pub(crate) fn and<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    let result = cpu.a() & value;
    cpu.set_a(result);
    super::update_nz(cpu, result);
}

pub(crate) fn ora<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    let result = cpu.a() | value;
    cpu.set_a(result);
    super::update_nz(cpu, result);
}

pub(crate) fn eor<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    let result = cpu.a() ^ value;
    cpu.set_a(result);
    super::update_nz(cpu, result);
}

/// BIT never takes an indexed addressing mode, so the page-cross penalty
/// this read requests is always moot, but there's no harm asking for it.
pub(crate) fn bit<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    let mut flags = cpu.flags();
    flags.zero = (cpu.a() & value) == 0;
    flags.overflow = value & 0x40 != 0;
    flags.negative = value & 0x80 != 0;
    cpu.set_flags(flags);
}
