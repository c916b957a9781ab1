use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;

pub(crate) fn lda<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    cpu.set_a(value);
    super::update_nz(cpu, value);
}

pub(crate) fn ldx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    cpu.set_x(value);
    super::update_nz(cpu, value);
}

pub(crate) fn ldy<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    cpu.set_y(value);
    super::update_nz(cpu, value);
}

pub(crate) fn sta<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    super::write_operand(cpu, operand, cpu.a());
}

pub(crate) fn stx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    super::write_operand(cpu, operand, cpu.x());
}

pub(crate) fn sty<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    super::write_operand(cpu, operand, cpu.y());
}
