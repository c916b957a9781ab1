use crate::bus::Bus;
use crate::cpu::Cpu;

pub(crate) fn tax<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.a();
    cpu.set_x(value);
    super::update_nz(cpu, value);
}

pub(crate) fn tay<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.a();
    cpu.set_y(value);
    super::update_nz(cpu, value);
}

pub(crate) fn txa<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.x();
    cpu.set_a(value);
    super::update_nz(cpu, value);
}

pub(crate) fn tya<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.y();
    cpu.set_a(value);
    super::update_nz(cpu, value);
}

pub(crate) fn tsx<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.sp();
    cpu.set_x(value);
    super::update_nz(cpu, value);
}

/// TXS, uniquely among the transfers, does not touch N or Z.
pub(crate) fn txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_sp(cpu.x());
}
