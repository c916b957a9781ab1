use crate::bus::Bus;
use crate::cpu::Cpu;

pub(crate) fn pha<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.push_u8(cpu.a());
}

/// PHP always pushes with Break=1, regardless of how the flag would read
/// on a bare [`Cpu::status`] call.
pub(crate) fn php<B: Bus>(cpu: &mut Cpu<B>) {
    let byte = cpu.flags().pack(true);
    cpu.push_u8(byte);
}

pub(crate) fn pla<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pull_u8();
    cpu.set_a(value);
    super::update_nz(cpu, value);
}

/// PLP discards whatever Break/Unused bits were on the stack, same as
/// [`Cpu::set_status`].
pub(crate) fn plp<B: Bus>(cpu: &mut Cpu<B>) {
    let byte = cpu.pull_u8();
    cpu.set_status(byte);
}
