use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;

use super::arith;

/// ASL a memory operand, then OR the result into A.
pub(crate) fn slo<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let carry = value & 0x80 != 0;
    let shifted = value << 1;
    super::write_operand(cpu, operand, shifted);
    let result = cpu.a() | shifted;
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.carry = carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

/// ROL a memory operand, then AND the result into A.
pub(crate) fn rla<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let old_carry = cpu.flags().carry;
    let new_carry = value & 0x80 != 0;
    let rotated = (value << 1) | (old_carry as u8);
    super::write_operand(cpu, operand, rotated);
    let result = cpu.a() & rotated;
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.carry = new_carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

/// LSR a memory operand, then EOR the result into A.
pub(crate) fn sre<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let carry = value & 0x01 != 0;
    let shifted = value >> 1;
    super::write_operand(cpu, operand, shifted);
    let result = cpu.a() ^ shifted;
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.carry = carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

/// ROR a memory operand, then ADC the rotated value into A. The rotate's
/// carry-out feeds directly into the ADC as its carry-in, decimal mode
/// included.
pub(crate) fn rra<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let old_carry = cpu.flags().carry;
    let new_carry = value & 0x01 != 0;
    let rotated = (value >> 1) | ((old_carry as u8) << 7);
    super::write_operand(cpu, operand, rotated);
    let mut flags = cpu.flags();
    flags.carry = new_carry;
    cpu.set_flags(flags);
    arith::adc_value(cpu, rotated);
}

/// DEC a memory operand, then CMP it against A.
pub(crate) fn dcp<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand).wrapping_sub(1);
    super::write_operand(cpu, operand, value);
    let a = cpu.a();
    let mut flags = cpu.flags();
    flags.compare(a, value);
    cpu.set_flags(flags);
}

/// INC a memory operand, then SBC it from A.
pub(crate) fn isc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand).wrapping_add(1);
    super::write_operand(cpu, operand, value);
    arith::sbc_value(cpu, value);
}

/// Stores `A & X` without touching either register.
pub(crate) fn sax<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.a() & cpu.x();
    super::write_operand(cpu, operand, value);
}

/// Loads the same value into both A and X.
pub(crate) fn lax<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    cpu.set_a(value);
    cpu.set_x(value);
    super::update_nz(cpu, value);
}

/// AND immediate, then copy the result's sign bit into carry (as if an ASL
/// had followed).
pub(crate) fn anc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let result = cpu.a() & value;
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.set_nz(result);
    flags.carry = flags.negative;
    cpu.set_flags(flags);
}

/// AND immediate, then LSR the accumulator.
pub(crate) fn alr<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let anded = cpu.a() & value;
    let carry = anded & 0x01 != 0;
    let result = anded >> 1;
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.carry = carry;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

/// AND immediate, then ROR the accumulator, with the well-known bit-5/6
/// derived carry and overflow (decimal mode does not further adjust these
/// on NMOS silicon the way ADC/SBC do).
pub(crate) fn arr<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let anded = cpu.a() & value;
    let old_carry = cpu.flags().carry;
    let result = (anded >> 1) | ((old_carry as u8) << 7);
    cpu.set_a(result);
    let mut flags = cpu.flags();
    flags.set_nz(result);
    flags.carry = result & 0x40 != 0;
    flags.overflow = ((result >> 6) ^ (result >> 5)) & 0x01 != 0;
    cpu.set_flags(flags);
}

/// `(A & X) - operand`, no borrow in, result into X.
pub(crate) fn sbx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand(cpu, operand);
    let anded = cpu.a() & cpu.x();
    let result = anded.wrapping_sub(value);
    cpu.set_x(result);
    let mut flags = cpu.flags();
    flags.carry = anded >= value;
    flags.set_nz(result);
    cpu.set_flags(flags);
}

/// `A = X = SP = operand & SP`.
pub(crate) fn las<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = super::read_operand_with_penalty(cpu, operand);
    let result = value & cpu.sp();
    cpu.set_a(result);
    cpu.set_x(result);
    cpu.set_sp(result);
    super::update_nz(cpu, result);
}

/// Unstable on real silicon: its result depends on analog bus-capacitance
/// effects that vary chip to chip. Uses the commonly adopted stable
/// emulation constant several test ROMs assume for the "magic" OR term.
pub(crate) fn ane<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    const MAGIC: u8 = 0xEE;
    let value = super::read_operand(cpu, operand);
    let result = (cpu.a() | MAGIC) & cpu.x() & value;
    cpu.set_a(result);
    super::update_nz(cpu, result);
}

/// Unstable, same caveat as [`ane`].
pub(crate) fn lxa<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    const MAGIC: u8 = 0xEE;
    let value = super::read_operand(cpu, operand);
    let result = (cpu.a() | MAGIC) & value;
    cpu.set_a(result);
    cpu.set_x(result);
    super::update_nz(cpu, result);
}

/// Stores `A & X & (high_byte(addr) + 1)`. Unstable when the indexed
/// addressing actually crosses a page; always uses the documented formula.
pub(crate) fn sha<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let addr = super::operand_address(operand);
    let high = (addr >> 8) as u8;
    let value = cpu.a() & cpu.x() & high.wrapping_add(1);
    cpu.bus_mut().write(addr, value);
}

pub(crate) fn shx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let addr = super::operand_address(operand);
    let high = (addr >> 8) as u8;
    let value = cpu.x() & high.wrapping_add(1);
    cpu.bus_mut().write(addr, value);
}

pub(crate) fn shy<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let addr = super::operand_address(operand);
    let high = (addr >> 8) as u8;
    let value = cpu.y() & high.wrapping_add(1);
    cpu.bus_mut().write(addr, value);
}

/// `SP ← A & X`, then stores `SP & (high_byte(addr) + 1)`, same unstable
/// caveat as [`sha`]/[`shx`]/[`shy`].
pub(crate) fn tas<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let addr = super::operand_address(operand);
    let sp = cpu.a() & cpu.x();
    cpu.set_sp(sp);
    let high = (addr >> 8) as u8;
    let value = sp & high.wrapping_add(1);
    cpu.bus_mut().write(addr, value);
}

#[cfg(test)]
mod tests {
    use crate::addressing::Operand;
    use crate::cpu::Cpu;
    use crate::test_util::VecBus;

    #[test]
    fn sax_stores_a_and_x_without_modifying_either() {
        let mut cpu = Cpu::new(VecBus::new());
        cpu.set_a(0b1100_1100);
        cpu.set_x(0b1010_1010);
        super::sax(&mut cpu, Operand::Address(0x10));
        assert_eq!(cpu.bus_mut().read(0x10), 0b1000_1000);
        assert_eq!(cpu.a(), 0b1100_1100);
        assert_eq!(cpu.x(), 0b1010_1010);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        let mut cpu = Cpu::new(VecBus::new());
        cpu.bus_mut().write(0x10, 0x05);
        cpu.set_a(0x04);
        super::dcp(&mut cpu, Operand::Address(0x10));
        assert_eq!(cpu.bus_mut().read(0x10), 0x04);
        assert!(cpu.flags().zero);
        assert!(cpu.flags().carry);
    }
}
