use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;

/// Every NOP, documented or illegal, that addresses memory performs the
/// same dummy read real hardware does — which is also why the illegal
/// absolute,X NOPs pay the same conditional page-cross cycle a load would.
pub(crate) fn nop<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    if let Operand::Address(_) = operand {
        super::read_operand_with_penalty(cpu, operand);
    }
}
