use crate::bus::Bus;
use crate::cpu::Cpu;

macro_rules! flag_setter {
    ($name:ident, $field:ident, $value:expr) => {
        pub(crate) fn $name<B: Bus>(cpu: &mut Cpu<B>) {
            let mut flags = cpu.flags();
            flags.$field = $value;
            cpu.set_flags(flags);
        }
    };
}

flag_setter!(clc, carry, false);
flag_setter!(sec, carry, true);
flag_setter!(cli, interrupt_disable, false);
flag_setter!(sei, interrupt_disable, true);
flag_setter!(cld, decimal, false);
flag_setter!(sed, decimal, true);
flag_setter!(clv, overflow, false);
