use crate::bus::Bus;
use crate::constants::{memory_range, InterruptVectors};
use crate::flags::Flags;
use crate::opcode_table::{Operation, OPCODE_TABLE};
use crate::ops;

/// A cycle-stepped NMOS 6502. Generic over whatever is wired to its address
/// bus: the CPU owns `bus` by value, so a host that needs to observe
/// peripheral state between steps does so through [`Cpu::bus`] /
/// [`Cpu::bus_mut`] rather than through shared interior mutability.
///
/// `new` alone does not produce a runnable CPU: like real silicon, a
/// [`Cpu::reset`] is required before the first [`Cpu::step`] to load `pc`
/// from the reset vector.
pub struct Cpu<B: Bus> {
    pub(crate) bus: B,
    a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    sp: u8,
    pub(crate) pc: u16,
    flags: Flags,
    opcode: u8,
    /// Set by the addressing mode when an indexed/indirect calculation
    /// crosses a page boundary.
    pub(crate) penalty_address: bool,
    /// Set by the operation when it wants the page-cross penalty to apply
    /// (e.g. the read-only addressing modes of ADC/AND/CMP/.../LDA, but not
    /// the read-modify-write shift/inc/dec family, which always pays the
    /// indexed-addressing cycle regardless of whether a page was crossed).
    pub(crate) penalty_opcode: bool,
    cycles: u64,
    halted: bool,
}

impl<B: Bus> Cpu<B> {
    /// Construct a CPU wired to `bus`. Registers and flags start zeroed;
    /// call [`Cpu::reset`] before stepping to reach a defined power-on state.
    pub fn new(bus: B) -> Self {
        Cpu {
            bus,
            a: 0,
            x: 0,
            y: 0,
            sp: 0x00,
            pc: 0,
            flags: Flags::cleared(),
            opcode: 0,
            penalty_address: false,
            penalty_opcode: false,
            cycles: 0,
            halted: false,
        }
    }

    /// Run the RESET sequence: A, X, Y all clear to zero, every flag is
    /// cleared (decimal, carry, even interrupt-disable — this CPU does not
    /// model the "I set after reset" convention some references describe),
    /// `sp` is set to 0xFD, `pc` loads from the reset vector, and `halted`
    /// clears so a JAMmed CPU can run again. Returns the cycle count (7,
    /// matching IRQ/NMI/BRK).
    pub fn reset(&mut self) -> u32 {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.flags = Flags::cleared();
        self.pc = self.bus.read_u16(InterruptVectors::Reset as u16);
        self.halted = false;
        self.cycles = self.cycles.wrapping_add(7);
        7
    }

    /// Fetch, decode and execute one instruction, returning the number of
    /// cycles it took. Returns 0 without consuming a cycle if the CPU is
    /// halted on a JAM opcode. The generic +1 page-cross penalty applies
    /// only when both the addressing mode (`penalty_address`) and the
    /// operation (`penalty_opcode`) agree it should; branch cycle timing is
    /// accounted for separately by the branch operations themselves.
    pub fn step(&mut self) -> i32 {
        if self.halted {
            return 0;
        }
        self.penalty_address = false;
        self.penalty_opcode = false;

        let opcode = self.next_u8();
        self.opcode = opcode;
        let entry = OPCODE_TABLE[opcode as usize];
        let operand = self.resolve_operand(entry.mode);

        if entry.op == Operation::Jam {
            self.halted = true;
            self.cycles = self.cycles.wrapping_add(entry.cycles as u64);
            return entry.cycles as i32;
        }

        let extra_cycles = ops::execute(self, entry.op, operand);
        let mut total = entry.cycles as i32 + extra_cycles;
        if self.penalty_address && self.penalty_opcode {
            total += 1;
        }
        self.cycles = self.cycles.wrapping_add(total as u64);
        total
    }

    /// Maskable interrupt. No-ops (returns 0) when `interrupt_disable` is
    /// set. Otherwise pushes `pc` then the status byte (Break=0, matching
    /// hardware's IRQ/NMI push convention), sets `interrupt_disable`, and
    /// loads `pc` from the IRQ/BRK vector. Always costs 7 cycles when taken.
    pub fn irq(&mut self) -> u32 {
        if self.flags.interrupt_disable {
            return 0;
        }
        self.push_u16(self.pc);
        let status = self.flags.pack(false);
        self.push_u8(status);
        self.flags.interrupt_disable = true;
        self.pc = self.bus.read_u16(InterruptVectors::IrqBrk as u16);
        self.cycles = self.cycles.wrapping_add(7);
        7
    }

    /// Non-maskable interrupt. Identical sequence to [`Cpu::irq`] but is
    /// never masked by `interrupt_disable` and loads `pc` from the NMI
    /// vector instead.
    pub fn nmi(&mut self) -> u32 {
        self.push_u16(self.pc);
        let status = self.flags.pack(false);
        self.push_u8(status);
        self.flags.interrupt_disable = true;
        self.pc = self.bus.read_u16(InterruptVectors::NonMaskableInterrupt as u16);
        self.cycles = self.cycles.wrapping_add(7);
        7
    }

    /// The packed status byte, as PHP/BRK would push it (Break=1). There is
    /// no single caller-independent convention for this bit on a bare
    /// `status()` read, so this getter follows PHP/BRK rather than IRQ/NMI;
    /// see DESIGN.md.
    pub fn status(&self) -> u8 {
        self.flags.pack(true)
    }

    /// Load the six stored flags from `byte`, discarding bits 4 and 5 (they
    /// carry no CPU state).
    pub fn set_status(&mut self, byte: u8) {
        self.flags = Flags::unpack(byte);
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Total cycles executed since construction (wraps at `u64::MAX`,
    /// which in practice never happens).
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Read the byte at `pc` and advance `pc` by one.
    pub(crate) fn next_u8(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Read the little-endian word at `pc` and advance `pc` by two.
    pub(crate) fn next_u16(&mut self) -> u16 {
        let value = self.bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Push a byte onto the page-1 stack, wrapping `sp` from 0x00 to 0xFF.
    pub(crate) fn push_u8(&mut self, value: u8) {
        let addr = u16::from_be_bytes([memory_range::STACK_PAGE, self.sp]);
        self.bus.write(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Push a 16-bit value high byte first, so the matching `pull_u16`
    /// (which reads low then high) reconstructs it correctly.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    /// Pop a byte off the page-1 stack, wrapping `sp` from 0xFF to 0x00.
    pub(crate) fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = u16::from_be_bytes([memory_range::STACK_PAGE, self.sp]);
        self.bus.read(addr)
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::VecBus;

    #[test]
    fn reset_loads_pc_from_vector_and_zeroes_registers() {
        let mut bus = VecBus::new();
        bus.load(0xFFFC, &[0x00, 0x80]);
        let mut cpu = Cpu::new(bus);
        cpu.set_a(0x42);
        cpu.set_x(0x11);
        cpu.set_y(0x22);
        cpu.set_sp(0x33);
        let cycles = cpu.reset();
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.y(), 0);
        assert!(!cpu.halted());
    }

    #[test]
    fn jam_halts_until_reset() {
        let mut bus = VecBus::new();
        bus.load(0xFFFC, &[0x00, 0x80]);
        bus.load(0x8000, &[0x02]); // JAM
        let mut cpu = Cpu::new(bus);
        cpu.reset();

        assert_eq!(cpu.step(), 2);
        assert!(cpu.halted());
        assert_eq!(cpu.step(), 0);
        assert_eq!(cpu.step(), 0);

        cpu.reset();
        assert!(!cpu.halted());
    }

    #[test]
    fn decimal_mode_adc_immediate_costs_one_extra_cycle() {
        let mut bus = VecBus::new();
        bus.load(0x8000, &[0x69, 0x01]); // ADC #$01
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x8000);
        let mut flags = cpu.flags();
        flags.decimal = true;
        cpu.set_flags(flags);

        // Table base for ADC immediate is 2 cycles; BCD mode adds one more.
        assert_eq!(cpu.step(), 3);
    }

    #[test]
    fn binary_mode_adc_immediate_pays_no_bcd_surcharge() {
        let mut bus = VecBus::new();
        bus.load(0x8000, &[0x69, 0x01]); // ADC #$01
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x8000);

        assert_eq!(cpu.step(), 2);
    }

    #[test]
    fn rra_in_decimal_mode_keeps_its_fixed_rmw_cycle_count() {
        let mut bus = VecBus::new();
        bus.load(0x8000, &[0x67, 0x10]); // RRA $10 (zero page)
        bus.load(0x10, &[0x02]);
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x8000);
        let mut flags = cpu.flags();
        flags.decimal = true;
        cpu.set_flags(flags);

        // RRA zero-page is 5 cycles on real silicon regardless of D.
        assert_eq!(cpu.step(), 5);
    }

    #[test]
    fn php_then_plp_round_trips_observable_flags() {
        let mut cpu = Cpu::new(VecBus::new());
        cpu.set_sp(0xFD);
        let mut flags = Flags::cleared();
        flags.carry = true;
        flags.zero = false;
        flags.interrupt_disable = true;
        flags.decimal = true;
        flags.overflow = true;
        flags.negative = true;
        cpu.set_flags(flags);

        let pushed = cpu.flags().pack(true);
        cpu.push_u8(pushed);
        let pulled = cpu.pull_u8();
        cpu.set_status(pulled);

        assert_eq!(cpu.flags(), flags);
    }

    #[test]
    fn irq_is_masked_by_interrupt_disable() {
        let mut bus = VecBus::new();
        bus.load(0xFFFE, &[0x00, 0x90]);
        let mut cpu = Cpu::new(bus);
        cpu.set_sp(0xFD);
        let mut flags = cpu.flags();
        flags.interrupt_disable = true;
        cpu.set_flags(flags);

        assert_eq!(cpu.irq(), 0);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn nmi_is_never_masked() {
        let mut bus = VecBus::new();
        bus.load(0xFFFA, &[0x00, 0x90]);
        let mut cpu = Cpu::new(bus);
        cpu.set_pc(0x1234);
        cpu.set_sp(0xFD);
        let mut flags = cpu.flags();
        flags.interrupt_disable = true;
        cpu.set_flags(flags);

        assert_eq!(cpu.nmi(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
    }
}
