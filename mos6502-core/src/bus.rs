/// The contract between the CPU and whatever is wired to its 16-bit address
/// bus. The CPU treats this as a byte-addressable 16-bit address space; it
/// performs no aliasing or mirroring of its own, and has no opinion about
/// what a given address range resolves to (RAM, a peripheral register,
/// open bus). Reads and writes take `&mut self` since a peripheral read
/// (e.g. an ACIA RX FIFO pop) can have side effects.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    /// Convenience helper for the CPU's own vector fetches and 16-bit
    /// operand reads. Little-endian, as the 6502 is throughout.
    fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// An optional capability a [`Bus`] may also provide: a way to realize a
/// real-time clock rate by yielding once per emulated cycle. The CPU itself
/// never calls this; it is a hook the step driver may invoke between steps.
pub trait ClockPacer {
    fn wait_next_cycle(&mut self);
}

/// A pacer that never waits. Used by tests and by hosts that want to run
/// as fast as possible.
pub struct NullPacer;

impl ClockPacer for NullPacer {
    fn wait_next_cycle(&mut self) {}
}
