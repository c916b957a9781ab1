// Clippy rules to disable.
#![allow(clippy::new_without_default)]

//! A cycle-accurate emulator of the MOS Technology 6502 microprocessor
//! (NMOS variant), including the documented instruction set, BCD
//! arithmetic, and the 105 undocumented "illegal" opcodes.
//!
//! This crate has no opinion about what's on the other end of the address
//! bus. A [`Bus`] implementation supplies `read`/`write`; everything else —
//! RAM, peripherals, address decoding — is a collaborator outside this
//! crate.
//!
//! http://www.6502.org/
//! https://en.wikipedia.org/wiki/MOS_Technology_6502
//! http://wiki.nesdev.com/w/index.php/CPU

pub mod addressing;
pub mod bus;
pub mod constants;
pub mod cpu;
pub mod flags;
mod ops;
pub mod opcode_table;

#[cfg(test)]
pub(crate) mod test_util;

pub use addressing::{AddressingMode, Operand};
pub use bus::{Bus, ClockPacer};
pub use cpu::Cpu;
pub use flags::StatusFlag;
pub use opcode_table::{Operation, OPCODE_TABLE};
