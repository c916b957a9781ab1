// Clippy rules to disable.
#![allow(clippy::new_without_default)]

//! The peripheral bus decoder, device models, pacer, file loader, and
//! interactive monitor that surround [`mos6502_core::Cpu`]. Nothing in
//! `mos6502-core` depends on anything in this crate; the relationship runs
//! one way.

pub mod acia;
pub mod bus;
pub mod config;
pub mod loader;
pub mod monitor;
pub mod pacer;
pub mod tia;
pub mod via;
