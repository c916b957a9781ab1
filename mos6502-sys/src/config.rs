use crate::bus::SystemBus;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_VIA_BASE: u16 = 0x6000;
const DEFAULT_ACIA_BASE: u16 = 0xD000;
const DEFAULT_TIA_BASE: u16 = 0x0000;
const VIA_SPAN: u16 = 0x10;
const ACIA_SPAN: u16 = 0x04;
const TIA_SPAN: u16 = 0x40;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("peripheral address ranges overlap: {0}")]
    OverlappingRanges(String),
}

/// CLI configuration for the monitor binary: what to load, where, and how
/// fast to run it. `clock_hz` omitted means unpaced — run as fast as the
/// host can.
#[derive(Parser, Debug)]
#[command(author, version, about = "An interactive MOS 6502 monitor")]
pub struct SystemConfig {
    /// Path to a raw binary to load before entering the monitor.
    pub program: PathBuf,

    /// Address to load `program` at.
    #[arg(long, default_value_t = 0x0200, value_parser = parse_hex_u16)]
    pub load_addr: u16,

    /// Target clock rate in Hz. Omit to run unpaced.
    #[arg(long)]
    pub clock_hz: Option<u32>,

    #[arg(long, default_value_t = DEFAULT_VIA_BASE, value_parser = parse_hex_u16)]
    pub via_base: u16,

    #[arg(long, default_value_t = DEFAULT_ACIA_BASE, value_parser = parse_hex_u16)]
    pub acia_base: u16,

    #[arg(long, default_value_t = DEFAULT_TIA_BASE, value_parser = parse_hex_u16)]
    pub tia_base: u16,

    /// Shorthand for `RUST_LOG=trace`.
    #[arg(long)]
    pub trace: bool,
}

fn parse_hex_u16(value: &str) -> Result<u16, std::num::ParseIntError> {
    let trimmed = value.trim_start_matches("0x").trim_start_matches("$");
    u16::from_str_radix(trimmed, 16)
}

fn overlaps(a_base: u16, a_span: u16, b_base: u16, b_span: u16) -> bool {
    a_base < b_base + b_span && b_base < a_base + a_span
}

impl SystemConfig {
    /// Build the system bus, validating that VIA/ACIA/TIA don't overlap
    /// each other.
    pub fn bus(&self) -> Result<SystemBus, ConfigError> {
        let ranges = [
            ("VIA", self.via_base, VIA_SPAN),
            ("ACIA", self.acia_base, ACIA_SPAN),
            ("TIA", self.tia_base, TIA_SPAN),
        ];
        for i in 0..ranges.len() {
            for j in (i + 1)..ranges.len() {
                let (name_a, base_a, span_a) = ranges[i];
                let (name_b, base_b, span_b) = ranges[j];
                if overlaps(base_a, span_a, base_b, span_b) {
                    return Err(ConfigError::OverlappingRanges(format!(
                        "{} ({:#06x}) and {} ({:#06x})",
                        name_a, base_a, name_b, base_b
                    )));
                }
            }
        }
        Ok(SystemBus::new(self.via_base, self.acia_base, self.tia_base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(via: u16, acia: u16, tia: u16) -> SystemConfig {
        SystemConfig {
            program: PathBuf::from("program.bin"),
            load_addr: 0x0200,
            clock_hz: None,
            via_base: via,
            acia_base: acia,
            tia_base: tia,
            trace: false,
        }
    }

    #[test]
    fn non_overlapping_ranges_build_fine() {
        let cfg = config(0x6000, 0xD000, 0x0000);
        assert!(cfg.bus().is_ok());
    }

    #[test]
    fn overlapping_ranges_are_rejected() {
        let cfg = config(0x6000, 0x6008, 0x0000);
        assert!(matches!(cfg.bus(), Err(ConfigError::OverlappingRanges(_))));
    }
}
