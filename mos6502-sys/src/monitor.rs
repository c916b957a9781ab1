use crate::bus::SystemBus;
use crate::loader;
use colored::*;
use mos6502_core::Cpu;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

/// An interactive line-oriented debugger. Reads commands from stdin,
/// one per line, and drives a [`Cpu`] against a [`SystemBus`].
pub struct Monitor {
    cpu: Cpu<SystemBus>,
    breakpoints: BTreeSet<u16>,
}

impl Monitor {
    pub fn new(bus: SystemBus) -> Self {
        Monitor {
            cpu: Cpu::new(bus),
            breakpoints: BTreeSet::new(),
        }
    }

    /// Exposes the underlying bus so a host can load a program before
    /// handing control to [`Monitor::run`].
    pub fn bus_mut(&mut self) -> &mut SystemBus {
        self.cpu.bus_mut()
    }

    pub fn run<R: io::BufRead>(&mut self, input: R) {
        print!("> ");
        let _ = io::stdout().flush();
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if !self.dispatch(line.trim()) {
                break;
            }
            print!("> ");
            let _ = io::stdout().flush();
        }
    }

    /// Returns `false` when the monitor should exit.
    fn dispatch(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => return true,
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "quit" | "exit" => return false,
            "load" => self.cmd_load(&args),
            "reset" => {
                let cycles = self.cpu.reset();
                println!("reset: {} cycles", cycles);
            }
            "irq" => {
                let cycles = self.cpu.irq();
                println!("irq: {} cycles (0 means masked)", cycles);
            }
            "nmi" => {
                let cycles = self.cpu.nmi();
                println!("nmi: {} cycles", cycles);
            }
            "step" => self.cmd_step(&args),
            "run" => self.cmd_run(&args),
            "regs" => self.print_regs(),
            "mem" => self.cmd_mem(&args),
            "break" => self.cmd_break(&args),
            "clear" => self.cmd_clear(&args),
            _ => println!("unrecognized command: {}", command),
        }
        true
    }

    fn cmd_load(&mut self, args: &[&str]) {
        let (path, addr) = match (args.first(), args.get(1)) {
            (Some(path), Some(addr)) => (path, addr),
            _ => {
                println!("usage: load <path> <addr-hex>");
                return;
            }
        };
        let addr = match parse_hex(addr) {
            Some(addr) => addr,
            None => {
                println!("bad address: {}", addr);
                return;
            }
        };
        match loader::load_binary(&PathBuf::from(path), self.cpu.bus_mut(), addr) {
            Ok(count) => println!("loaded {} bytes at {:#06x}", count, addr),
            Err(err) => println!("load failed: {}", err),
        }
    }

    fn cmd_step(&mut self, args: &[&str]) {
        let n: u32 = args.first().and_then(|s| s.parse().ok()).unwrap_or(1);
        for _ in 0..n {
            if self.cpu.halted() {
                println!("halted on JAM; run 'reset' to resume");
                break;
            }
            let cycles = self.cpu.step();
            self.print_regs();
            println!("  ({} cycles)", cycles);
        }
    }

    fn cmd_run(&mut self, args: &[&str]) {
        let budget: u64 = args
            .first()
            .and_then(|s| s.parse().ok())
            .unwrap_or(u64::MAX);
        let mut spent = 0u64;
        while spent < budget {
            if self.cpu.halted() {
                println!("halted on JAM; run 'reset' to resume");
                return;
            }
            if self.breakpoints.contains(&self.cpu.pc()) {
                println!("breakpoint hit at {:#06x}", self.cpu.pc());
                return;
            }
            spent += self.cpu.step() as u64;
        }
    }

    fn print_regs(&self) {
        let flags = self.cpu.flags();
        println!(
            "A={} X={} Y={} SP={} PC={} [{}{}{}{}{}{}] halted={}",
            format!("{:#04x}", self.cpu.a()).yellow(),
            format!("{:#04x}", self.cpu.x()).yellow(),
            format!("{:#04x}", self.cpu.y()).yellow(),
            format!("{:#04x}", self.cpu.sp()).yellow(),
            format!("{:#06x}", self.cpu.pc()).cyan(),
            flag_char('N', flags.negative),
            flag_char('V', flags.overflow),
            flag_char('D', flags.decimal),
            flag_char('I', flags.interrupt_disable),
            flag_char('Z', flags.zero),
            flag_char('C', flags.carry),
            self.cpu.halted(),
        );
    }

    fn cmd_mem(&mut self, args: &[&str]) {
        let addr = match args.first().and_then(|s| parse_hex(s)) {
            Some(addr) => addr,
            None => {
                println!("usage: mem <addr-hex> [len]");
                return;
            }
        };
        let len: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(16);
        let bus = self.cpu.bus();
        for row in 0..len.div_ceil(16) {
            let row_addr = addr.wrapping_add(row * 16);
            print!("{:#06x}:", row_addr);
            for col in 0..16u16.min(len - row * 16) {
                print!(" {:02x}", bus.peek(row_addr.wrapping_add(col)));
            }
            println!();
        }
    }

    fn cmd_break(&mut self, args: &[&str]) {
        match args.first().and_then(|s| parse_hex(s)) {
            Some(addr) => {
                self.breakpoints.insert(addr);
                println!("breakpoint set at {:#06x}", addr);
            }
            None => println!("usage: break <addr-hex>"),
        }
    }

    fn cmd_clear(&mut self, args: &[&str]) {
        match args.first().and_then(|s| parse_hex(s)) {
            Some(addr) => {
                self.breakpoints.remove(&addr);
                println!("breakpoint cleared at {:#06x}", addr);
            }
            None => println!("usage: clear <addr-hex>"),
        }
    }
}

fn flag_char(letter: char, set: bool) -> String {
    if set {
        letter.to_string().green().to_string()
    } else {
        letter.to_string().dimmed().to_string()
    }
}

fn parse_hex(value: &str) -> Option<u16> {
    let trimmed = value.trim_start_matches("0x").trim_start_matches('$');
    u16::from_str_radix(trimmed, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_then_clear_roundtrips() {
        let mut monitor = Monitor::new(SystemBus::new(0x6000, 0xD000, 0x0000));
        monitor.dispatch("break 1234");
        assert!(monitor.breakpoints.contains(&0x1234));
        monitor.dispatch("clear 1234");
        assert!(!monitor.breakpoints.contains(&0x1234));
    }

    #[test]
    fn reset_runs_without_panicking_on_an_empty_bus() {
        let mut monitor = Monitor::new(SystemBus::new(0x6000, 0xD000, 0x0000));
        assert!(monitor.dispatch("reset"));
    }
}
