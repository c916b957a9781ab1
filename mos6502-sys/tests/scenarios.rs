//! End-to-end scenarios driven through the full peripheral-backed
//! `SystemBus`, not the core crate's bare-bones `VecBus` test double —
//! these exercise the same CPU contract a monitor session would.

use mos6502_core::{Bus, Cpu};
use mos6502_sys::bus::SystemBus;

fn system_bus() -> SystemBus {
    SystemBus::new(0x6000, 0xD000, 0x0000)
}

fn load(bus: &mut SystemBus, addr: u16, bytes: &[u8]) {
    for (offset, byte) in bytes.iter().enumerate() {
        bus.write(addr.wrapping_add(offset as u16), *byte);
    }
}

#[test]
fn jsr_rts_roundtrip() {
    let mut bus = system_bus();
    load(&mut bus, 0x8000, &[0x20, 0x10, 0x80]); // JSR $8010
    load(&mut bus, 0x8010, &[0x60]); // RTS
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x8000);
    cpu.set_sp(0xFD);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8010);
    assert_eq!(cpu.sp(), 0xFB);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn branch_page_cross_straddling_instruction() {
    let mut bus = system_bus();
    load(&mut bus, 0x80FE, &[0xD0, 0x10]); // BNE +16
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x80FE);
    // Z is clear by default, so the branch is taken.
    let cycles = cpu.step();
    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x8110);
}

#[test]
fn indirect_jmp_reproduces_the_page_wrap_bug() {
    let mut bus = system_bus();
    load(&mut bus, 0x30FF, &[0x40]);
    load(&mut bus, 0x3000, &[0x80]);
    load(&mut bus, 0x3100, &[0xFF]);
    load(&mut bus, 0x8000, &[0x6C, 0xFF, 0x30]); // JMP ($30FF)
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x8000);

    cpu.step();
    assert_eq!(cpu.pc(), 0x8040);
}

#[test]
fn jam_halts_until_reset() {
    let mut bus = system_bus();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    load(&mut bus, 0x8000, &[0x02]); // JAM
    let mut cpu = Cpu::new(bus);
    cpu.reset();

    assert_eq!(cpu.step(), 2);
    assert!(cpu.halted());
    for _ in 0..100 {
        assert_eq!(cpu.step(), 0);
    }

    cpu.reset();
    assert!(!cpu.halted());
}

#[test]
fn bcd_addition_matches_the_documented_examples() {
    let mut bus = system_bus();
    // SED; CLC; LDA #$15; ADC #$27
    load(&mut bus, 0x8000, &[0xF8, 0x18, 0xA9, 0x15, 0x69, 0x27]);
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x8000);

    cpu.step(); // SED
    cpu.step(); // CLC
    cpu.step(); // LDA #$15
    cpu.step(); // ADC #$27
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flags().carry);

    // A second accumulation, starting over with 0x81, carries out.
    let mut bus2 = system_bus();
    load(&mut bus2, 0x8000, &[0xF8, 0x18, 0xA9, 0x81, 0x69, 0x92]);
    let mut cpu2 = Cpu::new(bus2);
    cpu2.set_pc(0x8000);
    cpu2.step();
    cpu2.step();
    cpu2.step();
    cpu2.step();
    assert_eq!(cpu2.a(), 0x73);
    assert!(cpu2.flags().carry);
}

#[test]
fn bcd_subtraction_with_borrow_matches_the_documented_example() {
    let mut bus = system_bus();
    // SED; SEC; LDA #$00; SBC #$01
    load(&mut bus, 0x8000, &[0xF8, 0x38, 0xA9, 0x00, 0xE9, 0x01]);
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x8000);

    cpu.step(); // SED
    cpu.step(); // SEC
    cpu.step(); // LDA #$00
    cpu.step(); // SBC #$01
    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flags().carry);
}

#[test]
fn load_binary_feeds_a_program_the_cpu_then_executes() {
    use std::io::Write;
    let path = std::env::temp_dir().join(format!(
        "mos6502-sys-scenario-{}.bin",
        std::process::id()
    ));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xA9, 0x42, 0x8D, 0x00, 0x03]).unwrap(); // LDA #$42; STA $0300
    }

    let mut bus = system_bus();
    mos6502_sys::loader::load_binary(&path, &mut bus, 0x0200).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x0200);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.bus().peek(0x0300), 0x42);

    let _ = std::fs::remove_file(&path);
}
