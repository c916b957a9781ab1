use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcode_table::Operation;

pub(crate) mod arith;
pub(crate) mod branch;
pub(crate) mod flags_ops;
pub(crate) mod illegal;
pub(crate) mod jump;
pub(crate) mod load_store;
pub(crate) mod logic;
pub(crate) mod nop;
pub(crate) mod shift;
pub(crate) mod stack;
pub(crate) mod transfer;

/// Every operation but the branches returns the table's base cycle count
/// unmodified plus whatever this function returns; branches return their
/// own taken/page-cross bonus directly since that timing rule isn't the
/// generic `penalty_address && penalty_opcode` mechanism. `Adc`/`Sbc`
/// contribute one extra cycle when decimal mode was active, per the
/// documented BCD timing quirk; `Rra`/`Isc` run the same decimal
/// arithmetic internally but their RMW cycle count is already fixed by the
/// opcode table, so they discard that signal rather than double-charging.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<B>, op: Operation, operand: Operand) -> i32 {
    use Operation::*;
    let mut extra_cycles = 0;
    match op {
        Lda => load_store::lda(cpu, operand),
        Ldx => load_store::ldx(cpu, operand),
        Ldy => load_store::ldy(cpu, operand),
        Sta => load_store::sta(cpu, operand),
        Stx => load_store::stx(cpu, operand),
        Sty => load_store::sty(cpu, operand),

        Tax => transfer::tax(cpu),
        Tay => transfer::tay(cpu),
        Txa => transfer::txa(cpu),
        Tya => transfer::tya(cpu),
        Tsx => transfer::tsx(cpu),
        Txs => transfer::txs(cpu),

        Pha => stack::pha(cpu),
        Php => stack::php(cpu),
        Pla => stack::pla(cpu),
        Plp => stack::plp(cpu),

        Clc => flags_ops::clc(cpu),
        Sec => flags_ops::sec(cpu),
        Cli => flags_ops::cli(cpu),
        Sei => flags_ops::sei(cpu),
        Cld => flags_ops::cld(cpu),
        Sed => flags_ops::sed(cpu),
        Clv => flags_ops::clv(cpu),

        And => logic::and(cpu, operand),
        Ora => logic::ora(cpu, operand),
        Eor => logic::eor(cpu, operand),
        Bit => logic::bit(cpu, operand),

        Asl => shift::asl(cpu, operand),
        Lsr => shift::lsr(cpu, operand),
        Rol => shift::rol(cpu, operand),
        Ror => shift::ror(cpu, operand),

        Adc => {
            if arith::adc(cpu, operand) {
                extra_cycles = 1;
            }
        }
        Sbc => {
            if arith::sbc(cpu, operand) {
                extra_cycles = 1;
            }
        }
        Cmp => arith::cmp(cpu, operand),
        Cpx => arith::cpx(cpu, operand),
        Cpy => arith::cpy(cpu, operand),
        Inc => arith::inc(cpu, operand),
        Dec => arith::dec(cpu, operand),
        Inx => arith::inx(cpu),
        Iny => arith::iny(cpu),
        Dex => arith::dex(cpu),
        Dey => arith::dey(cpu),

        Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvs | Bvc => {
            return branch::branch(cpu, op, operand);
        }

        Jmp => jump::jmp(cpu, operand),
        Jsr => jump::jsr(cpu, operand),
        Rts => jump::rts(cpu),
        Rti => jump::rti(cpu),
        Brk => jump::brk(cpu),

        Nop => nop::nop(cpu, operand),

        Slo => illegal::slo(cpu, operand),
        Rla => illegal::rla(cpu, operand),
        Sre => illegal::sre(cpu, operand),
        Rra => illegal::rra(cpu, operand),
        Dcp => illegal::dcp(cpu, operand),
        Isc => illegal::isc(cpu, operand),
        Sax => illegal::sax(cpu, operand),
        Lax => illegal::lax(cpu, operand),
        Anc => illegal::anc(cpu, operand),
        Alr => illegal::alr(cpu, operand),
        Arr => illegal::arr(cpu, operand),
        Sbx => illegal::sbx(cpu, operand),
        Las => illegal::las(cpu, operand),
        Ane => illegal::ane(cpu, operand),
        Lxa => illegal::lxa(cpu, operand),
        Sha => illegal::sha(cpu, operand),
        Shx => illegal::shx(cpu, operand),
        Shy => illegal::shy(cpu, operand),
        Tas => illegal::tas(cpu, operand),

        Jam => unreachable!("JAM is special-cased in Cpu::step before dispatch"),
    };
    extra_cycles
}

pub(crate) fn operand_address(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        _ => panic!("operation requires an addressed operand"),
    }
}

pub(crate) fn read_operand<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) -> u8 {
    match operand {
        Operand::Accumulator => cpu.a(),
        Operand::Address(addr) => cpu.bus_mut().read(addr),
        Operand::Implied => unreachable!("implied operations never read an operand"),
    }
}

/// Like [`read_operand`], but also flags this operation as wanting the
/// conditional page-cross cycle. Used by every read-only instruction whose
/// indexed/indirect addressing can cross a page (loads, ANDs, compares,
/// ADC/SBC, and their illegal-opcode counterparts) — never by
/// read-modify-write or store instructions, which either always or never
/// pay the extra cycle regardless of the crossing.
pub(crate) fn read_operand_with_penalty<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) -> u8 {
    cpu.penalty_opcode = true;
    read_operand(cpu, operand)
}

pub(crate) fn write_operand<B: Bus>(cpu: &mut Cpu<B>, operand: Operand, value: u8) {
    match operand {
        Operand::Accumulator => cpu.set_a(value),
        Operand::Address(addr) => cpu.bus_mut().write(addr, value),
        Operand::Implied => unreachable!("implied operations never write an operand"),
    }
}

pub(crate) fn update_nz<B: Bus>(cpu: &mut Cpu<B>, value: u8) {
    let mut flags = cpu.flags();
    flags.set_nz(value);
    cpu.set_flags(flags);
}
