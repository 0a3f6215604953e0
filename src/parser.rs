//! Opcode decode: turns the byte at `pc` (plus however many operand bytes
//! the opcode needs) into an [`Instruction`], and looks up its base cycle
//! cost in [`CYCLE_LUT`].
//!
//! `CYCLE_LUT` is reproduced verbatim from the reference cycle table; any
//! correct 8080 interpreter uses these same 256 values; they are not
//! something this crate gets to make a design choice about.

use crate::flags::Condition;
use crate::instructions::Instruction;
use crate::processor::Cpu;
use crate::registers::{Reg8, RegPair, StackPair};

#[rustfmt::skip]
pub const CYCLE_LUT: [u8; 256] = [
    4, 10, 7,  5,  5,  5,  7,  4,  4, 10, 7,  5,  5,  5,  7, 4,   // 0x0X
    4, 10, 7,  5,  5,  5,  7,  4,  4, 10, 7,  5,  5,  5,  7, 4,   // 0x1X
    4, 10, 16, 5,  5,  5,  7,  4,  4, 10, 16, 5,  5,  5,  7, 4,   // 0x2X
    4, 10, 13, 5,  10, 10, 10, 4,  4, 10, 13, 5,  5,  5,  7, 4,   // 0x3X
    5, 5,  5,  5,  5,  5,  7,  5,  5, 5,  5,  5,  5,  5,  7, 5,   // 0x4X
    5, 5,  5,  5,  5,  5,  7,  5,  5, 5,  5,  5,  5,  5,  7, 5,   // 0x5X
    5, 5,  5,  5,  5,  5,  7,  5,  5, 5,  5,  5,  5,  5,  7, 5,   // 0x6X
    7, 7,  7,  7,  7,  7,  7,  7,  5, 5,  5,  5,  5,  5,  7, 5,   // 0x7X
    4, 4,  4,  4,  4,  4,  7,  4,  4, 4,  4,  4,  4,  4,  7, 4,   // 0x8X
    4, 4,  4,  4,  4,  4,  7,  4,  4, 4,  4,  4,  4,  4,  7, 4,   // 0x9X
    4, 4,  4,  4,  4,  4,  7,  4,  4, 4,  4,  4,  4,  4,  7, 4,   // 0xAX
    4, 4,  4,  4,  4,  4,  7,  4,  4, 4,  4,  4,  4,  4,  7, 4,   // 0xBX
    5, 10, 10, 10, 11, 11, 7,  11, 5, 10, 10, 10, 11, 17, 7, 11,  // 0xCX
    5, 10, 10, 10, 11, 11, 7,  11, 5, 10, 10, 10, 11, 11, 7, 11,  // 0xDX
    5, 10, 10, 18, 11, 11, 7,  11, 5, 5,  10, 5,  11, 11, 7, 11,  // 0xEX
    5, 10, 10, 4,  11, 11, 7,  11, 5, 5,  10, 4,  11, 11, 7, 11,  // 0xFX
];

/// Decodes the instruction at the current `pc`, advancing `pc` past it.
/// Returns the instruction and its base cycle cost (before any conditional
/// `CALL`/`RET` bonus, which [`Cpu::step`] adds once the instruction has
/// actually run).
pub fn decode(cpu: &mut Cpu) -> (Instruction, u8) {
    let opcode = cpu.fetch_byte();
    let cycles = CYCLE_LUT[opcode as usize];
    let instruction = decode_opcode(opcode, cpu);
    (instruction, cycles)
}

fn decode_opcode(opcode: u8, cpu: &mut Cpu) -> Instruction {
    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Instruction::Nop,

        0x01 | 0x11 | 0x21 | 0x31 => Instruction::Lxi {
            rp: RegPair::from_bits(opcode >> 4),
            imm: cpu.fetch_word(),
        },
        0x02 => Instruction::Stax { rp: RegPair::Bc },
        0x12 => Instruction::Stax { rp: RegPair::De },
        0x0A => Instruction::Ldax { rp: RegPair::Bc },
        0x1A => Instruction::Ldax { rp: RegPair::De },

        0x03 | 0x13 | 0x23 | 0x33 => Instruction::Inx { rp: RegPair::from_bits(opcode >> 4) },
        0x0B | 0x1B | 0x2B | 0x3B => Instruction::Dcx { rp: RegPair::from_bits(opcode >> 4) },
        0x09 | 0x19 | 0x29 | 0x39 => Instruction::Dad { rp: RegPair::from_bits(opcode >> 4) },

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            Instruction::Inr { reg: Reg8::from_bits(opcode >> 3) }
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            Instruction::Dcr { reg: Reg8::from_bits(opcode >> 3) }
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Instruction::Mvi {
            dst: Reg8::from_bits(opcode >> 3),
            imm: cpu.fetch_byte(),
        },

        0x07 => Instruction::Rlc,
        0x0F => Instruction::Rrc,
        0x17 => Instruction::Ral,
        0x1F => Instruction::Rar,
        0x27 => Instruction::Daa,
        0x2F => Instruction::Cma,
        0x37 => Instruction::Stc,
        0x3F => Instruction::Cmc,

        0x22 => Instruction::Shld { addr: cpu.fetch_word() },
        0x2A => Instruction::Lhld { addr: cpu.fetch_word() },
        0x32 => Instruction::Sta { addr: cpu.fetch_word() },
        0x3A => Instruction::Lda { addr: cpu.fetch_word() },

        0x76 => Instruction::Hlt,
        0x40..=0x7F => Instruction::Mov {
            dst: Reg8::from_bits(opcode >> 3),
            src: Reg8::from_bits(opcode),
        },

        0x80..=0x87 => Instruction::Add { src: Reg8::from_bits(opcode) },
        0x88..=0x8F => Instruction::Adc { src: Reg8::from_bits(opcode) },
        0x90..=0x97 => Instruction::Sub { src: Reg8::from_bits(opcode) },
        0x98..=0x9F => Instruction::Sbb { src: Reg8::from_bits(opcode) },
        0xA0..=0xA7 => Instruction::Ana { src: Reg8::from_bits(opcode) },
        0xA8..=0xAF => Instruction::Xra { src: Reg8::from_bits(opcode) },
        0xB0..=0xB7 => Instruction::Ora { src: Reg8::from_bits(opcode) },
        0xB8..=0xBF => Instruction::Cmp { src: Reg8::from_bits(opcode) },

        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
            Instruction::Rcc { cond: Condition::from_bits(opcode >> 3) }
        }
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => Instruction::Jcc {
            cond: Condition::from_bits(opcode >> 3),
            addr: cpu.fetch_word(),
        },
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => Instruction::Ccc {
            cond: Condition::from_bits(opcode >> 3),
            addr: cpu.fetch_word(),
        },
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            Instruction::Rst { n: (opcode >> 3) & 0x7 }
        }

        0xC1 | 0xD1 | 0xE1 | 0xF1 => Instruction::Pop { rp: StackPair::from_bits(opcode >> 4) },
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Instruction::Push { rp: StackPair::from_bits(opcode >> 4) },

        0xC3 | 0xCB => Instruction::Jmp { addr: cpu.fetch_word() },
        0xC9 | 0xD9 => Instruction::Ret,
        0xCD | 0xDD | 0xED | 0xFD => Instruction::Call { addr: cpu.fetch_word() },

        0xC6 => Instruction::Adi { imm: cpu.fetch_byte() },
        0xCE => Instruction::Aci { imm: cpu.fetch_byte() },
        0xD6 => Instruction::Sui { imm: cpu.fetch_byte() },
        0xDE => Instruction::Sbi { imm: cpu.fetch_byte() },
        0xE6 => Instruction::Ani { imm: cpu.fetch_byte() },
        0xEE => Instruction::Xri { imm: cpu.fetch_byte() },
        0xF6 => Instruction::Ori { imm: cpu.fetch_byte() },
        0xFE => Instruction::Cpi { imm: cpu.fetch_byte() },

        0xD3 => Instruction::Out { port: cpu.fetch_byte() },
        0xDB => Instruction::In { port: cpu.fetch_byte() },

        0xE3 => Instruction::Xthl,
        0xE9 => Instruction::Pchl,
        0xEB => Instruction::Xchg,
        0xF9 => Instruction::Sphl,
        0xF3 => Instruction::Di,
        0xFB => Instruction::Ei,
    }
}
