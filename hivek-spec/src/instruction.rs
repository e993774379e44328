//! Hivek instruction set
//!
//! One variant per operation, decoded once by the classifier and matched
//! exhaustively by the execution unit. Field names follow the encoding:
//! `ra` and `rb` are sources, `rc` is the destination of the 24-bit
//! format, `rb` is the destination of the 32-bit register-immediate
//! format.
//!
//! ## Instruction Formats
//! - 24-bit: [sel:3=110][opcode:6][ra:5][rb:5][rc:5][pad:8]
//! - 32-bit: [sel:3=111][opcode:6][ra:5][rb:5][imm13:13]
//! - 32-bit jump: [sel:3=111][opcode:6][imm23:23]

use crate::encoding::Format;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// A decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== 24-bit register-register ==========
    /// ADD: rc = ra + rb (wrapping)
    Add { ra: Register, rb: Register, rc: Register },

    /// SUB: rc = ra - rb (wrapping)
    Sub { ra: Register, rb: Register, rc: Register },

    /// AND: rc = ra & rb
    And { ra: Register, rb: Register, rc: Register },

    /// OR: rc = ra | rb
    Or { ra: Register, rb: Register, rc: Register },

    /// XOR: rc = ra ^ rb
    Xor { ra: Register, rb: Register, rc: Register },

    /// JR: ip = the return-address register
    Jr,

    /// SYSCALL: report the value of r1 as an integer, then continue
    Syscall,

    /// HALT: suspend execution until the embedding caller resumes it;
    /// a pause, not a terminate
    Halt,

    // ========== 32-bit register-immediate ==========
    /// ADDI: rb = ra + imm (sign-extended, wrapping)
    Addi { ra: Register, rb: Register, imm: i32 },

    /// ANDI: rb = ra & imm (sign-extended)
    Andi { ra: Register, rb: Register, imm: i32 },

    /// ORI: rb = ra | imm (sign-extended)
    Ori { ra: Register, rb: Register, imm: i32 },

    /// XORI: rb = ra ^ imm (sign-extended)
    Xori { ra: Register, rb: Register, imm: i32 },

    /// LD: rb = mem[ra + imm] (doubleword)
    Ld { ra: Register, rb: Register, imm: i32 },

    /// SD: mem[ra + imm] = rb (doubleword)
    Sd { ra: Register, rb: Register, imm: i32 },

    /// BEQ: if (ra == rb) ip += offset (raw byte displacement) else ip += 4
    Beq { ra: Register, rb: Register, offset: i32 },

    /// BNE: if (ra != rb) ip += offset (raw byte displacement) else ip += 4
    Bne { ra: Register, rb: Register, offset: i32 },

    /// BLT: if (rb < ra, signed) ip += offset else ip += 4
    ///
    /// The taken condition compares rb against ra, not ra against rb;
    /// the operand order is part of the ISA.
    Blt { ra: Register, rb: Register, offset: i32 },

    /// JAL: return-address register = ip + 4; ip += offset
    /// (byte-granularity displacement)
    Jal { offset: i32 },
}

impl Instruction {
    /// The encoding format this instruction belongs to
    pub const fn format(&self) -> Format {
        match self {
            Instruction::Add { .. }
            | Instruction::Sub { .. }
            | Instruction::And { .. }
            | Instruction::Or { .. }
            | Instruction::Xor { .. }
            | Instruction::Jr
            | Instruction::Syscall
            | Instruction::Halt => Format::F24,
            _ => Format::F32,
        }
    }

    /// Check if this instruction can rewrite the instruction pointer
    /// with something other than the fixed stride
    pub const fn is_control_transfer(&self) -> bool {
        matches!(
            self,
            Instruction::Jr
                | Instruction::Beq { .. }
                | Instruction::Bne { .. }
                | Instruction::Blt { .. }
                | Instruction::Jal { .. }
        )
    }
}
