//! Opcode tables for the two live instruction formats
//!
//! The 24-bit and 32-bit formats each carry a 6-bit opcode field, and the
//! two opcode spaces are unrelated: the same numeric value means different
//! things in different formats. Keeping them as separate enums makes it
//! impossible to dispatch a value against the wrong table.
//!
//! ## 24-bit format (register-register)
//! - 0x00-0x04: ALU (ADD, SUB, AND, OR, XOR)
//! - 0x05: JR
//! - 0x3E-0x3F: SYSCALL, HALT
//!
//! ## 32-bit format (register-immediate)
//! - 0x00-0x03: ALU (ADDI, ANDI, ORI, XORI)
//! - 0x09, 0x10: memory (LD, SD)
//! - 0x18-0x1A: branches (BEQ, BNE, BLT)
//! - 0x38-0x39: jump-and-link (two reserved slots, same behavior)

use serde::{Deserialize, Serialize};

/// Opcode of the 24-bit register-register format (6 bits)
///
/// The control operations JR, SYSCALL, and HALT share this format's
/// opcode space; their register fields are ignored.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegOp {
    /// ADD: rc = ra + rb
    Add = 0x00,
    /// SUB: rc = ra - rb
    Sub = 0x01,
    /// AND: rc = ra & rb
    And = 0x02,
    /// OR: rc = ra | rb
    Or = 0x03,
    /// XOR: rc = ra ^ rb
    Xor = 0x04,
    /// JR: ip = ra register (the return-address register)
    Jr = 0x05,
    /// SYSCALL: report r1, then continue
    Syscall = 0x3E,
    /// HALT: suspend until the embedding caller resumes
    Halt = 0x3F,
}

impl RegOp {
    /// Try to convert from the raw 6-bit field
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(RegOp::Add),
            0x01 => Some(RegOp::Sub),
            0x02 => Some(RegOp::And),
            0x03 => Some(RegOp::Or),
            0x04 => Some(RegOp::Xor),
            0x05 => Some(RegOp::Jr),
            0x3E => Some(RegOp::Syscall),
            0x3F => Some(RegOp::Halt),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Check if this is a three-register ALU opcode
    #[inline]
    pub const fn is_alu(self) -> bool {
        matches!(
            self,
            RegOp::Add | RegOp::Sub | RegOp::And | RegOp::Or | RegOp::Xor
        )
    }

    /// Check if this is a control opcode (JR, SYSCALL, HALT)
    #[inline]
    pub const fn is_control(self) -> bool {
        matches!(self, RegOp::Jr | RegOp::Syscall | RegOp::Halt)
    }
}

impl std::fmt::Display for RegOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RegOp::Add => "add",
            RegOp::Sub => "sub",
            RegOp::And => "and",
            RegOp::Or => "or",
            RegOp::Xor => "xor",
            RegOp::Jr => "jr",
            RegOp::Syscall => "syscall",
            RegOp::Halt => "halt",
        };
        write!(f, "{}", name)
    }
}

/// Opcode of the 32-bit register-immediate format (6 bits)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImmOp {
    /// ADDI: rb = ra + imm13
    Addi = 0x00,
    /// ANDI: rb = ra & imm13
    Andi = 0x01,
    /// ORI: rb = ra | imm13
    Ori = 0x02,
    /// XORI: rb = ra ^ imm13
    Xori = 0x03,
    /// LD: rb = mem[ra + imm13] (doubleword)
    Ld = 0x09,
    /// SD: mem[ra + imm13] = rb (doubleword)
    Sd = 0x10,
    /// BEQ: if (ra == rb) ip += imm13
    Beq = 0x18,
    /// BNE: if (ra != rb) ip += imm13
    Bne = 0x19,
    /// BLT: if (rb < ra, signed) ip += imm13
    Blt = 0x1A,
    /// JAL: ra register = ip + 4; ip += imm23
    Jal = 0x38,
}

/// The second reserved jump-and-link opcode slot; decodes as JAL.
pub const JAL_ALT: u8 = 0x39;

impl ImmOp {
    /// Try to convert from the raw 6-bit field
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(ImmOp::Addi),
            0x01 => Some(ImmOp::Andi),
            0x02 => Some(ImmOp::Ori),
            0x03 => Some(ImmOp::Xori),
            0x09 => Some(ImmOp::Ld),
            0x10 => Some(ImmOp::Sd),
            0x18 => Some(ImmOp::Beq),
            0x19 => Some(ImmOp::Bne),
            0x1A => Some(ImmOp::Blt),
            // Both reserved jump-and-link slots decode the same way.
            0x38 | JAL_ALT => Some(ImmOp::Jal),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Check if this is an immediate ALU opcode
    #[inline]
    pub const fn is_alu(self) -> bool {
        matches!(
            self,
            ImmOp::Addi | ImmOp::Andi | ImmOp::Ori | ImmOp::Xori
        )
    }

    /// Check if this is a memory opcode
    #[inline]
    pub const fn is_memory(self) -> bool {
        matches!(self, ImmOp::Ld | ImmOp::Sd)
    }

    /// Check if this is a branch opcode
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(self, ImmOp::Beq | ImmOp::Bne | ImmOp::Blt)
    }
}

impl std::fmt::Display for ImmOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImmOp::Addi => "addi",
            ImmOp::Andi => "andi",
            ImmOp::Ori => "ori",
            ImmOp::Xori => "xori",
            ImmOp::Ld => "ld",
            ImmOp::Sd => "sd",
            ImmOp::Beq => "beq",
            ImmOp::Bne => "bne",
            ImmOp::Blt => "blt",
            ImmOp::Jal => "jal",
        };
        write!(f, "{}", name)
    }
}
