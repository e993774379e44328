//! Instruction formatting to assembly text
//!
//! Destination first, then sources, except branches which list their
//! compared registers in condition order: `blt rb, ra, offset` reads as
//! "branch if rb < ra", matching the taken condition.

use hivek_spec::Instruction;

/// Format an instruction as assembly text.
pub fn format(instr: &Instruction) -> String {
    match *instr {
        // ========== Register-register ==========
        Instruction::Add { ra, rb, rc } => format!("add {}, {}, {}", rc, ra, rb),
        Instruction::Sub { ra, rb, rc } => format!("sub {}, {}, {}", rc, ra, rb),
        Instruction::And { ra, rb, rc } => format!("and {}, {}, {}", rc, ra, rb),
        Instruction::Or { ra, rb, rc } => format!("or {}, {}, {}", rc, ra, rb),
        Instruction::Xor { ra, rb, rc } => format!("xor {}, {}, {}", rc, ra, rb),

        // ========== Control ==========
        Instruction::Jr => "jr".to_string(),
        Instruction::Syscall => "syscall".to_string(),
        Instruction::Halt => "halt".to_string(),

        // ========== Register-immediate ==========
        Instruction::Addi { ra, rb, imm } => format!("addi {}, {}, {}", rb, ra, imm),
        Instruction::Andi { ra, rb, imm } => format!("andi {}, {}, {}", rb, ra, imm),
        Instruction::Ori { ra, rb, imm } => format!("ori {}, {}, {}", rb, ra, imm),
        Instruction::Xori { ra, rb, imm } => format!("xori {}, {}, {}", rb, ra, imm),

        // ========== Memory ==========
        Instruction::Ld { ra, rb, imm } => format!("ld {}, {}, {}", rb, ra, imm),
        Instruction::Sd { ra, rb, imm } => format!("sd {}, {}, {}", rb, ra, imm),

        // ========== Branches ==========
        Instruction::Beq { ra, rb, offset } => format!("beq {}, {}, {}", ra, rb, offset),
        Instruction::Bne { ra, rb, offset } => format!("bne {}, {}, {}", ra, rb, offset),
        Instruction::Blt { ra, rb, offset } => format!("blt {}, {}, {}", rb, ra, offset),

        // ========== Jump ==========
        Instruction::Jal { offset } => format!("jal {}", offset),
    }
}
