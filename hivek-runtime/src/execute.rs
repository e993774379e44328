//! Instruction execution
//!
//! One exhaustive match over the decoded instruction. Arithmetic wraps;
//! branch and jump displacements are raw byte offsets added to the
//! instruction pointer; everything else advances by the fixed stride.

use crate::error::Result;
use crate::memory::MemoryImage;
use crate::registers::RegisterFile;
use hivek_spec::{Instruction, Register, INSTRUCTION_STRIDE};
use tracing::debug;

/// What the retired instruction asks of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Proceed to the next fetch.
    Continue,
    /// SYSCALL: report the value of r1 to the console.
    Output(u64),
    /// HALT: suspend until the caller resumes. The instruction pointer
    /// still points at the HALT; resuming advances it.
    Pause,
}

/// Execute a single decoded instruction against the register file,
/// instruction pointer, and memory image.
pub(crate) fn execute(
    instr: &Instruction,
    regs: &mut RegisterFile,
    ip: &mut u64,
    memory: &mut MemoryImage,
) -> Result<Outcome> {
    match *instr {
        // ========== 24-bit register-register ==========
        Instruction::Add { ra, rb, rc } => {
            regs.write(rc, regs.read(ra).wrapping_add(regs.read(rb)));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Sub { ra, rb, rc } => {
            regs.write(rc, regs.read(ra).wrapping_sub(regs.read(rb)));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::And { ra, rb, rc } => {
            regs.write(rc, regs.read(ra) & regs.read(rb));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Or { ra, rb, rc } => {
            regs.write(rc, regs.read(ra) | regs.read(rb));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Xor { ra, rb, rc } => {
            regs.write(rc, regs.read(ra) ^ regs.read(rb));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Jr => {
            *ip = regs.read(Register::RA);
        }

        Instruction::Halt => return Ok(Outcome::Pause),

        Instruction::Syscall => {
            let value = regs.read(Register::R1);
            *ip += INSTRUCTION_STRIDE;
            return Ok(Outcome::Output(value));
        }

        // ========== 32-bit register-immediate ==========
        Instruction::Addi { ra, rb, imm } => {
            regs.write(rb, regs.read(ra).wrapping_add(imm as i64 as u64));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Andi { ra, rb, imm } => {
            regs.write(rb, regs.read(ra) & (imm as i64 as u64));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Ori { ra, rb, imm } => {
            regs.write(rb, regs.read(ra) | (imm as i64 as u64));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Xori { ra, rb, imm } => {
            regs.write(rb, regs.read(ra) ^ (imm as i64 as u64));
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Ld { ra, rb, imm } => {
            let address = regs.read(ra).wrapping_add(imm as i64 as u64);
            let value = memory.load_doubleword(address)?;
            debug!("ld {} <- [{:#018x}] = {:#018x}", rb.name(), address, value);
            regs.write(rb, value);
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Sd { ra, rb, imm } => {
            let address = regs.read(ra).wrapping_add(imm as i64 as u64);
            let value = regs.read(rb);
            debug!("sd [{:#018x}] <- {:#018x}", address, value);
            memory.store_doubleword(address, value)?;
            *ip += INSTRUCTION_STRIDE;
        }

        Instruction::Beq { ra, rb, offset } => {
            branch(ip, regs.read(ra) == regs.read(rb), offset);
        }

        Instruction::Bne { ra, rb, offset } => {
            branch(ip, regs.read(ra) != regs.read(rb), offset);
        }

        Instruction::Blt { ra, rb, offset } => {
            // Taken when rb compares below ra; the operand order is part
            // of the ISA.
            branch(ip, (regs.read(rb) as i64) < (regs.read(ra) as i64), offset);
        }

        Instruction::Jal { offset } => {
            regs.write(Register::RA, ip.wrapping_add(INSTRUCTION_STRIDE));
            *ip = ip.wrapping_add(offset as i64 as u64);
        }
    }

    Ok(Outcome::Continue)
}

/// A taken branch adds the raw byte displacement to the instruction
/// pointer; a fall-through advances by the fixed stride.
fn branch(ip: &mut u64, taken: bool, offset: i32) {
    if taken {
        *ip = ip.wrapping_add(offset as i64 as u64);
    } else {
        *ip += INSTRUCTION_STRIDE;
    }
}
