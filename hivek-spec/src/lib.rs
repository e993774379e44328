//! # Hivek Instruction Set
//!
//! A small register machine: 32-bit instruction words over 32
//! general-purpose 64-bit registers, stored big-endian in memory.
//!
//! ## Key Features
//! - Three instruction formats selected by the top three bits of a word
//!   (16-bit-class, 24-bit register-register, 32-bit register-immediate)
//! - 32 general-purpose registers, r0 hard-wired to zero
//! - Big-endian canonical byte order for code and data
//! - Separate program and stack images (Harvard-style split)
//! - Byte-granularity branch and jump displacements

pub mod register;
pub mod opcode;
pub mod instruction;
pub mod encoding;
pub mod error;
pub mod program;

pub use register::{Register, NUM_REGISTERS};
pub use opcode::{ImmOp, RegOp};
pub use instruction::Instruction;
pub use encoding::{classify, decode, encode, Format};
pub use error::{DecodeError, EncodeError, ImageError};
pub use program::{Program, ProgramBuildError};

/// Memory layout constants (64-bit address space)
pub const PROGRAM_BASE: u64 = 0x0000_0000;
pub const STACK_BASE: u64 = 0x8000_0000;

/// Default stack buffer size: 1 MiB
pub const DEFAULT_STACK_SIZE: usize = 1 << 20;

/// Instruction pointer step in bytes, uniform across all formats so the
/// fetch unit always reads word-aligned slots.
pub const INSTRUCTION_STRIDE: u64 = 4;
