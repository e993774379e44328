//! Error types for the Hivek instruction set

use crate::encoding::Format;
use thiserror::Error;

/// A fetched word could not be decoded. Decode faults are terminal for
/// the run loop: they are surfaced, never silently skipped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The word's format selector names the reserved 16-bit-class family.
    #[error("reserved 16-bit-class instruction word {word:#010x}")]
    ReservedFormat { word: u32 },

    /// The format is recognized but the opcode value is unmapped.
    #[error("unknown opcode {opcode:#04x} in the {format} format (word {word:#010x})")]
    UnknownOpcode {
        format: Format,
        opcode: u8,
        word: u32,
    },
}

/// An instruction could not be encoded into a 32-bit word.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("immediate {value} does not fit in {bits} bits")]
    ImmediateOverflow { value: i32, bits: u32 },
}

/// A byte buffer was rejected as a program image.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    #[error("program image is empty")]
    Empty,

    #[error("program image length {len} is not a multiple of the 4-byte instruction slot")]
    RaggedLength { len: usize },
}
