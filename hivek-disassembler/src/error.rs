//! Disassembler error types

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("image length {len} is not a multiple of the 4-byte instruction slot")]
    RaggedImage { len: usize },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
