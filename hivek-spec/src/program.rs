//! Program image handling
//!
//! A Hivek program is a flat binary of big-endian instruction words: no
//! header, no metadata, no symbol table. Validation is the load policy
//! for ragged files: an image must be non-empty and a whole number of
//! 4-byte slots, or it is rejected outright. Nothing is truncated or
//! padded.

use crate::error::ImageError;
use crate::instruction::Instruction;
use crate::{encode, EncodeError};

/// A validated program image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Vec<u8>,
}

impl Program {
    /// Validate raw bytes as a program image.
    pub fn from_bytes(code: Vec<u8>) -> Result<Self, ImageError> {
        if code.is_empty() {
            return Err(ImageError::Empty);
        }
        if code.len() % 4 != 0 {
            return Err(ImageError::RaggedLength { len: code.len() });
        }
        Ok(Self { code })
    }

    /// Build an image from instruction words, emitting the canonical
    /// big-endian byte order a producer must use.
    pub fn from_words(words: &[u32]) -> Result<Self, ImageError> {
        let mut code = Vec::with_capacity(words.len() * 4);
        for word in words {
            code.extend_from_slice(&word.to_be_bytes());
        }
        Self::from_bytes(code)
    }

    /// Assemble an image from instructions. Convenience for tests and
    /// embedders building programs in memory.
    pub fn from_instructions(instructions: &[Instruction]) -> Result<Self, ProgramBuildError> {
        let mut words = Vec::with_capacity(instructions.len());
        for instr in instructions {
            words.push(encode(instr)?);
        }
        Ok(Self::from_words(&words)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    /// Number of 4-byte instruction slots
    pub fn word_count(&self) -> usize {
        self.code.len() / 4
    }

    /// The word at a slot index, in host order
    pub fn word(&self, index: usize) -> Option<u32> {
        let offset = index.checked_mul(4)?;
        let slot = self.code.get(offset..offset + 4)?;
        Some(u32::from_be_bytes([slot[0], slot[1], slot[2], slot[3]]))
    }
}

/// Failure while assembling an image from instructions.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ProgramBuildError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Image(#[from] ImageError),
}
