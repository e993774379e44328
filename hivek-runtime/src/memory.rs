//! Memory image: program and stack buffers with big-endian storage
//!
//! Addresses are plain integer offsets into one of two disjoint regions:
//! the loaded program image at [`PROGRAM_BASE`] and the stack at
//! [`STACK_BASE`]. Every access is bounds-checked against its region
//! before it happens; anything outside, or straddling a region end, is a
//! reported fault rather than undefined behavior.
//!
//! Multi-byte values are stored in the canonical big-endian order and
//! translated to/from host order on every access, so a store/load pair
//! round-trips the logical value while a raw dump of the buffer always
//! observes big-endian bytes.

use crate::error::{Result, RuntimeError};
use hivek_spec::{Program, PROGRAM_BASE, STACK_BASE};

/// The region an address falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// The loaded program image; read-only after load
    Program,
    /// The stack buffer; read-write
    Stack,
}

impl MemoryRegion {
    pub fn is_writable(self) -> bool {
        matches!(self, MemoryRegion::Stack)
    }
}

/// The engine's two owned byte buffers
#[derive(Debug, Clone)]
pub struct MemoryImage {
    program: Vec<u8>,
    stack: Vec<u8>,
}

impl MemoryImage {
    /// Create with an empty program image and a zeroed stack of the
    /// given size. The stack persists for the engine's lifetime.
    pub fn new(stack_size: usize) -> Self {
        Self {
            program: Vec::new(),
            stack: vec![0; stack_size],
        }
    }

    /// Replace the program image. The stack is untouched.
    pub fn load_program(&mut self, image: Program) {
        self.program = image.into_bytes();
    }

    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Address of the last doubleword slot in the stack; the initial
    /// value of the stack-pointer register.
    pub fn stack_top(&self) -> u64 {
        STACK_BASE + self.stack.len() as u64 - 8
    }

    /// The region containing an address, if any
    pub fn region(&self, address: u64) -> Option<MemoryRegion> {
        let program_end = PROGRAM_BASE + self.program.len() as u64;
        let stack_end = STACK_BASE + self.stack.len() as u64;
        if (PROGRAM_BASE..program_end).contains(&address) {
            Some(MemoryRegion::Program)
        } else if (STACK_BASE..stack_end).contains(&address) {
            Some(MemoryRegion::Stack)
        } else {
            None
        }
    }

    /// Locate an access of `len` bytes, requiring it to fit entirely
    /// inside one region.
    fn span(&self, address: u64, len: usize) -> Result<(MemoryRegion, usize)> {
        let end = address
            .checked_add(len as u64)
            .ok_or(RuntimeError::MemoryFault { address, len })?;
        let program_end = PROGRAM_BASE + self.program.len() as u64;
        let stack_end = STACK_BASE + self.stack.len() as u64;

        if (PROGRAM_BASE..program_end).contains(&address) && end <= program_end {
            return Ok((MemoryRegion::Program, (address - PROGRAM_BASE) as usize));
        }
        if (STACK_BASE..stack_end).contains(&address) && end <= stack_end {
            return Ok((MemoryRegion::Stack, (address - STACK_BASE) as usize));
        }
        Err(RuntimeError::MemoryFault { address, len })
    }

    fn read_span(&self, address: u64, len: usize) -> Result<&[u8]> {
        let (region, offset) = self.span(address, len)?;
        let buffer = match region {
            MemoryRegion::Program => &self.program,
            MemoryRegion::Stack => &self.stack,
        };
        Ok(&buffer[offset..offset + len])
    }

    fn write_span(&mut self, address: u64, len: usize) -> Result<&mut [u8]> {
        let (region, offset) = self.span(address, len)?;
        if !region.is_writable() {
            return Err(RuntimeError::ReadOnlyImage { address, len });
        }
        Ok(&mut self.stack[offset..offset + len])
    }

    /// Load a 32-bit word, translating from big-endian storage.
    pub fn load_word32(&self, address: u64) -> Result<u32> {
        let span = self.read_span(address, 4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(span);
        Ok(u32::from_be_bytes(raw))
    }

    /// Load a doubleword, translating from big-endian storage.
    pub fn load_doubleword(&self, address: u64) -> Result<u64> {
        let span = self.read_span(address, 8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(span);
        Ok(u64::from_be_bytes(raw))
    }

    /// Store a 32-bit word in big-endian order.
    pub fn store_word32(&mut self, address: u64, value: u32) -> Result<()> {
        let span = self.write_span(address, 4)?;
        span.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Store a doubleword in big-endian order.
    pub fn store_doubleword(&mut self, address: u64, value: u64) -> Result<()> {
        let span = self.write_span(address, 8)?;
        span.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}
