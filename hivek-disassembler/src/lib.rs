//! # Hivek Disassembler
//!
//! Render Hivek program images as human-readable listings. Driven by
//! the same tagged-union decode the engine executes, so the listing can
//! never disagree with execution; there is no separate opcode table to
//! fall out of sync.
//!
//! Words that do not decode (the reserved 16-bit-class family, unmapped
//! opcodes) are rendered as `.word` data directives, keeping listings
//! total over arbitrary images.
//!
//! ## Example
//!
//! ```rust
//! use hivek_spec::{Instruction, Program, Register};
//! use hivek_disassembler::disassemble;
//!
//! let image = Program::from_instructions(&[
//!     Instruction::Addi { ra: Register::ZERO, rb: Register::A0, imm: 5 },
//!     Instruction::Halt,
//! ]).unwrap();
//! let listing = disassemble(image.as_bytes()).unwrap();
//! assert!(listing.contains("addi a0, zero, 5"));
//! assert!(listing.contains("halt"));
//! ```

pub mod disassembler;
pub mod error;
pub mod formatter;

pub use disassembler::disassemble;
pub use error::{DisassemblerError, Result};
pub use formatter::format;
