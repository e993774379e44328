//! Image listing

use crate::error::{DisassemblerError, Result};
use crate::formatter::format;
use hivek_spec::decode;
use std::fmt::Write;

/// Disassemble a flat image of big-endian instruction words into a
/// listing: one line per 4-byte slot with its offset, raw word, and
/// either the decoded mnemonic or a `.word` directive.
pub fn disassemble(image: &[u8]) -> Result<String> {
    if image.len() % 4 != 0 {
        return Err(DisassemblerError::RaggedImage { len: image.len() });
    }

    let mut out = String::new();
    let _ = writeln!(out, "; {} words", image.len() / 4);

    for (index, slot) in image.chunks_exact(4).enumerate() {
        let word = u32::from_be_bytes([slot[0], slot[1], slot[2], slot[3]]);
        let offset = index * 4;
        let text = match decode(word) {
            Ok(instr) => format(&instr),
            Err(_) => format!(".word {:#010x}", word),
        };
        let _ = writeln!(out, "{:#010x}: {:08x}    {}", offset, word, text);
    }

    Ok(out)
}
