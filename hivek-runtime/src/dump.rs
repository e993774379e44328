//! Diagnostic rendering of engine state
//!
//! Pure string renderers over the engine's read-only accessors, used by
//! the interactive console on HALT and by the CLI after a bounded run.

use crate::vm::Vm;
use std::fmt::Write;

/// Render the instruction pointer and all 32 registers, four per row.
pub fn render_registers(vm: &Vm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ip = {:#018x}", vm.ip());

    let regs = vm.registers().as_slice();
    for i in (0..regs.len()).step_by(4) {
        let _ = writeln!(
            out,
            "r[{:02}] = {:#018x}    r[{:02}] = {:#018x}    r[{:02}] = {:#018x}    r[{:02}] = {:#018x}",
            i,
            regs[i],
            i + 1,
            regs[i + 1],
            i + 2,
            regs[i + 2],
            i + 3,
            regs[i + 3],
        );
    }
    out
}

/// Render the top `words` stack doublewords, highest address first.
pub fn render_stack(vm: &Vm, words: usize) -> String {
    let mut out = String::from("stack:\n");
    for (address, value) in vm.stack_words(words) {
        let _ = writeln!(out, "sp[{:#018x}] = {:#018x}", address, value);
    }
    out
}
