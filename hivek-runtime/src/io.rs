//! Console collaborator
//!
//! The engine's only external seams: the blocking input that resumes a
//! paused engine, and the sink for SYSCALL output. The trait keeps the
//! core synchronous while letting the embedder block on stdin, poll, or
//! script input in tests.

use crate::dump;
use crate::vm::Vm;
use std::io::{self, BufRead, Write};

/// Receives SYSCALL output and supplies the blocking acknowledgement
/// that resumes a paused engine.
pub trait Console {
    /// Called when HALT suspends execution. Implementations render any
    /// diagnostics from the read-only engine view, then block until
    /// execution may resume. The engine discards whatever was read.
    fn pause(&mut self, vm: &Vm) -> io::Result<()>;

    /// Called with the value of r1 on SYSCALL.
    fn output(&mut self, value: u64) -> io::Result<()>;
}

/// Interactive console: dumps engine state and waits for a line on
/// stdin before resuming.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn pause(&mut self, vm: &Vm) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "vm halted...")?;
        write!(stdout, "{}", dump::render_registers(vm))?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }

    fn output(&mut self, value: u64) -> io::Result<()> {
        // The single illustrative syscall prints r1 as a signed integer.
        writeln!(io::stdout().lock(), "{}", value as i64)
    }
}

/// Scripted console for tests and embedding: resumes immediately and
/// records everything it is handed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    pub outputs: Vec<u64>,
    pub pauses: u64,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for ScriptedConsole {
    fn pause(&mut self, _vm: &Vm) -> io::Result<()> {
        self.pauses += 1;
        Ok(())
    }

    fn output(&mut self, value: u64) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}
