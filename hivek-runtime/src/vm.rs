//! The Hivek virtual machine
//!
//! A single-threaded, fully synchronous fetch-decode-execute engine over
//! an exclusively owned register file, instruction pointer, and memory
//! image. One instruction completes before the next fetch begins; the
//! only suspension point is the HALT pause, handed to the embedding
//! caller through [`Step::Paused`] / [`Vm::resume`].

use crate::error::{LoadError, Result};
use crate::execute::{execute, Outcome};
use crate::io::Console;
use crate::memory::MemoryImage;
use crate::registers::RegisterFile;
use hivek_spec::{decode, Program, Register, INSTRUCTION_STRIDE, PROGRAM_BASE};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// VM configuration
#[derive(Debug, Clone)]
pub struct VmConfig {
    /// Stack buffer size in bytes
    pub stack_size: usize,

    /// Stop the run loop once this many cycles have executed. `None`
    /// leaves the loop unbounded, matching the bare machine.
    pub max_cycles: Option<u64>,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            stack_size: hivek_spec::DEFAULT_STACK_SIZE,
            max_cycles: None,
        }
    }
}

/// Outcome of a single [`Vm::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Instruction retired; execution continues.
    Continue,
    /// SYSCALL reported the value of r1.
    Output(u64),
    /// HALT reached. The engine stays paused, with registers and the
    /// instruction pointer untouched, until [`Vm::resume`] is called.
    Paused,
}

/// Result of a bounded run
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Cycles executed by the engine
    pub cycles: u64,
}

/// Hivek virtual machine
pub struct Vm {
    regs: RegisterFile,
    ip: u64,
    memory: MemoryImage,
    config: VmConfig,
    cycles: u64,
    paused: bool,
}

impl Vm {
    /// Create an engine with an empty program image. The stack is
    /// allocated once and its top seeds the stack-pointer register.
    pub fn new(config: VmConfig) -> Self {
        let memory = MemoryImage::new(config.stack_size);
        let mut regs = RegisterFile::new();
        regs.write(Register::SP, memory.stack_top());
        Self {
            regs,
            ip: PROGRAM_BASE,
            memory,
            config,
            cycles: 0,
            paused: false,
        }
    }

    /// Load a program image from a file, replacing any previous image
    /// and resetting the instruction pointer to the image start. On any
    /// failure the engine keeps its previous image untouched.
    pub fn load_program(&mut self, path: impl AsRef<Path>) -> std::result::Result<(), LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Program::from_bytes(bytes).map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_image(image);
        Ok(())
    }

    /// Load an in-memory program image.
    pub fn load_image(&mut self, image: Program) {
        debug!(bytes = image.as_bytes().len(), "loading program image");
        self.memory.load_program(image);
        self.ip = PROGRAM_BASE;
        self.paused = false;
    }

    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn memory(&self) -> &MemoryImage {
        &self.memory
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The top `count` stack doublewords as (address, value) pairs,
    /// highest address first. Stops at the stack base.
    pub fn stack_words(&self, count: usize) -> Vec<(u64, u64)> {
        let top = self.memory.stack_top();
        let mut words = Vec::with_capacity(count);
        for i in 0..count as u64 {
            let Some(address) = top.checked_sub(i * 8) else {
                break;
            };
            match self.memory.load_doubleword(address) {
                Ok(value) => words.push((address, value)),
                Err(_) => break,
            }
        }
        words
    }

    /// Read the word at the instruction pointer, canonicalized to host
    /// order. Pure: no side effects beyond the read.
    fn fetch(&self) -> Result<u32> {
        self.memory.load_word32(self.ip)
    }

    /// Fetch, decode, and execute one instruction. While paused this is
    /// inert and keeps reporting [`Step::Paused`].
    pub fn step(&mut self) -> Result<Step> {
        if self.paused {
            return Ok(Step::Paused);
        }

        let word = self.fetch()?;
        let instr = decode(word)?;
        trace!("[{:6}] ip={:#018x} {:?}", self.cycles, self.ip, instr);

        match execute(&instr, &mut self.regs, &mut self.ip, &mut self.memory)? {
            Outcome::Continue => {
                self.cycles += 1;
                Ok(Step::Continue)
            }
            Outcome::Output(value) => {
                self.cycles += 1;
                Ok(Step::Output(value))
            }
            Outcome::Pause => {
                self.paused = true;
                debug!(ip = self.ip, "halted, waiting for input");
                Ok(Step::Paused)
            }
        }
    }

    /// Resume after a HALT pause: step past the HALT and continue. The
    /// register file is untouched. A no-op when not paused.
    pub fn resume(&mut self) {
        if self.paused {
            self.ip += INSTRUCTION_STRIDE;
            self.paused = false;
            self.cycles += 1;
        }
    }

    /// Drive the fetch-decode-execute loop. SYSCALL values go to the
    /// console; a HALT pause hands the console this engine for
    /// diagnostics and blocks on its input before resuming. Returns
    /// `Ok` only when the configured cycle limit stops the loop; decode
    /// and memory faults terminate it with `Err`.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<ExecutionResult> {
        loop {
            if let Some(limit) = self.config.max_cycles {
                if self.cycles >= limit {
                    debug!(cycles = self.cycles, "cycle limit reached");
                    return Ok(ExecutionResult {
                        cycles: self.cycles,
                    });
                }
            }

            match self.step()? {
                Step::Continue => {}
                Step::Output(value) => console.output(value)?,
                Step::Paused => {
                    console.pause(self)?;
                    self.resume();
                }
            }
        }
    }
}
