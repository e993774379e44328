//! # Hivek Runtime
//!
//! Execute Hivek program images: a fetch-decode-execute engine over 32
//! 64-bit registers, a read-only program image, and a fixed stack, all
//! exclusively owned by the engine.
//!
//! ## Features
//!
//! - **Three instruction formats**: classified by the top bits of each
//!   fetched word, decoded once into a tagged union
//! - **Big-endian memory contract**: loads and stores translate between
//!   the canonical in-memory order and host order on every access
//! - **Bounds-checked addressing**: program and stack are offset-indexed
//!   buffers; out-of-range accesses are reported faults
//! - **Halt-and-pause**: HALT suspends the engine until the embedding
//!   caller resumes it; a pause, not a terminate
//!
//! ## Example
//!
//! ```rust,no_run
//! use hivek_runtime::{StdioConsole, Vm, VmConfig};
//!
//! let mut vm = Vm::new(VmConfig::default());
//! vm.load_program("out.bin").expect("load failed");
//! let mut console = StdioConsole;
//! vm.run(&mut console).expect("execution fault");
//! ```

pub mod dump;
pub mod error;
pub mod io;
pub mod memory;
pub mod registers;
pub mod vm;

mod execute;

pub use error::{LoadError, Result, RuntimeError};
pub use io::{Console, ScriptedConsole, StdioConsole};
pub use memory::{MemoryImage, MemoryRegion};
pub use registers::RegisterFile;
pub use vm::{ExecutionResult, Step, Vm, VmConfig};

/// Run an in-memory image to the configured cycle limit, collecting
/// SYSCALL output. Intended for bounded configs; with no cycle limit
/// this only returns on a fault.
pub fn run(image: hivek_spec::Program, config: VmConfig) -> Result<Vec<u64>> {
    let mut vm = Vm::new(config);
    vm.load_image(image);
    let mut console = ScriptedConsole::new();
    vm.run(&mut console)?;
    Ok(console.outputs)
}
