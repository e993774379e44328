use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use hivek_runtime::{dump, StdioConsole, Vm, VmConfig};

#[derive(Parser)]
#[command(name = "hivek")]
#[command(about = "Hivek virtual machine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Enable per-cycle execution tracing")]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a program image and run it
    Run {
        #[arg(help = "Program image (flat big-endian instruction words)")]
        image: PathBuf,

        #[arg(
            long,
            default_value_t = hivek_spec::DEFAULT_STACK_SIZE,
            help = "Stack size in bytes"
        )]
        stack_size: usize,

        #[arg(long, help = "Stop after this many cycles")]
        max_cycles: Option<u64>,
    },
    /// Print a listing of a program image
    Disasm {
        #[arg(help = "Program image (flat big-endian instruction words)")]
        image: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.trace {
        tracing_subscriber::EnvFilter::new("hivek_runtime=trace")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Run {
            image,
            stack_size,
            max_cycles,
        } => {
            let mut vm = Vm::new(VmConfig {
                stack_size,
                max_cycles,
            });
            vm.load_program(&image)
                .with_context(|| format!("failed to load {}", image.display()))?;

            let mut console = StdioConsole;
            let result = vm.run(&mut console).context("execution fault")?;

            println!("stopped after {} cycles", result.cycles);
            print!("{}", dump::render_registers(&vm));
        }
        Commands::Disasm { image } => {
            let bytes = fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;
            let listing = hivek_disassembler::disassemble(&bytes)?;
            print!("{}", listing);
        }
    }

    Ok(())
}
