use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32_asm::{Memory, Processor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Execute a raw RV32I image on the emulator")]
struct Opts {
    input: PathBuf,
    /// Memory size in bytes; the image is loaded at address 0
    #[arg(long, default_value_t = 4096)]
    mem_size: usize,
    #[arg(long, default_value_t = 0)]
    entry: u32,
    /// Safety cap on executed instructions
    #[arg(long, default_value_t = 1_000_000)]
    max_steps: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let mut image = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    ensure!(
        image.len() <= opts.mem_size,
        "image is {} bytes but memory is only {}",
        image.len(),
        opts.mem_size
    );
    image.resize(opts.mem_size, 0);

    let mut cpu = Processor::new(Memory::from_bytes(image));
    cpu.set_pc(opts.entry);
    let steps = cpu.run(opts.max_steps)?;

    println!("halted after {steps} steps, pc = {:#010x}", cpu.pc);
    for row in 0..8 {
        let mut line = String::new();
        for col in 0..4 {
            let r = row * 4 + col;
            line.push_str(&format!("x{r:02} = {:#010x}  ", cpu.regs[r]));
        }
        println!("{}", line.trim_end());
    }
    Ok(())
}
