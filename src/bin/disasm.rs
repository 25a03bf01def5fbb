use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32_asm::rv::disasm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble raw RV32I machine code")]
struct Opts {
    input: PathBuf,
    /// Input words are big-endian; byte-reverse each 4-byte group first
    #[arg(long)]
    big_endian: bool,
    /// Print an address column instead of plain re-assemblable text
    #[arg(long)]
    addresses: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let bytes = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    if bytes.len() % 4 != 0 {
        bail!("input is {} bytes, not a whole number of 32-bit words", bytes.len());
    }

    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| {
            let c = [c[0], c[1], c[2], c[3]];
            if opts.big_endian {
                u32::from_be_bytes(c)
            } else {
                u32::from_le_bytes(c)
            }
        })
        .collect();

    let instrs = disasm::disassemble(&words);
    if opts.addresses {
        print!("{}", disasm::listing(&instrs));
    } else {
        print!("{}", disasm::format(&instrs));
    }
    Ok(())
}
