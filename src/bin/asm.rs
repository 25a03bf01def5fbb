use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32_asm::assemble;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble RV32I source to raw little-endian machine code")]
struct Opts {
    /// Source file; stdin when omitted
    input: Option<PathBuf>,
    #[arg(short, long, default_value = "a.bin")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = match &opts.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let words = assemble(&source)?;
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    std::fs::write(&opts.output, &bytes)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    eprintln!("{} words -> {}", words.len(), opts.output.display());
    Ok(())
}
