// src/bin/chunkcrypt.rs

//! Thin CLI over the chunkcrypt pipeline.
//!
//! Resolves mode, output path, and key/IV (generating and reporting fresh
//! ones when absent), then hands everything to `run_pipeline`.

use anyhow::{Context, Result};
use chunkcrypt_rs::{generate_key_iv, run_pipeline, CipherContext, Mode};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Chunked AES-256-CBC file encryption")]
struct Args {
    /// Operation mode: encrypt or decrypt
    #[arg(short, long)]
    mode: String,

    /// Input file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (derived from the input path when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base64 key, 32 bytes decoded (generated when omitted)
    #[arg(short, long)]
    key: Option<String>,

    /// Base64 IV, 16 bytes decoded (generated when omitted)
    #[arg(long)]
    iv: Option<String>,

    /// Chunk size in bytes; non-positive values fall back to 5 MiB
    #[arg(long, default_value_t = 0)]
    chunk_size: i64,
}

/// `input.txt` -> `input.encrypted.txt` / `input.decrypted.txt`.
fn default_output(input: &Path, mode: Mode) -> PathBuf {
    let tag = match mode {
        Mode::Encrypt => "encrypted",
        Mode::Decrypt => "decrypted",
    };
    match input.extension() {
        Some(ext) => input.with_extension(format!("{tag}.{}", ext.to_string_lossy())),
        None => input.with_extension(tag),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mode: Mode = args.mode.parse()?;
    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.input, mode));
    let chunk_size = if args.chunk_size <= 0 {
        0 // pipeline falls back to the default
    } else {
        args.chunk_size as usize
    };

    let (key, iv) = match (args.key, args.iv) {
        (Some(key), Some(iv)) => (key, iv),
        // Either one missing: generate a fresh pair and report it, or the
        // operation could never be repeated or reversed.
        _ => {
            let (key, iv) = generate_key_iv();
            println!("Generated key: {key}");
            println!("Generated IV: {iv}");
            (key, iv)
        }
    };

    let ctx = CipherContext::from_base64(&key, &iv).context("failed to create cipher")?;

    let chunk_count = run_pipeline(mode, &ctx, &args.input, &output, chunk_size)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    println!(
        "Processed {} chunk(s): {} -> {}",
        chunk_count,
        args.input.display(),
        output.display()
    );
    Ok(())
}
