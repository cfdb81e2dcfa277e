//! AES file encryption tool
//!
//! Reads a file in fixed 16-byte blocks, runs each block through a
//! `rijndael` cipher session (ECB or CBC) and writes the result. Key and IV
//! arrive as hex strings on the command line; the input length must be a
//! multiple of 16 bytes because no padding scheme is applied.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fs;
use std::process;
use std::time::Instant;

use rijndael::{parse_iv_hex, CipherKey, Construction, Mode, Session};

/// Command-line arguments for the AES cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Key as a hex string (32, 48 or 64 characters).
    #[arg(short, long, help = "Key as a hex string (32, 48 or 64 characters)")]
    key: String,

    /// IV as a hex string (32 characters, required for CBC).
    #[arg(short, long, help = "IV as a hex string (32 characters, CBC only)")]
    iv: Option<String>,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Block-chaining construction.
    #[arg(short, long, help = "Block-chaining construction (ecb/cbc/gcm)")]
    construction: CliConstruction,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

/// Enum representing the block-chaining construction.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliConstruction {
    /// Electronic Code Book: every block independent.
    Ecb,
    /// Cipher Block Chaining: each block XORed with the previous ciphertext.
    Cbc,
    /// Galois/Counter Mode: recognized but not implemented.
    Gcm,
}

impl From<OperationMode> for Mode {
    fn from(mode: OperationMode) -> Mode {
        match mode {
            OperationMode::Encrypt => Mode::Encrypt,
            OperationMode::Decrypt => Mode::Decrypt,
        }
    }
}

impl From<CliConstruction> for Construction {
    fn from(construction: CliConstruction) -> Construction {
        match construction {
            CliConstruction::Ecb => Construction::Ecb,
            CliConstruction::Cbc => Construction::Cbc,
            CliConstruction::Gcm => Construction::Gcm,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let key = CipherKey::from_hex(&cli.key)?;
    let iv = match &cli.iv {
        Some(text) => Some(parse_iv_hex(text)?),
        None => None,
    };

    let mut session = Session::new(key, cli.construction.into(), iv)?;

    let input = fs::read(&cli.file)?;
    println!("File size: {} bytes", input.len());
    println!("Using {:?} mode", cli.construction);

    let start = Instant::now();
    let output = session.transform_stream(&input, cli.mode.into())?;
    let elapsed = start.elapsed();

    fs::write(&cli.output, &output)?;
    session.close();

    println!(
        "Time to en/de-crypt {} bytes: {:.6}s",
        input.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
