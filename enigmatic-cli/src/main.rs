//! Command-line interface for the Enigmatic cipher tool.
//!
//! Runs a single `encrypt`, `decrypt`, or `analyze` command, or an
//! interactive session when invoked without a subcommand.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use enigmatic_core::analysis;
use enigmatic_core::cipher::Cipher;
use enigmatic_core::key::Key;
use enigmatic_machine::Simulator;
use log::error;
use std::fs;
use std::path::{Path, PathBuf};

mod repl;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Encrypt text, generating a random key when none is supplied
    Encrypt {
        /// Text to encrypt
        text: Option<String>,

        /// Read input from a file instead of the command line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Write the ciphertext to a file instead of the console
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save the key (with its initial position) to a JSON file
        #[arg(long)]
        save_key: Option<PathBuf>,

        /// Use the key from a JSON key file
        #[arg(long)]
        key: Option<PathBuf>,
    },
    /// Decrypt text with a key file
    Decrypt {
        /// Text to decrypt
        text: Option<String>,

        /// The JSON key file; it must carry the message's initial position
        #[arg(long)]
        key: PathBuf,

        /// Read input from a file instead of the command line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Write the plaintext to a file instead of the console
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Analyze text patterns and entropy
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Read input from a file instead of the command line
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            if let Err(e) = run(&command) {
                error!("{e:#}");
                std::process::exit(1);
            }
        }
        None => repl::run(),
    }
}

/// Executes one command. The interactive loop calls this too, so failures
/// come back as errors instead of terminating the process.
pub(crate) fn run(command: &Commands) -> Result<()> {
    let cipher = Cipher::new(Simulator);

    match command {
        Commands::Encrypt {
            text,
            file,
            output,
            save_key,
            key,
        } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            let key = key.as_deref().map(load_key).transpose()?;

            let encryption = cipher.encrypt(&mut rand::rng(), &text, key)?;

            match output {
                Some(path) => {
                    fs::write(path, &encryption.ciphertext)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    println!("Encrypted text saved to {}", path.display());
                }
                None => {
                    println!("Encryption successful");
                    println!("\nEncrypted Text: {}", encryption.ciphertext);
                }
            }

            let key_json = serde_json::to_string_pretty(&encryption.key)
                .context("failed to serialize the key")?;
            match save_key {
                Some(path) => {
                    fs::write(path, key_json)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    println!("Key saved to {}", path.display());
                }
                None => println!("\nKey: {key_json}"),
            }
        }
        Commands::Decrypt {
            text,
            key,
            file,
            output,
        } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            let key = load_key(key)?;

            let plaintext = cipher.decrypt(&text, &key)?;

            match output {
                Some(path) => {
                    fs::write(path, &plaintext)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    println!("Decrypted text saved to {}", path.display());
                }
                None => {
                    println!("Decryption successful");
                    println!("\nDecrypted text: {plaintext}");
                }
            }
        }
        Commands::Analyze { text, file } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            let report = analysis::analyze(&text)?;
            print_report(&report);
        }
    }

    Ok(())
}

/// Resolves the input text from the positional argument or `--file`.
fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        return Ok(content.trim().to_string());
    }
    match text {
        Some(text) => Ok(text.to_string()),
        None => bail!("no input text; pass TEXT or --file <path>"),
    }
}

/// Loads and validates a key file. A malformed key reports the first
/// violated constraint.
fn load_key(path: &Path) -> Result<Key> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read key file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid key file '{}'", path.display()))
}

fn print_report(report: &analysis::TextAnalysis) {
    println!("Text Analysis:");
    println!("\nLength: {} characters", report.length);
    println!("Unique characters: {}", report.unique_chars);
    println!("Entropy: {:.2} bits per character", report.entropy);

    let mut frequencies: Vec<(char, f64)> = report
        .char_frequency
        .iter()
        .map(|(&ch, &pct)| (ch, pct))
        .collect();
    frequencies.sort_by_key(|&(ch, _)| ch);

    println!("\nCharacter Frequencies:");
    for (ch, pct) in frequencies {
        println!("  {ch}: {pct:.2}%");
    }

    println!("\nMost Common Trigrams:");
    for (gram, fraction) in &report.ngrams {
        println!("  {gram}: {fraction:.4}");
    }
}
