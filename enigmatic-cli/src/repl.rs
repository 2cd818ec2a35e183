//! The interactive read-eval loop.
//!
//! Lines are tokenized with shell-style quoting and dispatched through the
//! same subcommand tree as the one-shot invocation, so `encrypt "two words"`
//! behaves identically in both modes. Errors are printed and the loop
//! continues; only `exit`, `q`, or end of input leave the session.

use crate::Commands;
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "enigmatic", no_binary_name = true)]
struct ReplCommand {
    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() {
    println!("Enigmatic - Enigma machine toolkit");
    println!("Encryption | Decryption | Text Analysis");
    println!("\nType 'help' for available commands");

    let stdin = io::stdin();
    loop {
        print!("\nenigmatic> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("failed to read input: {e}");
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("q") {
            println!("Exiting.. Goodbye!");
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        };
        match ReplCommand::try_parse_from(words) {
            Ok(parsed) => {
                if let Err(e) = crate::run(&parsed.command) {
                    eprintln!("Error: {e:#}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn print_help() {
    println!(
        "
Available commands:
  encrypt [TEXT] [--key FILE] [--file FILE] [--output FILE] [--save-key FILE]
                    Encrypt text; a random key is generated when none is given.
  decrypt [TEXT] --key FILE [--file FILE] [--output FILE]
                    Decrypt text using a key file. The key must carry the
                    initial position recorded at encryption time.
  analyze [TEXT] [--file FILE]
                    Report length, character frequencies, entropy, and the
                    most common trigrams.
  help              Show this help message.
  exit | q          Exit the program."
    );
}

/// Splits a command line into words, honoring single and double quotes.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }
    if quote.is_some() {
        return Err("unmatched quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
