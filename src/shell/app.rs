// Command Line Shell
// Parses commands, drives the session and prints results

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use super::session::{Session, DEFAULT_SESSION_FILE};
use crate::rsa::bigint::from_u64;
use crate::rsa::keygen::{DEFAULT_PRIME_MAX, DEFAULT_PRIME_MIN};
use crate::rsa::KeygenConfig;
use crate::util::{format_file_size, get_file_size, read_file, write_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Textbook RSA key generation and per-symbol encryption", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a key pair\nrsa_textbook keygen\n\n# Encrypt and decrypt a message\nrsa_textbook encrypt-text \"hello\"\nrsa_textbook decrypt-text\n\n# Encrypt a file and write the decrypted bytes elsewhere\nrsa_textbook encrypt-file ./notes.txt\nrsa_textbook decrypt-file --output ./notes.out"
)]
pub struct Cli {
    /// Path to the session file holding keys and ciphertexts
    #[arg(long, global = true, default_value = DEFAULT_SESSION_FILE)]
    pub session: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new key pair, replacing the session keys
    Keygen {
        /// Smallest prime candidate
        #[arg(long, default_value_t = DEFAULT_PRIME_MIN)]
        min: u64,

        /// Largest prime candidate
        #[arg(long, default_value_t = DEFAULT_PRIME_MAX)]
        max: u64,

        /// Give up after this many draws in any sampling loop
        #[arg(long)]
        max_attempts: Option<u64>,
    },
    /// Encrypt a message with the session public key
    EncryptText {
        message: String,
    },
    /// Decrypt the session's encrypted message
    DecryptText,
    /// Encrypt a file's bytes with the session public key
    EncryptFile {
        input: PathBuf,
    },
    /// Decrypt the session's encrypted file
    DecryptFile {
        /// Where to write the decrypted bytes. Printed as hex if omitted.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Show keys and ciphertexts held in the session
    Show,
    /// Forget keys and ciphertexts
    Clear,
}

/// Run one command against the session file
pub fn run(cli: Cli) -> Result<()> {
    let mut session = Session::load(&cli.session).context("failed to load session")?;
    let mut dirty = true;

    match cli.command {
        Commands::Keygen { min, max, max_attempts } => {
            let mut config = KeygenConfig::default().with_prime_range(from_u64(min), from_u64(max));
            config.max_attempts = max_attempts;

            info!("generating RSA keys from primes in [{min}, {max}]");
            let keys = session.generate_keys(&config).context("key generation failed")?;
            println!("Public Key: {}", keys.public_key);
            println!("Private Key: {}", keys.private_key);
            println!("Primes p: {}, q: {}", keys.primes.p, keys.primes.q);
        }
        Commands::EncryptText { message } => {
            let ciphertext = session.encrypt_message(&message)?;
            println!("Encrypted Message: {ciphertext}");
        }
        Commands::DecryptText => {
            let message = session.decrypt_message()?;
            println!("Decrypted Message: {message}");
            dirty = false;
        }
        Commands::EncryptFile { input } => {
            let size = get_file_size(&input)?;
            println!("File size: {}", format_file_size(size));
            let content = read_file(&input)?;
            let ciphertext = session.encrypt_file(&content)?;
            info!("encrypted {} into {} values", input.display(), ciphertext.len());
            println!("File encrypted successfully.");
        }
        Commands::DecryptFile { output } => {
            let content = session.decrypt_file()?;
            match output {
                Some(path) => {
                    write_file(&path, &content)?;
                    println!("Decrypted file written to {}", path.display());
                }
                None => println!("{}", hex::encode(&content)),
            }
            dirty = false;
        }
        Commands::Show => {
            match &session.keys {
                Some(keys) => {
                    println!("Public Key: {}", keys.public_key);
                    println!("Private Key: {}", keys.private_key);
                    println!("Primes p: {}, q: {}", keys.primes.p, keys.primes.q);
                }
                None => println!("No keys generated."),
            }
            if let Some(ciphertext) = &session.text_ciphertext {
                println!("Encrypted Message: {ciphertext}");
            }
            if let Some(ciphertext) = &session.file_ciphertext {
                println!("Encrypted File: {} values", ciphertext.len());
            }
            dirty = false;
        }
        Commands::Clear => {
            session.clear();
            println!("Session cleared.");
        }
    }

    if dirty {
        session.save(&cli.session).context("failed to save session")?;
    }

    Ok(())
}
