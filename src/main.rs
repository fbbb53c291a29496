use anyhow::Result;
use clap::{Parser, Subcommand};
mod auth;
use saltbox::{DEFAULT_ROUNDS, KdfParams, decrypt_text, encrypt_text, storage};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
struct KdfArgs {
    /// PBKDF2 iteration count (default: 10000, the openssl `-iter` default
    /// this tool is compatible with)
    #[arg(long = "rounds")]
    rounds: Option<u32>,
}

impl KdfArgs {
    fn to_kdf_params(&self) -> Result<KdfParams> {
        Ok(KdfParams::new(self.rounds.unwrap_or(DEFAULT_ROUNDS))?)
    }
}

#[derive(Debug, clap::Args)]
struct IoArgs {
    /// Input text
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Input file (takes precedence over --text)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output file (default: print to stdout)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl IoArgs {
    fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.file {
            let bytes = storage::read(path)?;
            return Ok(String::from_utf8(bytes)?);
        }
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        auth::read_content()
    }

    fn write_output(&self, output: &str) -> Result<()> {
        match &self.output {
            Some(path) => storage::write(path, output.as_bytes()),
            None => {
                println!("{output}");
                Ok(())
            }
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "saltbox")]
#[command(
    version,
    about = "Password-based text encryption, compatible with OpenSSL's Salted__ containers."
)]
struct Cli {
    /// Password (otherwise taken from SALTBOX_PASSWORD, piped stdin, or a prompt)
    #[arg(long, global = true, value_name = "PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts text and prints a base64 Salted__ container
    Encrypt {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        kdf: KdfArgs,
    },

    /// Decrypts a base64 Salted__ container back into text
    Decrypt {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        kdf: KdfArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    match args.command {
        Commands::Encrypt { io, kdf } => {
            let content = io.read_input()?;
            let password = auth::read_password(args.password, true)?;
            let kdf = kdf.to_kdf_params()?;

            let encoded = encrypt_text(content.as_bytes(), password.as_bytes(), kdf)?;
            io.write_output(&encoded)?;
        }
        Commands::Decrypt { io, kdf } => {
            let content = io.read_input()?;
            let password = auth::read_password(args.password, false)?;
            let kdf = kdf.to_kdf_params()?;

            let plaintext = decrypt_text(&content, password.as_bytes(), kdf)?;
            io.write_output(&plaintext)?;
        }
    }

    Ok(())
}
