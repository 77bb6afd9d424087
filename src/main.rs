use std::{fs, path::PathBuf, process::ExitCode};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, error};

use ecsign::{EcSigner, Signature, SignerConfig};

#[derive(Parser)]
#[command(name = "ecsign", version, about = "Sign and verify messages with EC keys")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair and write it as PEM
    Generate {
        #[arg(long)]
        public: Option<PathBuf>,
        #[arg(long)]
        private: Option<PathBuf>,
        /// secp256k1 or brainpool256r1
        #[arg(long)]
        curve: Option<String>,
        /// Print the written files as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign a message with a private key
    Sign {
        #[command(flatten)]
        input: MessageInput,
        #[arg(long)]
        private: Option<PathBuf>,
        /// sha256 or sha1
        #[arg(long)]
        digest: Option<String>,
        #[arg(long, value_enum, default_value_t = SignatureFormat::Colon)]
        format: SignatureFormat,
    },
    /// Verify a signature with a public key
    Verify {
        #[command(flatten)]
        input: MessageInput,
        #[arg(long)]
        signature: String,
        #[arg(long)]
        public: Option<PathBuf>,
        #[arg(long)]
        digest: Option<String>,
        #[arg(long, value_enum, default_value_t = SignatureFormat::Colon)]
        format: SignatureFormat,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MessageInput {
    /// Message text
    #[arg(long)]
    message: Option<String>,
    /// Read the message from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl MessageInput {
    fn read(&self) -> Result<Vec<u8>> {
        match (&self.message, &self.file) {
            (Some(message), _) => Ok(message.as_bytes().to_vec()),
            (None, Some(path)) => fs::read(path)
                .with_context(|| format!("Failed to read message from {}", path.display())),
            (None, None) => anyhow::bail!("either --message or --file is required"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SignatureFormat {
    /// Decimal bytes separated by ':'
    Colon,
    Hex,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = SignerConfig::load().context("Invalid signer configuration")?;
    config.init_logging();

    match cli.command {
        Command::Generate { public, private, curve, json } => {
            let public = public.unwrap_or(config.public_key_path);
            let private = private.unwrap_or(config.private_key_path);
            let curve = curve.unwrap_or_else(|| config.curve.to_string());

            let signer = EcSigner::new();
            let files = signer
                .generate_keys(&public, &private, &curve)
                .context("Key generation failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                println!("Public key:  {}", files.public_key.display());
                println!("Private key: {}", files.private_key.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Sign { input, private, digest, format } => {
            let private = private.unwrap_or(config.private_key_path);
            let digest = digest.unwrap_or_else(|| config.digest.to_string());
            let message = input.read()?;

            let mut signer = EcSigner::new();
            signer
                .load_privkey(&private)
                .with_context(|| format!("Failed to load private key {}", private.display()))?;
            let signature = signer.sign(&message, &digest).context("Signing failed")?;

            match format {
                SignatureFormat::Colon => println!("{}", signer.dump_signature()),
                SignatureFormat::Hex => println!("{}", signature.to_hex()),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { input, signature, public, digest, format } => {
            let public = public.unwrap_or(config.public_key_path);
            let digest = digest.unwrap_or_else(|| config.digest.to_string());
            let message = input.read()?;

            let mut signer = EcSigner::new();
            signer
                .load_pubkey(&public)
                .with_context(|| format!("Failed to load public key {}", public.display()))?;

            let verified = match format {
                SignatureFormat::Colon => {
                    signer.set_signature(signature.trim())?;
                    signer.verify_held(&message, &digest)
                }
                SignatureFormat::Hex => {
                    let parsed = Signature::from_hex(&signature)?;
                    signer.verify(&message, parsed.as_bytes(), &digest)
                }
            }
            .context("Verification failed")?;

            if verified {
                info!("Signature verified against {}", public.display());
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                error!("Signature does not match {}", public.display());
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
