use ecsign::{EcSigner, SignerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SignerConfig::load()?;
    config.init_logging();
    let signer = EcSigner::new();
    let files = signer.generate_keys(
        &config.public_key_path,
        &config.private_key_path,
        config.curve.as_str(),
    )?;

    println!("Curve: {}", files.curve);
    println!("Public key written to {}", files.public_key.display());
    println!("Private key written to {}", files.private_key.display());
    Ok(())
}
