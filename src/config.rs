use std::{env, path::PathBuf};
use dotenv::dotenv;
use log::info;

use crate::models::{CurveName, DigestAlgorithm, SignerResult};

pub const CURVE_VAR: &str = "ECSIGN_CURVE";
pub const DIGEST_VAR: &str = "ECSIGN_DIGEST";
pub const PUBLIC_KEY_VAR: &str = "ECSIGN_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "ECSIGN_PRIVATE_KEY";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Defaults for the binaries, taken from `.env` and the environment.
#[derive(Debug, Clone)]
pub struct SignerConfig {
    pub curve: CurveName,
    pub digest: DigestAlgorithm,
    pub public_key_path: PathBuf,
    pub private_key_path: PathBuf,
    pub log_level: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            curve: CurveName::Secp256k1,
            digest: DigestAlgorithm::Sha256,
            public_key_path: PathBuf::from("pub.pem"),
            private_key_path: PathBuf::from("priv.pem"),
            log_level: "info".to_string(),
        }
    }
}

impl SignerConfig {
    pub fn load() -> SignerResult<Self> {
        // Load .env file
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; unset names keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> SignerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SignerConfig::default();

        if let Some(curve) = lookup(CURVE_VAR) {
            config.curve = curve.parse()?;
        }
        if let Some(digest) = lookup(DIGEST_VAR) {
            config.digest = digest.parse()?;
        }
        if let Some(path) = lookup(PUBLIC_KEY_VAR) {
            config.public_key_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(PRIVATE_KEY_VAR) {
            config.private_key_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Starts `env_logger` with `log_level` as the default filter; `RUST_LOG` still wins.
    ///
    /// Only the first call installs a logger.
    pub fn init_logging(&self) {
        let _ = env_logger::try_init_from_env(
            env_logger::Env::new().default_filter_or(self.log_level.as_str()),
        );
        info!(
            "Signer config: curve={}, digest={}, public={}, private={}",
            self.curve,
            self.digest,
            self.public_key_path.display(),
            self.private_key_path.display()
        );
    }
}
