use openssl::error::ErrorStack;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a key pair an operation needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Public,
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Key validation failed: {0}")]
    KeyValidationFailed(#[source] ErrorStack),

    #[error("Key generation failed: {0}")]
    GenerationFailed(#[source] ErrorStack),

    #[error("Signing failed: {0}")]
    SigningFailed(#[source] ErrorStack),

    #[error("Verification errored: {0}")]
    VerificationError(#[source] ErrorStack),

    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("Unsupported digest: {0}")]
    UnsupportedDigest(String),

    #[error("No {0} key loaded")]
    NoKeyLoaded(KeyRole),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type SignerResult<T> = std::result::Result<T, SignerError>;

impl SignerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SignerError::Io {
            path: path.into(),
            source,
        }
    }
}
