//! ECDSA signing and verification over PEM-encoded EC keys.
//!
//! Keys live on `secp256k1` or `brainpool256r1`; signatures are DER and
//! travel as colon-separated decimal bytes (`48:69:2:...:`).

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::SignerConfig;
pub use models::{
    to_nid, CurveName, DigestAlgorithm, KeyFiles, KeyRole, Signature, SignerError,
    SignerResult, MAX_SIGNATURE_LEN,
};
pub use services::{CryptoRuntime, EcSigner};
