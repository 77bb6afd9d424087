use log::debug;
use std::fs;
use std::path::Path;

use crate::models::{SignerError, SignerResult};

/// Reads a PEM file, tagging any I/O failure with the path.
pub fn read_pem(path: &Path) -> SignerResult<Vec<u8>> {
    debug!("Reading PEM file: {}", path.display());
    fs::read(path).map_err(|e| SignerError::io(path, e))
}

/// Writes a PEM file, truncating anything already there.
pub fn write_pem(path: &Path, pem: &[u8]) -> SignerResult<()> {
    debug!("Writing {} bytes of PEM to {}", pem.len(), path.display());
    fs::write(path, pem).map_err(|e| SignerError::io(path, e))
}
