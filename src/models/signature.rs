use std::fmt;
use std::str::FromStr;

use crate::models::error::{SignerError, SignerResult};

/// Largest DER-encoded ECDSA signature over a 256-bit curve.
pub const MAX_SIGNATURE_LEN: usize = 72;

const DELIMITER: char = ':';

/// DER-encoded ECDSA signature bytes.
///
/// The text form is every byte in decimal followed by `:`, e.g. `48:69:2:`.
/// An empty signature renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    pub fn from_bytes(bytes: Vec<u8>) -> SignerResult<Self> {
        if bytes.len() > MAX_SIGNATURE_LEN {
            return Err(SignerError::InvalidInput(format!(
                "signature is {} bytes, max {}",
                bytes.len(),
                MAX_SIGNATURE_LEN
            )));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn from_hex(input: &str) -> SignerResult<Self> {
        let bytes = hex::decode(input.trim())
            .map_err(|e| SignerError::Parse(format!("invalid hex signature: {}", e)))?;
        Self::from_bytes(bytes)
            .map_err(|e| SignerError::Parse(e.to_string()))
    }

    /// Colon-delimited decimal rendering, trailing delimiter included.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 4);
        for byte in &self.bytes {
            out.push_str(&byte.to_string());
            out.push(DELIMITER);
        }
        out
    }

    /// Parses the output of [`Signature::dump`].
    pub fn parse_dump(payload: &str) -> SignerResult<Self> {
        if payload.is_empty() {
            return Ok(Self::default());
        }

        let body = payload.strip_suffix(DELIMITER).ok_or_else(|| {
            SignerError::Parse("signature text must end with ':'".to_string())
        })?;

        let mut bytes = Vec::new();
        for (index, token) in body.split(DELIMITER).enumerate() {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SignerError::Parse(format!(
                    "token {} ({:?}) is not a decimal byte",
                    index, token
                )));
            }
            let byte = token.parse::<u8>().map_err(|_| {
                SignerError::Parse(format!(
                    "token {} ({}) is outside 0..=255",
                    index, token
                ))
            })?;
            if bytes.len() == MAX_SIGNATURE_LEN {
                return Err(SignerError::Parse(format!(
                    "signature text holds more than {} bytes",
                    MAX_SIGNATURE_LEN
                )));
            }
            bytes.push(byte);
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl FromStr for Signature {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::parse_dump(s)
    }
}
