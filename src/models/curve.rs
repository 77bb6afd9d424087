use openssl::nid::Nid;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::error::{SignerError, SignerResult};

/// Named curves keys can be generated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveName {
    Secp256k1,
    Brainpool256r1,
}

impl CurveName {
    pub const ALL: [CurveName; 2] = [CurveName::Secp256k1, CurveName::Brainpool256r1];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurveName::Secp256k1 => "secp256k1",
            CurveName::Brainpool256r1 => "brainpool256r1",
        }
    }

    pub fn nid(&self) -> Nid {
        match self {
            CurveName::Secp256k1 => Nid::SECP256K1,
            CurveName::Brainpool256r1 => Nid::BRAINPOOL_P256R1,
        }
    }

    pub fn from_nid(nid: Nid) -> Option<CurveName> {
        CurveName::ALL.into_iter().find(|curve| curve.nid() == nid)
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveName {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secp256k1" => Ok(CurveName::Secp256k1),
            "brainpool256r1" => Ok(CurveName::Brainpool256r1),
            other => Err(SignerError::UnsupportedCurve(other.to_string())),
        }
    }
}

/// Resolves a curve name to the OpenSSL curve identifier.
pub fn to_nid(curve_name: &str) -> SignerResult<Nid> {
    curve_name.parse::<CurveName>().map(|curve| curve.nid())
}
