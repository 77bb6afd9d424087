use serde::Serialize;
use std::path::PathBuf;

use crate::models::curve::CurveName;

/// Where a freshly generated key pair was written.
#[derive(Debug, Clone, Serialize)]
pub struct KeyFiles {
    pub curve: CurveName,
    pub public_key: PathBuf,
    pub private_key: PathBuf,
}
