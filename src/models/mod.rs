mod curve;
mod digest;
mod error;
mod key;
mod signature;

pub use curve::{to_nid, CurveName};
pub use digest::DigestAlgorithm;
pub use error::{KeyRole, SignerError, SignerResult};
pub use key::KeyFiles;
pub use signature::{Signature, MAX_SIGNATURE_LEN};
