mod crypto_runtime;
mod ec_signer;

pub use crypto_runtime::CryptoRuntime;
pub use ec_signer::EcSigner;
