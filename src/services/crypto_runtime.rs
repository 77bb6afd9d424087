use log::{debug, info};
use std::sync::{Mutex, MutexGuard};

static LIVE_HANDLES: Mutex<usize> = Mutex::new(0);

fn live_handles() -> MutexGuard<'static, usize> {
    LIVE_HANDLES.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Keeps the process-wide OpenSSL state initialised while held.
///
/// OpenSSL initialisation runs once per process and the guard counts the
/// signers relying on it. Dropping the last guard leaves the library
/// initialised; OpenSSL frees its global tables at process exit.
#[derive(Debug)]
pub struct CryptoRuntime {
    _private: (),
}

impl CryptoRuntime {
    pub fn acquire() -> Self {
        let mut live = live_handles();
        if *live == 0 {
            openssl::init();
            info!("OpenSSL runtime ready: {}", openssl::version::version());
        }
        *live += 1;
        debug!("Crypto runtime acquired ({} live)", *live);
        Self { _private: () }
    }

    /// Number of guards currently alive.
    pub fn live() -> usize {
        *live_handles()
    }
}

impl Clone for CryptoRuntime {
    fn clone(&self) -> Self {
        CryptoRuntime::acquire()
    }
}

impl Drop for CryptoRuntime {
    fn drop(&mut self) {
        let mut live = live_handles();
        *live = live.saturating_sub(1);
        debug!("Crypto runtime released ({} live)", *live);
    }
}
