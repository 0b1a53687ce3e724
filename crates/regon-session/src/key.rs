//! Cache key derivation for session tokens.

use regon_core::Environment;
use sha2::{Digest, Sha256};

const KEY_PREFIX: &str = "gus_session_";

/// Cache key under which the token for `api_key` in `environment` is stored.
///
/// Pure function of its inputs, so every process using the same credentials
/// finds the same entry. The key is hashed, never stored in clear.
#[must_use]
pub fn session_cache_key(api_key: &str, environment: Environment) -> String {
    let digest = Sha256::digest(format!("{}:{api_key}", environment.as_str()).as_bytes());
    format!("{KEY_PREFIX}{}", hex::encode(digest))
}
