//! Blocking read/save of configuration files.

use crate::encryption;
use crate::error::Error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a configuration from `path`, decrypting it first when a
/// non-empty password is supplied.
///
/// Returns `Ok(None)` when `path` does not refer to an existing regular
/// file; absence is not an error. An empty password is treated the same
/// as `None` (no decryption).
///
/// If a `validate` predicate is given and rejects the deserialized
/// value, the value is discarded and [`Error::InvalidConfig`] is
/// returned.
///
/// # Errors
///
/// [`Error::Crypto`] when decryption fails (malformed base64, corrupted
/// ciphertext, wrong password), [`Error::Deserialize`] for malformed
/// JSON, [`Error::Io`] for filesystem faults, and
/// [`Error::InvalidConfig`] on validator rejection.
pub fn read<T>(
    path: impl AsRef<Path>,
    validate: Option<&dyn Fn(&T) -> bool>,
    password: Option<&str>,
) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(None);
    }

    let mut text = fs::read_to_string(path)?;
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        text = encryption::decrypt(&text, password)?;
    }

    let config: T = serde_json::from_str(&text).map_err(Error::Deserialize)?;

    if let Some(validate) = validate {
        if !validate(&config) {
            return Err(Error::InvalidConfig);
        }
    }

    Ok(Some(config))
}

/// Serializes `config` as pretty-printed JSON and writes it to `path`,
/// encrypting the text first when a non-empty password is supplied.
///
/// Any existing file is overwritten in full. The write is a plain
/// `fs::write`; callers needing atomicity or mutual exclusion against
/// concurrent writers must provide it themselves.
///
/// # Errors
///
/// [`Error::Serialize`] if the value cannot be represented as JSON,
/// [`Error::Crypto`] if encryption fails, and [`Error::Io`] for
/// filesystem faults, all propagated unchanged.
pub fn save<T>(path: impl AsRef<Path>, config: &T, password: Option<&str>) -> Result<(), Error>
where
    T: Serialize,
{
    let mut text = serde_json::to_string_pretty(config)?;
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        text = encryption::encrypt(&text, password)?;
    }

    fs::write(path, text)?;
    Ok(())
}
