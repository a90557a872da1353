#![cfg(feature = "async")]

//! Async read/save of configuration files.
//!
//! Same contract as [`super::sync_`]; only the file I/O awaits. The
//! cryptographic transform is CPU-bound and short for config-sized
//! payloads, so it runs inline rather than on a blocking task.

use crate::encryption;
use crate::error::Error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;

/// Asynchronously reads a configuration from `path`, decrypting it first
/// when a non-empty password is supplied.
///
/// Semantically identical to [`crate::store::sync_::read`]: a path that
/// does not refer to an existing regular file yields `Ok(None)`, and the
/// error conditions are the same.
pub async fn read_async<T>(
    path: impl AsRef<Path>,
    validate: Option<&dyn Fn(&T) -> bool>,
    password: Option<&str>,
) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    // Mirror Path::is_file: any stat failure counts as "not a file".
    let is_file = match fs::metadata(path).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    };
    if !is_file {
        return Ok(None);
    }

    let mut text = fs::read_to_string(path).await?;
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

/// Asynchronously serializes `config` as pretty-printed JSON and writes
/// it to `path`, encrypting the text first when a non-empty password is
/// supplied.
///
/// Semantically identical to [`crate::store::sync_::save`]: any existing
/// file is overwritten in full, with no atomic rename.
pub async fn save_async<T>(
    path: impl AsRef<Path>,
    config: &T,
    password: Option<&str>,
) -> Result<(), Error>
where
    T: Serialize,
{
    let mut text = serde_json::to_string_pretty(config)?;
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        text = encryption::encrypt(&text, password)?;
    }

    fs::write(path, text).await?;
    Ok(())
}
