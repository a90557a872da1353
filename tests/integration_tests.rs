//!
//! End-to-end tests for `confkit`.
//!
//! These exercise the full save/read path through real files, in both
//! plain and encrypted form, across the sync and async variants.
//!

mod common;

use common::{AppConfig, sample_config};
use confkit::{Error, read, save};
use std::fs;
use tempfile::tempdir;

#[test]
fn full_roundtrip_plain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");

    save(&path, &sample_config(), None).unwrap();
    let loaded: Option<AppConfig> = read(&path, None, None).unwrap();

    assert_eq!(loaded, Some(sample_config()));
}

#[test]
fn full_roundtrip_encrypted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");

    save(&path, &sample_config(), Some("correct horse battery staple")).unwrap();
    let loaded: Option<AppConfig> =
        read(&path, None, Some("correct horse battery staple")).unwrap();

    assert_eq!(loaded, Some(sample_config()));
}

#[test]
fn encrypted_file_on_disk_is_opaque() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");

    save(&path, &sample_config(), Some("pw123")).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains("svc1"));
    assert!(!on_disk.contains("db.internal"));

    // Reading it without the password fails at the JSON stage, since the
    // stored bytes are ciphertext.
    let result: Result<Option<AppConfig>, Error> = read(&path, None, None);
    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[test]
fn validator_gates_the_loaded_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");
    save(&path, &sample_config(), Some("pw")).unwrap();

    let has_endpoints = |c: &AppConfig| !c.endpoints.is_empty();
    let loaded: Option<AppConfig> = read(&path, Some(&has_endpoints), Some("pw")).unwrap();
    assert!(loaded.is_some());

    let wants_tls_port = |c: &AppConfig| c.port == 443;
    let result: Result<Option<AppConfig>, Error> = read(&path, Some(&wants_tls_port), Some("pw"));
    assert!(matches!(result, Err(Error::InvalidConfig)));
}

#[test]
fn hand_written_json_is_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");

    // A user-edited file, not produced by `save`: compact formatting and
    // the optional field omitted.
    fs::write(
        &path,
        r#"{"Name":"svc1","Port":8080,"Endpoints":[{"Host":"db.internal","Port":5432}]}"#,
    )
    .unwrap();

    let loaded: Option<AppConfig> = read(&path, None, None).unwrap();
    let config = loaded.unwrap();
    assert_eq!(config.name, "svc1");
    assert_eq!(config.log_level, None);
    assert_eq!(config.endpoints.len(), 1);
}

#[test]
fn corrupted_ciphertext_does_not_yield_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");
    save(&path, &sample_config(), Some("pw")).unwrap();

    // Flip a character in the stored base64 blob.
    let mut on_disk = fs::read_to_string(&path).unwrap();
    let replacement = if on_disk.starts_with('A') { "B" } else { "A" };
    on_disk.replace_range(0..1, replacement);
    fs::write(&path, on_disk).unwrap();

    let result: Result<Option<AppConfig>, Error> = read(&path, None, Some("pw"));
    assert!(result.is_err());
}

#[test]
fn reconfigure_and_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.conf");

    save(&path, &sample_config(), Some("pw")).unwrap();

    let mut updated = sample_config();
    updated.port = 9090;
    updated.endpoints.pop();
    save(&path, &updated, Some("pw")).unwrap();

    let loaded: Option<AppConfig> = read(&path, None, Some("pw")).unwrap();
    assert_eq!(loaded, Some(updated));
}

#[cfg(feature = "async")]
mod async_variants {
    use super::*;
    use confkit::{read_async, save_async};

    #[tokio::test]
    async fn full_roundtrip_encrypted_async() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");

        save_async(&path, &sample_config(), Some("pw123"))
            .await
            .unwrap();
        let loaded: Option<AppConfig> = read_async(&path, None, Some("pw123")).await.unwrap();

        assert_eq!(loaded, Some(sample_config()));
    }

    #[tokio::test]
    async fn async_reads_sync_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");

        save(&path, &sample_config(), Some("pw")).unwrap();
        let loaded: Option<AppConfig> = read_async(&path, None, Some("pw")).await.unwrap();

        assert_eq!(loaded, Some(sample_config()));
    }

    #[tokio::test]
    async fn missing_file_reads_as_none_async() {
        let loaded: Option<AppConfig> = read_async("no/such/file.conf", None, None).await.unwrap();
        assert_eq!(loaded, None);
    }
}
