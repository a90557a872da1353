//! Encrypted persistence: the file on disk is a base64 blob.
//!
//! Run with: `cargo run --example encrypted_config`

use confkit::{Error, read, save};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Credentials {
    api_key: String,
    api_secret: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("confkit-encrypted.conf");
    let password = "pw123";

    let creds = Credentials {
        api_key: "AKIA-EXAMPLE".to_string(),
        api_secret: "wJalrXUtnFEMI-EXAMPLE".to_string(),
    };

    save(&path, &creds, Some(password))?;
    println!("On disk: {}", std::fs::read_to_string(&path)?);

    let loaded: Option<Credentials> = read(&path, None, Some(password))?;
    println!("Decrypted: {:?}", loaded.unwrap());

    // A wrong password surfaces as a cryptographic error, not as data.
    let wrong: Result<Option<Credentials>, Error> = read(&path, None, Some("hunter2"));
    match wrong {
        Err(e) => println!("Wrong password rejected: {e}"),
        Ok(v) => panic!("expected an error, got {v:?}"),
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
