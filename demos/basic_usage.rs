//! Basic usage: save a config as plain JSON and read it back.
//!
//! Run with: `cargo run --example basic_usage`

use confkit::{read, save};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct AppConfig {
    name: String,
    port: u16,
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir();
    let path = dir.join("confkit-basic-usage.json");

    let config = AppConfig {
        name: "svc1".to_string(),
        port: 8080,
        debug: false,
    };

    save(&path, &config, None)?;
    println!("Saved to {}", path.display());

    // A validator can reject configs that parse but make no sense.
    let valid_port = |c: &AppConfig| c.port != 0;
    let loaded: Option<AppConfig> = read(&path, Some(&valid_port), None)?;
    println!("Loaded: {:?}", loaded.unwrap());

    // Reading a path that does not exist is not an error.
    let absent: Option<AppConfig> = read(dir.join("does-not-exist.json"), None, None)?;
    assert!(absent.is_none());

    std::fs::remove_file(&path)?;
    Ok(())
}
