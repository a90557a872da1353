//! Async variants: identical semantics, `tokio::fs` I/O.
//!
//! Run with: `cargo run --example async_config`

use confkit::{read_async, save_async};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct AppConfig {
    name: String,
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("confkit-async.conf");

    let config = AppConfig {
        name: "svc1".to_string(),
        port: 8080,
    };

    save_async(&path, &config, Some("pw123")).await?;
    let loaded: Option<AppConfig> = read_async(&path, None, Some("pw123")).await?;
    println!("Loaded: {:?}", loaded.unwrap());

    tokio::fs::remove_file(&path).await?;
    Ok(())
}
