//! # Confkit: Typed Configuration Persistence
//!
//! `confkit` saves strongly-typed configuration values as JSON files and
//! loads them back, with optional password-based encryption of the file
//! contents (AES-256-CBC, key and IV derived from the password).
//!
//! It aims to make the common "small config file next to the binary"
//! workflow a one-liner, while keeping the error surface explicit enough
//! for callers to branch on failure category.
//!
//! ## Core Concepts
//!
//! - **`read` / `save`**: blocking persistence of any `serde` type. A
//!   missing file is not an error; `read` returns `Ok(None)`.
//! - **`read_async` / `save_async`**: identical semantics, `tokio::fs`
//!   I/O (behind the `async` feature, enabled by default).
//! - **`encryption`**: the password-based cipher used when a password is
//!   supplied. Deterministic; see the module docs before relying on it
//!   for anything beyond casual at-rest protection.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confkit::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct AppConfig {
//!     name: String,
//!     port: u16,
//! }
//!
//! fn main() -> Result<(), Error> {
//!     let config = AppConfig { name: "svc1".into(), port: 8080 };
//!
//!     // Encrypt with a password, or pass None for plain JSON.
//!     save("app.conf", &config, Some("pw123"))?;
//!
//!     let loaded: Option<AppConfig> = read("app.conf", None, Some("pw123"))?;
//!     assert_eq!(loaded.unwrap().port, 8080);
//!     Ok(())
//! }
//! ```

pub mod encryption;
pub mod error;
pub mod store;

pub use error::Error;
pub use store::sync_::{read, save};

#[cfg(feature = "async")]
pub use store::async_::{read_async, save_async};

// --- Prelude ---
// A collection of the most commonly used functions and types.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::store::sync_::{read, save};

    #[cfg(feature = "async")]
    pub use crate::store::async_::{read_async, save_async};
}

/// The version of the `confkit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
