//! Warp! - Your lazy ssh command line helper
//!
//! Stores SSH targets (environment, hostname, ip, username, password) in a
//! local SQLite database and launches sessions through a fuzzy picker.
//!
//! SECURITY CAVEAT: passwords are stored and displayed in plain text. This
//! mirrors the tool's original behavior and is deliberate; do not point warp
//! at credentials you cannot afford to have on disk unencrypted.

pub mod cli;
pub mod core;
