//! # Seed Data Generator
//!
//! Registers demo accounts in the local store for development sign-in.
//!
//! ## Usage
//! ```bash
//! # Seed into the platform data directory
//! cargo run -p shophub-store --bin seed
//!
//! # Seed into a custom directory
//! cargo run -p shophub-store --bin seed -- --data-dir ./shophub_dev
//! ```
//!
//! Already-registered emails are skipped, so re-running is harmless.

use std::env;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use shophub_core::types::NewAccount;
use shophub_core::AuthError;
use shophub_store::{CredentialStore, JsonFileStore, LocalCredentialStore, StoreError};

/// Demo accounts: (first, last, email, phone, password).
const DEMO_ACCOUNTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Priya", "Nair", "priya@example.com", "9876543210", "secret1"),
    ("Arjun", "Mehta", "arjun@example.com", "9812345670", "secret1"),
    ("Sana", "Khan", "sana@example.com", "7012345678", "secret1"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut data_dir: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ShopHub Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: platform data dir)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 ShopHub Seed Data Generator");
    println!("==============================");

    let store = match data_dir {
        Some(dir) => JsonFileStore::new(dir)?,
        None => JsonFileStore::open_default()?,
    };
    println!("Data directory: {}", store.dir().display());
    println!();

    let credentials = LocalCredentialStore::new(std::sync::Arc::new(store));

    let mut registered = 0;
    let mut skipped = 0;

    for (first, last, email, phone, password) in DEMO_ACCOUNTS {
        let account = NewAccount {
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            email: (*email).to_string(),
            phone: (*phone).to_string(),
            password: (*password).to_string(),
            confirm_password: (*password).to_string(),
        };

        match credentials.register(&account) {
            Ok(created) => {
                println!("✓ {} <{}>", created.display_name(), created.email);
                registered += 1;
            }
            Err(StoreError::Auth(AuthError::DuplicateEmail { .. })) => {
                println!("⚠ {} already registered, skipping", email);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!();
    println!(
        "✓ Seed complete: {} registered, {} skipped",
        registered, skipped
    );
    println!("  Sign in with any seeded email and password 'secret1'.");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shophub=trace` - Show trace for shophub crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shophub=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
