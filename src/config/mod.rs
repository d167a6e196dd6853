//! Configuration for the todo TUI
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/todo-tui/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::todo::SeedItem;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod expiry;
mod logging;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use expiry::{ExpiryConfig, FileExpiry};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Items the list starts with when neither config nor CLI supplies any
pub fn default_seed() -> Vec<SeedItem> {
    vec![SeedItem::new("Task 1", false), SeedItem::new("Task 2", true)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Expiry sweep timing and the due date given to new items
    pub expiry: ExpiryConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Startup items
    pub seed: Vec<SeedItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            expiry: ExpiryConfig::default(),
            logging: LoggingConfig::default(),
            seed: default_seed(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [expiry] section
    pub expiry: Option<FileExpiry>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [[seed]] tables; an explicit empty list means "start empty"
    pub seed: Option<Vec<SeedItem>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/todo-tui/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("todo-tui").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed is fatal: the
    /// process exits with the location and the parser error.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: each [[seed]] entry needs a quoted `text` value.");
                    eprintln!("  To reset, run `todo-tui config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Theme: env > file > default
        let theme = env("TODO_TUI_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        // Sweep interval: env > file > default
        let mut expiry = ExpiryConfig::from_file(file.expiry);
        if let Some(secs) = env("TODO_TUI_SWEEP_SECS").and_then(|v| v.parse::<u64>().ok()) {
            expiry.sweep_interval_secs = secs.max(1);
        }

        let logging = LoggingConfig::from_file(file.logging);
        let seed = file.seed.unwrap_or_else(default_seed);

        Self {
            theme,
            expiry,
            logging,
            seed,
        }
    }
}
