// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand starts the TUI. Subcommands:
// - list: print the startup list as plain text and exit
// - config --show / --path / --reset: configuration management

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Terminal todo list with auto-expiring items
#[derive(Parser, Debug)]
#[command(name = "todo-tui")]
#[command(version = VERSION)]
#[command(about = "Terminal todo list with auto-expiring items", long_about = None)]
pub struct Cli {
    /// Start with the items from a JSON file: [{"text": "...", "done": false}, ...]
    #[arg(long, value_name = "FILE", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with an empty list, ignoring configured seed items
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the startup list and exit
    List,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Run a `config` subcommand
pub fn handle_config(show: bool, path: bool, reset: bool) -> anyhow::Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: todo-tui config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> anyhow::Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    if path.exists() {
        eprint!("Config file exists at {}. Overwrite? [y/N] ", path.display());
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
