// Startup - builds the initial todo store
//
// Seed precedence: --empty > --seed FILE > config [[seed]] > built-in seed.

use crate::cli::Cli;
use crate::config::Config;
use crate::todo::{SeedItem, TodoStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Build the store the controller starts with
pub fn initial_store(cli: &Cli, config: &Config) -> Result<TodoStore> {
    let records = if cli.empty {
        Vec::new()
    } else if let Some(path) = &cli.seed {
        load_seed_file(path)?
    } else {
        config.seed.clone()
    };

    let store = TodoStore::from_seed(records);
    tracing::info!(items = store.len(), "Todo list seeded");
    Ok(store)
}

/// Read seed records from a JSON array file
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedItem>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn seed_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_seed_file_overrides_config() {
        let file = seed_file(r#"[{"id": 1, "text": "From file", "done": true}, {"text": "Second"}]"#);
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["todo-tui", "--seed", path]);

        let store = initial_store(&cli, &Config::default()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.item_at(1).unwrap().text, "From file");
        assert!(store.item_at(1).unwrap().done);
        assert!(!store.item_at(2).unwrap().done);
    }

    #[test]
    fn test_empty_flag_wins() {
        let cli = Cli::parse_from(["todo-tui", "--empty"]);
        let store = initial_store(&cli, &Config::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_config_seed_by_default() {
        let cli = Cli::parse_from(["todo-tui"]);
        let store = initial_store(&cli, &Config::default()).unwrap();
        let texts: Vec<&str> = store.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["Task 1", "Task 2"]);
        assert!(store.item_at(2).unwrap().done);
    }

    #[test]
    fn test_bad_seed_file_reports_path() {
        let file = seed_file("not json");
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse seed file"));
    }

    #[test]
    fn test_missing_seed_file() {
        let err = load_seed_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
