//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize seed items to `[[seed]]` tables
    pub(super) fn seed_to_toml(&self) -> String {
        if self.seed.is_empty() {
            // Explicit empty list keeps the built-in seed from being applied
            return "seed = []\n".to_string();
        }

        let mut output = String::new();
        for item in &self.seed {
            output.push_str("[[seed]]\n");
            output.push_str(&format!("text = {}\n", toml_string(&item.text)));
            output.push_str(&format!("done = {}\n", item.done));
            output.push('\n');
        }
        output
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        // Root keys must precede any table, so an empty seed list renders first
        let (root_seed, table_seed) = if self.seed.is_empty() {
            (self.seed_to_toml(), String::new())
        } else {
            (String::new(), self.seed_to_toml())
        };

        format!(
            r#"# todo-tui configuration

# Theme: dark, light
theme = {theme}
{root_seed}
# Expiry sweep: undone items past their due date are removed
[expiry]
sweep_interval_secs = {sweep}
# New items are due this many hours after creation
default_due_hours = {due_hours}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the TUI log line)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}

# Items the list starts with (ids are assigned by position)
{table_seed}"#,
            theme = toml_string(&self.theme),
            root_seed = root_seed,
            sweep = self.expiry.sweep_interval_secs,
            due_hours = self.expiry.default_due_hours,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
            table_seed = table_seed,
        )
    }
}
