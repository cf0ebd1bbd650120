//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.prompt.is_empty() {
        bail!("prompt cannot be empty");
    }

    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    if config.log_retention_days == 0 {
        bail!("log_retention_days must be at least 1");
    }

    // State keys must be lowercase identifiers, or condition clauses
    // (which lowercase their field name before lookup) can never reach them.
    for key in config.state.keys() {
        if key.is_empty() {
            bail!("state: keys cannot be empty");
        }
        let mut chars = key.chars();
        let first = chars.next().unwrap();
        if !(first.is_ascii_lowercase() || first == '_') {
            bail!(
                "state: key '{}' must start with a lowercase letter or '_'",
                key
            );
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            bail!(
                "state: key '{}' may only contain lowercase letters, digits and '_'",
                key
            );
        }
    }

    Ok(())
}
