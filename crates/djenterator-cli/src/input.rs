//! Generator config loading.

use anyhow::{Context, Result};
use djenterator_spec::GeneratorConfig;
use std::fs;
use std::path::Path;

/// Load the generator config from a JSON file, or the defaults when no file is given.
///
/// The file may set any subset of the config fields. Unknown fields and
/// out-of-range values are rejected.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = GeneratorConfig::from_json_str(&json)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded generator config");
    Ok(config)
}
