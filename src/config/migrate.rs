//! Configuration file upgrades: detect keys missing from an older
//! `wedplanner.conf` and add them with their default values.

use super::{Config, default_owner, default_placeholder, default_separator_char};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key the current configuration knows about, with its default.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        (
            "database",
            Value::String(Config::database_file().to_string_lossy().to_string()),
        ),
        ("owner", Value::String(default_owner())),
        ("default_project", Value::Null),
        ("unassigned_placeholder", Value::String(default_placeholder())),
        ("separator_char", Value::String(default_separator_char())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: expected a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the configuration file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| k)
        .collect())
}

/// Add the missing keys to the file at `path`; returns the keys written.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in expected_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date, nothing to migrate.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))
        .map_err(|e| AppError::Config(format!("Failed to serialize {}: {}", path.display(), e)))?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));
    Ok(added)
}
