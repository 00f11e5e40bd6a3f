//! Config file upgrades: detect keys missing from an older YAML file and
//! write them back with their default values, keeping existing values.

use crate::config::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys from `CONFIG_KEYS` that are absent in the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty → nothing to do).
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));

    Ok(missing)
}
