use crate::error::{Result, SkillAssessError};
use crate::types::config::SkillAssessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "skillassess.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".skillassess/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/skillassess/config.toml";

/// Loads and validates config for `root`. Global, project and local files are
/// deep-merged in that order; when none exists the result is `None`.
pub fn load_config(root: &Path) -> Result<Option<SkillAssessConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SkillAssessConfig>> {
    let layers = [
        global_path.map(Path::to_path_buf),
        Some(root.join(DEFAULT_CONFIG_FILE)),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in layers.iter().flatten() {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: SkillAssessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SkillAssessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::debug!(path = %path.display(), "merged config layer");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SkillAssessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
