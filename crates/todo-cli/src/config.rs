use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

impl TodoConfig {
    pub fn new(backend: StoreBackend, db_path: Option<PathBuf>) -> Self {
        Self {
            store: StoreSection {
                backend,
                path: db_path.map(|path| path.to_string_lossy().to_string()),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("todos.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TodoConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &TodoConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("todo"));
        }
    }
    Ok(home_dir()?.join(".config").join("todo"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("todo"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("todo"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo").join("config.toml");
        let config = TodoConfig::new(StoreBackend::Sqlite, Some(dir.path().join("todos.db")));

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded.store.backend, StoreBackend::Sqlite);
        assert_eq!(loaded.store.path, config.store.path);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: TodoConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert!(config.store.path.is_none());

        let config: TodoConfig = toml::from_str("[store]\nbackend = \"memory\"\n").unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nbackend = \"postgres\"\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
