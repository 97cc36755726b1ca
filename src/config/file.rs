use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::cli::InputFormat;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub format: InputFormat,
    pub event_size: Option<usize>,
    pub buttons: Option<usize>,
    #[serde(default)]
    pub passthrough: bool,
}

pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match parse(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("click-tap.toml")];

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("click-tap.toml"));
    }

    paths
}
