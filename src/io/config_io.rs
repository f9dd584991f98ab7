use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ChartConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError { path: PathBuf, source: toml::de::Error },
}

/// Load `gantry.toml` from the directory containing the tasks file.
/// A missing config file is not an error; defaults apply.
pub fn load_config_for(tasks_path: &Path) -> Result<ChartConfig, ConfigError> {
    let dir = tasks_path.parent().unwrap_or_else(|| Path::new("."));
    let path = dir.join("gantry.toml");
    if !path.exists() {
        return Ok(ChartConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::ParseError { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_for(&dir.path().join("tasks.json")).unwrap();
        assert_eq!(config.ui.name_width, 26);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn config_overrides_are_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("gantry.toml"),
            r##"[ui]
name_width = 32

[ui.colors]
bar = "#4488FF"
"##,
        )
        .unwrap();
        let config = load_config_for(&dir.path().join("tasks.json")).unwrap();
        assert_eq!(config.ui.name_width, 32);
        assert_eq!(config.ui.colors.get("bar").map(String::as_str), Some("#4488FF"));
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gantry.toml"), "[ui\n").unwrap();
        let err = load_config_for(&dir.path().join("tasks.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
