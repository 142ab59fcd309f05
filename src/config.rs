use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use people_core_directory::DirectoryConfig;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "people-core")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load the directory configuration.
///
/// An explicit path must exist. Without one, the user config file is read
/// when present and `use_user_config` is set; otherwise defaults apply.
pub(crate) fn load_config(explicit: Option<&Path>, use_user_config: bool) -> Result<DirectoryConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    if !use_user_config {
        return Ok(DirectoryConfig::default());
    }
    match user_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => Ok(DirectoryConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<DirectoryConfig> {
    let meta = std::fs::metadata(path).map_err(io_error(path))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.display().to_string(),
            size: meta.len(),
            max: MAX_CONFIG_FILE_BYTES,
        });
    }

    let content = std::fs::read_to_string(path).map_err(io_error(path))?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use people_core_directory::MissingHeaderPolicy;

    #[test]
    fn test_user_config_path_is_deterministic() {
        // Either Some(path) or None depending on the platform, never a panic.
        let _ = user_config_path();
    }

    #[test]
    fn test_defaults_without_any_file() {
        let config = load_config(None, false).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sheet_name = \"Employee\"\nmissing_header = \"blank\"\n").unwrap();

        let config = load_config(Some(&path), true).unwrap();
        assert_eq!(config.sheet_name, "Employee");
        assert_eq!(config.missing_header, MissingHeaderPolicy::Blank);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml")), false).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sheet_nam = 1").unwrap();
        let err = load_config(Some(&path), false).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_oversized_file_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let padding = "#".repeat(MAX_CONFIG_FILE_BYTES as usize + 1);
        std::fs::write(&path, padding).unwrap();
        let err = load_config(Some(&path), false).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge { .. }));
    }
}
