use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) retention_days: Option<u64>,
    #[serde(default)]
    pub(crate) max_entries: Option<usize>,
    #[serde(default)]
    pub(crate) auto_prune: Option<bool>,
    #[serde(default)]
    pub(crate) show_model: bool,
    #[serde(default)]
    pub(crate) show_branch: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) icons: HashMap<String, String>,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    /// Load from `explicit` if given, otherwise from the first default location that exists
    pub(crate) fn load(explicit: Option<&Path>) -> Self {
        let config_paths = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => Self::get_config_paths(),
        };

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        // Logging is not set up yet; it depends on this config
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/claudeflow/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("claudeflow").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/claudeflow/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("claudeflow").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.claudeflow.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".claudeflow.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("claudeflow")));
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
cache_dir = "/var/tmp/claudeflow"
retention_days = 7
max_entries = 50
auto_prune = false
show_model = true
show_branch = true
debug = true

[icons]
"/deploy" = "🚀"
"#,
        )
        .unwrap();
        assert_eq!(config.cache_dir, Some(PathBuf::from("/var/tmp/claudeflow")));
        assert_eq!(config.retention_days, Some(7));
        assert_eq!(config.max_entries, Some(50));
        assert_eq!(config.auto_prune, Some(false));
        assert!(config.show_model && config.show_branch && config.debug);
        assert_eq!(config.icons.get("/deploy").map(String::as_str), Some("🚀"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "show_branch = true\n").unwrap();
        let config = Config::load(Some(&path));
        assert!(config.show_branch);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "show_branch = \"sometimes\"\n").unwrap();
        let config = Config::load(Some(&path));
        assert!(!config.show_branch);
        assert!(config.icons.is_empty());
        assert_eq!(config.source, None);
    }
}
