use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Where archived pages are read from and documents are written to
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportConfig {
    /// Directory holding the archived listing and recipe pages
    #[serde(default = "default_archives_dir")]
    pub archives_dir: PathBuf,
    /// Directory the Markdown documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Optional path for a JSON summary of the run
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            archives_dir: default_archives_dir(),
            output_dir: default_output_dir(),
            report: None,
        }
    }
}

fn default_archives_dir() -> PathBuf {
    PathBuf::from("archives")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/content/recipes")
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LEMONS__ prefix
    /// 2. lemons.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LEMONS__OUTPUT_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config("lemons")
    }
}

/// Load configuration from `<name>.toml` (optional) and `LEMONS__*`
/// environment variables.
pub fn load_config(name: &str) -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(name).required(false))
        .add_source(Environment::with_prefix("LEMONS").separator("__"))
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::Mutex;

    // Tests that read or write LEMONS__* variables take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_lemons_env() {
        let keys: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("LEMONS__"))
            .map(|(k, _)| k)
            .collect();
        for key in keys {
            env::remove_var(&key);
        }
    }

    #[test]
    fn test_default_values() {
        let config = ImportConfig::default();
        assert_eq!(config.archives_dir, PathBuf::from("archives"));
        assert_eq!(config.output_dir, PathBuf::from("src/content/recipes"));
        assert!(config.report.is_none());
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_lemons_env();

        let config = load_config("definitely-missing-lemons-config").unwrap();
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_lemons_env();

        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("import.toml"),
            "archives_dir = \"/srv/archive\"\nreport = \"summary.json\"\n",
        )
        .unwrap();

        let name = dir.path().join("import");
        let config = load_config(name.to_str().unwrap()).unwrap();
        assert_eq!(config.archives_dir, PathBuf::from("/srv/archive"));
        assert_eq!(config.output_dir, PathBuf::from("src/content/recipes"));
        assert_eq!(config.report, Some(PathBuf::from("summary.json")));
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_lemons_env();

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("import.toml"), "output_dir = \"from-file\"\n").unwrap();

        env::set_var("LEMONS__OUTPUT_DIR", "from-env");
        let result = load_config(dir.path().join("import").to_str().unwrap());
        clear_lemons_env();

        let config = result.unwrap();
        assert_eq!(config.output_dir, PathBuf::from("from-env"));
        assert_eq!(config.archives_dir, PathBuf::from("archives"));
    }
}
