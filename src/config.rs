use crate::catalog::CleanCategory;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clean: CleanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Categories enabled for cleaning (empty = all categories)
    pub categories: Vec<CleanCategory>,
    /// Ask for confirmation before deleting
    pub confirm: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            categories: vec![],
            confirm: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields the defaults; an
    /// explicitly requested path must exist. Unknown category tokens fail
    /// here rather than being carried as strings.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::ParseError { path, source })
    }

    /// Default config file location (`<config dir>/devsweep/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devsweep").join("config.toml"))
    }

    /// Whether a category is enabled for cleaning.
    ///
    /// An empty configured list means every category is enabled.
    pub fn is_category_enabled(&self, category: CleanCategory) -> bool {
        self.clean.categories.is_empty() || self.clean.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_all_categories() {
        let config = Config::default();
        for category in CleanCategory::ALL {
            assert!(config.is_category_enabled(category));
        }
        assert!(config.clean.confirm);
    }

    #[test]
    fn configured_categories_restrict_cleaning() {
        let config: Config = toml::from_str(
            r#"
            [clean]
            categories = ["gradle", "android-studio"]
            "#,
        )
        .unwrap();

        assert!(config.is_category_enabled(CleanCategory::Gradle));
        assert!(config.is_category_enabled(CleanCategory::AndroidStudio));
        assert!(!config.is_category_enabled(CleanCategory::Browser));
    }

    #[test]
    fn unknown_category_token_fails_to_parse() {
        let parsed: Result<Config, _> = toml::from_str(
            r#"
            [clean]
            categories = ["gradel"]
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[clean]"));
    }

    #[test]
    fn load_from_explicit_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[clean]\nconfirm = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.clean.confirm);
    }

    #[test]
    fn load_missing_explicit_path_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = Config::load(Some(&tmp.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
