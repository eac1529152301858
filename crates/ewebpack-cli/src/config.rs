//! Tool settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns these settings; the core crate never sees them. They are
//! unrelated to a project's `ewebpack.json`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `EWEBPACK_OUTPUT__NO_COLOR`, `EWEBPACK_TEMPLATES__DIR`
//!    (a `.env` file is read into the environment at startup)
//! 3. Settings file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "EWEBPACK";

/// Tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `electron-main.js`, `main-webpack.config.js` and
    /// `renderer-webpack.config.js`. The embedded templates are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from defaults, the settings file, and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading settings");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        Config::builder()
            .set_default("output.no_color", false)
            .map_err(config_error)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(config_error)
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ewebpack.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ewebpack", "ewebpack")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ewebpack.toml"))
    }

    /// Render the active settings as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise settings: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.dir.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = true\n[templates]\ndir = \"/opt/tpl\"\n").unwrap();

        let cfg = AppConfig::load_from(&path, true, env(&[])).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("/opt/tpl")));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[templates]\ndir = \"/from/file\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[("EWEBPACK_TEMPLATES__DIR", "/from/env")]),
        )
        .unwrap();
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn missing_required_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml"), true, env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn toml_omits_unset_template_dir() {
        let rendered = AppConfig::default().to_toml().unwrap();
        assert!(rendered.contains("no_color = false"));
        assert!(!rendered.contains("dir"));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
