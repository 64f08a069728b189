//! Configuration file handling for newsify.
//!
//! Loads configuration from `~/.config/newsify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, NEWSIFY_ENDPOINT_ENV};
use crate::navigation::DEFAULT_RESULT_PAGE;
use crate::style::StylePreset;

/// Configuration file structure for newsify.
/// Loaded from ~/.config/newsify/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResultsConfig {
    pub page: Option<String>,
    pub origin: Option<String>,
    pub stylesheet: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CameraConfig {
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct StyleConfig {
    #[serde(default)]
    pub default: StylePreset,
}

impl Config {
    /// Read `path` (or the default location). A missing file yields the
    /// built-in defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Service base URL: command line, then `NEWSIFY_ENDPOINT`, then the
    /// config file, then the built-in default.
    pub fn base_url(&self, cli: Option<&str>) -> String {
        let env = std::env::var(NEWSIFY_ENDPOINT_ENV).ok();
        resolve_base_url(cli, env.as_deref(), self.endpoint.base_url.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        self.endpoint
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn result_page(&self) -> &str {
        self.results.page.as_deref().unwrap_or(DEFAULT_RESULT_PAGE)
    }
}

fn resolve_base_url(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

/// Contents written by `newsify config init`.
pub const DEFAULT_CONFIG: &str = r#"# newsify configuration

[endpoint]
# newsify service (overridden by NEWSIFY_ENDPOINT or --endpoint)
base_url = "http://127.0.0.1:5000"
# Seconds to wait for the article
timeout_secs = 120

[results]
# Result page the article is handed to
page = "/newsified.html"
# Origin prepended to the result page when printing the URL
# origin = "http://localhost:3000"
# Where to write the theme stylesheet returned by the service
# stylesheet = "src/newsified.css"

[camera]
# Still frame kept up to date by your webcam tool
# snapshot = "/tmp/webcam.jpg"

[style]
# formal, tabloid, blog, social
default = "formal"
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
/// Never overwrites an existing file.
pub fn init_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(write_err)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("newsify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/newsify/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("none.toml"))).unwrap();
        assert!(config.endpoint.base_url.is_none());
        assert_eq!(config.style.default, StylePreset::Formal);
        assert_eq!(config.result_page(), "/newsified.html");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.endpoint.base_url.as_deref(),
            Some("http://127.0.0.1:5000")
        );
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.result_page(), "/newsified.html");
        assert!(config.camera.snapshot.is_none());
    }

    #[test]
    fn test_load_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[endpoint]
base_url = "http://news.local"

[results]
page = "/out.html"
stylesheet = "out/theme.css"

[camera]
snapshot = "/tmp/frame.jpg"

[style]
default = "tabloid"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.endpoint.base_url.as_deref(), Some("http://news.local"));
        assert_eq!(config.result_page(), "/out.html");
        assert_eq!(config.results.stylesheet, Some(PathBuf::from("out/theme.css")));
        assert_eq!(config.camera.snapshot, Some(PathBuf::from("/tmp/frame.jpg")));
        assert_eq!(config.style.default, StylePreset::Tabloid);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[style]\ndefault = \"gossip\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_init_file_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert_eq!(Config::load(Some(&path)).unwrap().style.default, StylePreset::Formal);

        std::fs::write(&path, "[style]\ndefault = \"blog\"\n").unwrap();
        let err = init_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert_eq!(Config::load(Some(&path)).unwrap().style.default, StylePreset::Blog);
    }

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://cli"), Some("http://env"), Some("http://file")),
            "http://cli"
        );
        assert_eq!(
            resolve_base_url(None, Some("http://env"), Some("http://file")),
            "http://env"
        );
        assert_eq!(resolve_base_url(None, Some(" "), Some("http://file")), "http://file");
        assert_eq!(resolve_base_url(None, None, None), DEFAULT_BASE_URL);
    }
}
