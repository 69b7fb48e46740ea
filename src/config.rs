use crate::error::{NotionGqlError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".notion-graphql.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub notion: NotionSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotionSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent as the `Notion-Version` header.
    #[serde(default = "default_version")]
    pub version: String,

    /// Integration token used when a request carries no authorization of its own.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_version() -> String {
    "2021-05-13".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            token: None,
            timeout_secs: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl NotionSettings {
    /// The configured token as an `authorization` header value.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(|token| {
            if token.starts_with("Bearer ") {
                token.to_string()
            } else {
                format!("Bearer {}", token)
            }
        })
    }
}

impl AppConfig {
    /// Load the nearest config file above `start_path`, or defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NotionGqlError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
        assert_eq!(config.notion.version, "2021-05-13");
        assert!(config.notion.token.is_none());
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.notion.version, "2021-05-13");
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "notion:\n  token: secret_abc\n",
        )
        .unwrap();

        let (found, path) = AppConfig::discover(&nested).unwrap();
        assert_eq!(found.notion.token.as_deref(), Some("secret_abc"));
        assert_eq!(path.unwrap(), temp_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_authorization_adds_bearer_prefix() {
        let mut settings = NotionSettings::default();
        assert!(settings.authorization().is_none());

        settings.token = Some("secret_abc".to_string());
        assert_eq!(settings.authorization().unwrap(), "Bearer secret_abc");

        settings.token = Some("Bearer secret_abc".to_string());
        assert_eq!(settings.authorization().unwrap(), "Bearer secret_abc");
    }
}
