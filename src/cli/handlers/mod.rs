mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::AppConfig;
use crate::graphql::{NotionSchema, build_schema};
use crate::notion::NotionApi;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
}

impl CommandContext {
    /// Load the explicit config file, or discover one upward from the working
    /// directory, then apply a token given on the command line.
    pub fn load(config_path: Option<&Path>, token: Option<String>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir()?;
                let (config, found) = AppConfig::discover(&cwd).context("Failed to load config")?;
                if let Some(path) = found {
                    tracing::debug!(path = %path.display(), "Loaded config");
                }
                config
            }
        };

        if token.is_some() {
            config.notion.token = token;
        }
        Ok(Self { config })
    }

    pub fn schema(&self) -> Result<NotionSchema> {
        let api = NotionApi::from_settings(&self.config.notion)
            .context("Failed to set up the Notion client")?;
        tracing::debug!(base_url = api.base_url(), "Notion client ready");
        Ok(build_schema(api))
    }
}
