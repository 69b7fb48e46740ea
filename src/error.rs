use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotionGqlError {
    /// Non-2xx answer from Notion. Displays as the bare status text.
    #[error("{0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("No authorization supplied for this request")]
    MissingAuthorization,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, NotionGqlError>;
