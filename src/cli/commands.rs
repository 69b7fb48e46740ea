use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notion-graphql")]
#[command(
    author,
    version,
    about = "Query Notion databases and pages through a GraphQL schema"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .notion-graphql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Notion integration token (overrides config)
    #[arg(long, global = true, env = "NOTION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable debug logging, including every Notion request
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the GraphQL endpoint with GraphiQL
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Execute a GraphQL query against Notion
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL document (defaults to listing database titles)
        query: Option<String>,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
