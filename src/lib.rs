//! # notion-graphql - a GraphQL facade over the Notion REST API
//!
//! Databases, pages, rich text, users and mentions are exposed as a typed
//! GraphQL schema. Each query operation turns into exactly one Notion REST call
//! whose JSON body backs the schema's object graph. Members of the body are
//! decoded only when a selected field reads them.
//!
//! ## Quick Start
//!
//! ```bash
//! export NOTION_TOKEN=secret_...
//!
//! # List databases shared with the integration
//! notion-graphql query
//!
//! # Rows of one database, second page
//! notion-graphql query '{ queryDatabase(id: "…", start_cursor: "…") { results { id } next_cursor } }'
//!
//! # Serve GraphiQL on http://localhost:4000
//! notion-graphql serve
//! ```
//!
//! ## Embedding
//!
//! ```no_run
//! use std::sync::Arc;
//! use notion_graphql::graphql::build_schema;
//! use notion_graphql::notion::{NotionApi, RequestContext, ReqwestTransport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = NotionApi::new(Arc::new(ReqwestTransport::new(None)?));
//! let schema = build_schema(api);
//! let request = async_graphql::Request::new("{ listDatabases { next_cursor } }")
//!     .data(RequestContext::new("Bearer secret_..."));
//! let response = schema.execute(request).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: Type graph, resolvers and HTTP server
//! - [`logging`]: Tracing setup
//! - [`notion`]: REST request construction and transport

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.notion-graphql.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `NotionGqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema mirroring Notion's resources.
pub mod graphql;

/// Tracing subscriber setup for stderr and the optional JSON log file.
pub mod logging;

/// REST side: request construction and the pluggable transport.
pub mod notion;
