//! GraphQL schema over the Notion REST API.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://localhost:4000)
//! notion-graphql serve --port 4000
//!
//! # Execute a query from the CLI
//! notion-graphql query '{ getPage(id: "…") { id archived parent { type database_id } } }'
//!
//! # Print the schema
//! notion-graphql schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `listDatabases`, `getDatabase`, `queryDatabase`, `getPage`
//! - **Nested**: `experimental_pages` on `NotionDatabase`

mod schema;
mod server;
mod types;

pub use schema::{DEFAULT_QUERY, NotionSchema, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
