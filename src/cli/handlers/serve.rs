use anyhow::Result;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let fallback = ctx.config.notion.authorization();
    let schema = ctx.schema()?;

    println!("Starting GraphQL server on http://{}:{}", host, port);
    println!("GraphiQL: http://{}:{}", host, port);
    if fallback.is_none() {
        println!("No token configured; clients must send an Authorization header");
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &host, port, fallback).await })?;
    Ok(())
}
