use anyhow::{Result, anyhow, bail};

use crate::graphql::DEFAULT_QUERY;
use crate::notion::RequestContext;

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: Option<String>,
    variables: Option<String>,
) -> Result<()> {
    let authorization = ctx.config.notion.authorization().ok_or_else(|| {
        anyhow!("No Notion token configured. Pass --token, set NOTION_TOKEN, or add notion.token to the config file")
    })?;

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let schema = ctx.schema()?;
    let query = query.unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let request = async_graphql::Request::new(query)
        .variables(vars)
        .data(RequestContext::new(authorization));
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.errors.is_empty() {
        bail!("Query finished with {} error(s)", response.errors.len());
    }
    Ok(())
}
