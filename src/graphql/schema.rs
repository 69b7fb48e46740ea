use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::error::NotionGqlError;
use crate::notion::{NotionApi, QueryDatabaseArgs, RequestContext};

use super::types::*;

pub type NotionSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Document shown to newcomers and run by `query` when no document is given.
pub const DEFAULT_QUERY: &str = r#"query {
  listDatabases {
    results {
      id
      title {
        plain_text
      }
    }
  }
}
"#;

pub fn build_schema(api: NotionApi) -> NotionSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(Arc::new(api))
        .finish()
}

fn request_parts<'a>(
    ctx: &Context<'a>,
) -> async_graphql::Result<(&'a NotionApi, &'a RequestContext)> {
    let api = ctx.data::<Arc<NotionApi>>()?;
    let request = ctx
        .data_opt::<RequestContext>()
        .ok_or(NotionGqlError::MissingAuthorization)?;
    Ok((api.as_ref(), request))
}

fn required_id(id: Option<String>) -> async_graphql::Result<String> {
    Ok(id.ok_or(NotionGqlError::MissingArgument("id"))?)
}

/// Shared by `queryDatabase` and the nested `experimental_pages` field.
pub(crate) async fn resolve_query_database(
    ctx: &Context<'_>,
    args: QueryDatabaseArgs,
) -> async_graphql::Result<PageList> {
    let (api, request) = request_parts(ctx)?;
    let body = api.query_database(request, &args).await?;
    Ok(PageList(body))
}

pub struct QueryRoot;

/// The main entrypoint to Notion API GraphQL
#[Object(name = "Query", rename_args = "snake_case")]
impl QueryRoot {
    /// Get a list of Notion databases
    async fn list_databases(
        &self,
        ctx: &Context<'_>,
        start_cursor: Option<String>,
        page_size: Option<i32>,
    ) -> async_graphql::Result<Option<DatabaseList>> {
        let (api, request) = request_parts(ctx)?;
        let body = api
            .list_databases(request, start_cursor.as_deref(), page_size)
            .await?;
        Ok(Some(DatabaseList(body)))
    }

    /// Retrieves a Database object using the ID specified
    async fn get_database(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Database id")] id: Option<String>,
    ) -> async_graphql::Result<Option<Database>> {
        let id = required_id(id)?;
        let (api, request) = request_parts(ctx)?;
        let body = api.get_database(request, &id).await?;
        Ok(Some(Database(body)))
    }

    /// Gets a list of Pages contained in the database, filtered and ordered according to the filter conditions and sort criteria provided in the request
    async fn query_database(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Identifier for a Notion database")] id: Option<String>,
        start_cursor: Option<String>,
        page_size: Option<i32>,
        filter: Option<String>,
        sort: Option<String>,
    ) -> async_graphql::Result<Option<PageList>> {
        let args = QueryDatabaseArgs {
            id,
            start_cursor,
            page_size,
            filter,
            sort,
        };
        resolve_query_database(ctx, args).await.map(Some)
    }

    /// Retrieves a Page object using the ID specified
    async fn get_page(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Identifier for a Notion page")] id: Option<String>,
    ) -> async_graphql::Result<Option<Page>> {
        let id = required_id(id)?;
        let (api, request) = request_parts(ctx)?;
        let body = api.get_page(request, &id).await?;
        Ok(Some(Page(body)))
    }
}
