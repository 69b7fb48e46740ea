use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::notion::RequestContext;

use super::schema::NotionSchema;

#[derive(Clone)]
struct ServerState {
    schema: NotionSchema,
    fallback_authorization: Option<String>,
}

/// GraphQL on `POST /`, GraphiQL on `GET /`.
///
/// Each request's `Authorization` header is forwarded to Notion; requests without
/// one use `fallback_authorization` when it is set.
pub fn router(schema: NotionSchema, fallback_authorization: Option<String>) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(ServerState {
            schema,
            fallback_authorization,
        })
}

pub async fn run_server(
    schema: NotionSchema,
    host: &str,
    port: u16,
    fallback_authorization: Option<String>,
) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(addr = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema, fallback_authorization)).await?;
    Ok(())
}

async fn graphql_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(ctx) = request_context(&headers, state.fallback_authorization.as_deref()) {
        request = request.data(ctx);
    }
    state.schema.execute(request).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

fn request_context(headers: &HeaderMap, fallback: Option<&str>) -> Option<RequestContext> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .or(fallback)
        .map(RequestContext::new)
}
