use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::transport::{ReqwestTransport, RestRequest, Transport};
use crate::config::NotionSettings;
use crate::error::{NotionGqlError, Result};

pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2021-05-13";

/// Per-request data supplied by whoever accepted the GraphQL request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Forwarded verbatim as the `authorization` header.
    pub authorization: String,
}

impl RequestContext {
    pub fn new(authorization: impl Into<String>) -> Self {
        Self {
            authorization: authorization.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDatabaseArgs {
    pub id: Option<String>,
    pub start_cursor: Option<String>,
    pub page_size: Option<i32>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl QueryDatabaseArgs {
    /// Arguments that only pin the database, as used for nested page lists.
    pub fn for_database(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

// Absent arguments serialize as explicit nulls.
#[derive(Serialize)]
struct QueryDatabaseBody<'a> {
    start_cursor: Option<&'a str>,
    page_size: Option<i32>,
    filter: Option<&'a str>,
    sort: Option<&'a str>,
}

/// Builds and sends the REST calls behind every GraphQL operation.
///
/// Bodies come back exactly as Notion sent them; decoding into the type graph
/// happens in the GraphQL layer.
#[derive(Clone)]
pub struct NotionApi {
    transport: Arc<dyn Transport>,
    base_url: Url,
    version: String,
}

impl fmt::Debug for NotionApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionApi")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl NotionApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: Url::parse(NOTION_API_BASE).expect("valid default Notion URL"),
            version: NOTION_VERSION.to_string(),
        }
    }

    pub fn with_base_url(
        transport: Arc<dyn Transport>,
        base_url: &str,
        version: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(NotionGqlError::Config(format!(
                "Notion base URL {} cannot carry a path",
                base_url
            )));
        }
        Ok(Self {
            transport,
            base_url,
            version: version.into(),
        })
    }

    /// Client over the default `reqwest` transport, shaped by the config file.
    pub fn from_settings(settings: &NotionSettings) -> Result<Self> {
        let transport = ReqwestTransport::new(settings.timeout_secs.map(Duration::from_secs))?;
        Self::with_base_url(Arc::new(transport), &settings.base_url, &settings.version)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub async fn list_databases(
        &self,
        ctx: &RequestContext,
        start_cursor: Option<&str>,
        page_size: Option<i32>,
    ) -> Result<Value> {
        let mut url = self.endpoint(&["databases"])?;
        url.set_query(databases_query(start_cursor, page_size).as_deref());
        self.send(self.request(Method::GET, url, ctx, None)).await
    }

    pub async fn get_database(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        let url = self.endpoint(&["databases", id])?;
        self.send(self.request(Method::GET, url, ctx, None)).await
    }

    pub async fn query_database(
        &self,
        ctx: &RequestContext,
        args: &QueryDatabaseArgs,
    ) -> Result<Value> {
        let id = args
            .id
            .as_deref()
            .ok_or(NotionGqlError::MissingArgument("id"))?;
        let url = self.endpoint(&["databases", id, "query"])?;
        let body = serde_json::to_string(&QueryDatabaseBody {
            start_cursor: args.start_cursor.as_deref(),
            page_size: args.page_size,
            filter: args.filter.as_deref(),
            sort: args.sort.as_deref(),
        })?;
        self.send(self.request(Method::POST, url, ctx, Some(body)))
            .await
    }

    pub async fn get_page(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        let url = self.endpoint(&["pages", id])?;
        self.send(self.request(Method::GET, url, ctx, None)).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NotionGqlError::Config("Notion base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        ctx: &RequestContext,
        body: Option<String>,
    ) -> RestRequest {
        RestRequest {
            method,
            url: url.into(),
            headers: vec![
                ("authorization".to_string(), ctx.authorization.clone()),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Notion-Version".to_string(), self.version.clone()),
            ],
            body,
        }
    }

    async fn send(&self, request: RestRequest) -> Result<Value> {
        let method = request.method.clone();
        let url = request.url.clone();
        debug!(%method, %url, "Notion request");

        let response = self.transport.fetch(request).await?;
        if !response.ok() {
            warn!(%method, %url, status = response.status, "Notion request failed");
            return Err(NotionGqlError::Upstream(response.status_text));
        }

        debug!(%method, %url, status = response.status, "Notion response");
        response.json()
    }
}

/// Query string for `GET /databases`, with the leading `?`, or `None` when no
/// argument was given.
pub fn databases_query(start_cursor: Option<&str>, page_size: Option<i32>) -> Option<String> {
    if start_cursor.is_none() && page_size.is_none() {
        return None;
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(cursor) = start_cursor {
        query.append_pair("start_cursor", cursor);
    }
    if let Some(size) = page_size {
        query.append_pair("page_size", &size.to_string());
    }
    Some(query.finish())
}
