//! REST side of the bridge: request construction and the pluggable transport.

mod client;
mod transport;

pub use client::{
    NOTION_API_BASE, NOTION_VERSION, NotionApi, QueryDatabaseArgs, RequestContext,
    databases_query,
};
pub use transport::{ReqwestTransport, RestRequest, RestResponse, Transport};
