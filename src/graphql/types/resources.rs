use async_graphql::{Context, Enum, Object, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::graphql::schema::resolve_query_database;
use crate::notion::QueryDatabaseArgs;

use super::fields::{decode, field, payload, required};
use super::rich_text::RichText;
use super::scalars::NotionProperties;

fn rich_texts(raw: &Value, name: &'static str) -> Result<Vec<RichText>> {
    Ok(field::<Vec<Value>>(raw, name)?
        .into_iter()
        .map(RichText)
        .collect())
}

/// A Notion database.
#[derive(Clone, Debug, PartialEq)]
pub struct Database(pub Value);

#[Object(name = "NotionDatabase", rename_fields = "snake_case")]
impl Database {
    /// Always "database"
    async fn object(&self) -> Result<String> {
        field(&self.0, "object")
    }

    /// Unique identifier of the database
    async fn id(&self) -> Result<String> {
        field(&self.0, "id")
    }

    /// Date and time when this page was created
    async fn created_time(&self) -> Result<String> {
        field(&self.0, "created_time")
    }

    /// Date and time when this page was updated
    async fn last_edited_time(&self) -> Result<String> {
        field(&self.0, "last_edited_time")
    }

    /// Title
    async fn title(&self) -> Result<Vec<RichText>> {
        rich_texts(&self.0, "title")
    }

    /// Database Properties
    async fn properties(&self) -> Result<Option<NotionProperties>> {
        field(&self.0, "properties")
    }

    /// Experimental: the first page of rows in this database, unfiltered and unsorted.
    /// Costs one extra Notion request per database that selects it.
    #[graphql(name = "experimental_pages")]
    async fn experimental_pages(&self, ctx: &Context<'_>) -> Result<Option<PageList>> {
        let id: String = field(&self.0, "id")?;
        tracing::debug!(database = %id, "Resolving nested pages");
        resolve_query_database(ctx, QueryDatabaseArgs::for_database(&id))
            .await
            .map(Some)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page(pub Value);

#[Object(name = "NotionPageObject", rename_fields = "snake_case")]
impl Page {
    /// Always "page"
    async fn object(&self) -> Result<String> {
        field(&self.0, "object")
    }

    /// Unique identifier of the page
    async fn id(&self) -> Result<String> {
        field(&self.0, "id")
    }

    /// Date and time when this page was created
    async fn created_time(&self) -> Result<String> {
        field(&self.0, "created_time")
    }

    /// Date and time when this page was updated
    async fn last_edited_time(&self) -> Result<String> {
        field(&self.0, "last_edited_time")
    }

    /// The archived status of the page
    async fn archived(&self) -> Result<bool> {
        field(&self.0, "archived")
    }

    /// Property values of this page
    async fn properties(&self) -> Result<Option<NotionProperties>> {
        field(&self.0, "properties")
    }

    async fn parent(&self) -> Result<Parent> {
        required(&self.0, "parent").map(|raw| Parent(raw.clone()))
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[graphql(name = "ParentTypeEnum", rename_items = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ParentType {
    DatabaseId,
    PageId,
    Workspace,
}

/// Where a page lives.
#[derive(Clone, Debug, PartialEq)]
pub struct Parent(pub Value);

impl Parent {
    pub fn kind(&self) -> Result<ParentType> {
        field(&self.0, "type")
    }

    pub fn database_id(&self) -> Result<Option<String>> {
        payload(&self.0, "parent", ParentType::DatabaseId, "database_id")?
            .map(decode::<String>)
            .transpose()
    }

    pub fn page_id(&self) -> Result<Option<String>> {
        payload(&self.0, "parent", ParentType::PageId, "page_id")?
            .map(decode::<String>)
            .transpose()
    }
}

#[Object(name = "NotionParent", rename_fields = "snake_case")]
impl Parent {
    #[graphql(name = "type")]
    async fn parent_type(&self) -> Result<ParentType> {
        self.kind()
    }

    /// The ID of the database that this page belongs to
    #[graphql(name = "database_id")]
    async fn resolve_database_id(&self) -> Result<Option<String>> {
        self.database_id()
    }

    /// The ID of the page that this page belongs to
    #[graphql(name = "page_id")]
    async fn resolve_page_id(&self) -> Result<Option<String>> {
        self.page_id()
    }
}

/// One page of the databases listing.
#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseList(pub Value);

#[Object(name = "NotionDatabasesList", rename_fields = "snake_case")]
impl DatabaseList {
    async fn object(&self) -> Result<String> {
        field(&self.0, "object")
    }

    async fn results(&self) -> Result<Vec<Database>> {
        Ok(field::<Vec<Value>>(&self.0, "results")?
            .into_iter()
            .map(Database)
            .collect())
    }

    async fn has_more(&self) -> Result<bool> {
        field(&self.0, "has_more")
    }

    async fn next_cursor(&self) -> Result<Option<String>> {
        field(&self.0, "next_cursor")
    }
}

/// One page of rows from a database query.
#[derive(Clone, Debug, PartialEq)]
pub struct PageList(pub Value);

#[Object(name = "NotionQueryDatabase", rename_fields = "snake_case")]
impl PageList {
    async fn object(&self) -> Result<String> {
        field(&self.0, "object")
    }

    async fn results(&self) -> Result<Vec<Page>> {
        Ok(field::<Vec<Value>>(&self.0, "results")?
            .into_iter()
            .map(Page)
            .collect())
    }

    async fn has_more(&self) -> Result<bool> {
        field(&self.0, "has_more")
    }

    async fn next_cursor(&self) -> Result<Option<String>> {
        field(&self.0, "next_cursor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_variants() {
        let in_db = Parent(json!({"type": "database_id", "database_id": "db-1"}));
        assert_eq!(in_db.kind().unwrap(), ParentType::DatabaseId);
        assert_eq!(in_db.database_id().unwrap().as_deref(), Some("db-1"));
        assert!(in_db.page_id().unwrap().is_none());

        let in_page = Parent(json!({"type": "page_id", "page_id": "p-1"}));
        assert_eq!(in_page.kind().unwrap(), ParentType::PageId);
        assert_eq!(in_page.page_id().unwrap().as_deref(), Some("p-1"));

        let top = Parent(json!({"type": "workspace", "workspace": true}));
        assert_eq!(top.kind().unwrap(), ParentType::Workspace);
        assert!(top.database_id().unwrap().is_none());
    }

    #[test]
    fn test_parent_tag_requires_its_id() {
        let mismatched = Parent(json!({"type": "database_id", "page_id": "p-1"}));
        assert!(mismatched.database_id().is_err());
        assert!(mismatched.page_id().unwrap().is_none());

        let block = Parent(json!({"type": "block_id", "block_id": "b"}));
        assert!(block.kind().is_err());
    }

    #[test]
    fn test_rich_texts_requires_title() {
        let err = rich_texts(&json!({"id": "db-1"}), "title").unwrap_err();
        assert_eq!(err.message, "JSON error: missing field `title`");

        let titles = rich_texts(&json!({"title": [{"type": "text"}]}), "title").unwrap();
        assert_eq!(titles.len(), 1);
    }
}
