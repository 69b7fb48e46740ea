use async_graphql::{Enum, Object, Result};
use serde::Deserialize;
use serde_json::Value;

use super::ShapeError;
use super::fields::{decode, field, member, payload, required};
use super::user::User;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[graphql(name = "ColorEnum", rename_items = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation(pub Value);

#[Object(name = "NotionAnnotation", rename_fields = "snake_case")]
impl Annotation {
    /// Whether the text is bolded
    async fn bold(&self) -> Result<bool> {
        field(&self.0, "bold")
    }

    /// Whether the text is italicized
    async fn italic(&self) -> Result<bool> {
        field(&self.0, "italic")
    }

    /// Whether the text is struck through
    async fn strikethrough(&self) -> Result<bool> {
        field(&self.0, "strikethrough")
    }

    /// Whether the text is underlined
    async fn underline(&self) -> Result<bool> {
        field(&self.0, "underline")
    }

    /// Whether the text is code style
    async fn code(&self) -> Result<bool> {
        field(&self.0, "code")
    }

    /// Color of the text
    async fn color(&self) -> Result<Color> {
        field(&self.0, "color")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link(pub Value);

#[Object(name = "NotionLinkObject", rename_fields = "snake_case")]
impl Link {
    /// Always "url"
    #[graphql(name = "type")]
    async fn link_type(&self) -> Result<String> {
        // Notion omits the tag on text links; "url" is the only kind it has.
        Ok(field::<Option<String>>(&self.0, "type")?.unwrap_or_else(|| "url".to_string()))
    }

    /// Web address
    async fn url(&self) -> Result<String> {
        field(&self.0, "url")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextObject(pub Value);

#[Object(name = "NotionTextObject", rename_fields = "snake_case")]
impl TextObject {
    /// Text content
    async fn content(&self) -> Result<String> {
        field(&self.0, "content")
    }

    /// Any inline link in this text
    async fn link(&self) -> Option<Link> {
        member(&self.0, "link").cloned().map(Link)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Equation(pub Value);

#[Object(name = "NotionEquationObject", rename_fields = "snake_case")]
impl Equation {
    /// The LaTeX string representing this inline equation
    async fn expression(&self) -> Result<String> {
        field(&self.0, "expression")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateValue(pub Value);

#[Object(name = "NotionDatePropertyValueObject", rename_fields = "snake_case")]
impl DateValue {
    /// An ISO 8601 format date, with optional time
    async fn start(&self) -> Result<String> {
        field(&self.0, "start")
    }

    /// An ISO 8601 format date, with optional time
    async fn end(&self) -> Result<Option<String>> {
        field(&self.0, "end")
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[graphql(name = "MentionTypeEnum", rename_items = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MentionType {
    User,
    Page,
    Database,
    Date,
}

/// An inline reference to a user, page, database or date.
#[derive(Clone, Debug, PartialEq)]
pub struct Mention(pub Value);

impl Mention {
    pub fn kind(&self) -> Result<MentionType> {
        field(&self.0, "type")
    }

    pub fn as_user(&self) -> Result<Option<User>> {
        Ok(payload(&self.0, "mention", MentionType::User, "user")?
            .cloned()
            .map(User))
    }

    /// Target of a page or database mention, named either flat or nested.
    pub fn target_id(&self) -> Result<Option<String>> {
        let nested = match self.kind()? {
            MentionType::Page => "page",
            MentionType::Database => "database",
            MentionType::User | MentionType::Date => return Ok(None),
        };
        let id = member(&self.0, "id")
            .or_else(|| member(&self.0, nested).and_then(|target| member(target, "id")));
        match id {
            Some(id) => decode(id).map(Some),
            None => Err(ShapeError::MissingPayload {
                owner: "mention",
                kind: nested,
            }
            .into()),
        }
    }

    pub fn as_date(&self) -> Result<Option<DateValue>> {
        Ok(payload(&self.0, "mention", MentionType::Date, "date")?
            .cloned()
            .map(DateValue))
    }
}

#[Object(name = "NotionMentionObject", rename_fields = "snake_case")]
impl Mention {
    /// Type of the inline mention
    #[graphql(name = "type")]
    async fn mention_type(&self) -> Result<MentionType> {
        self.kind()
    }

    async fn user(&self) -> Result<Option<User>> {
        self.as_user()
    }

    async fn id(&self) -> Result<Option<String>> {
        self.target_id()
    }

    async fn date(&self) -> Result<Option<DateValue>> {
        self.as_date()
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[graphql(name = "RichTextTypeEnum", rename_items = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RichTextType {
    Text,
    Mention,
    Equation,
}

/// One styled run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct RichText(pub Value);

impl RichText {
    pub fn kind(&self) -> Result<RichTextType> {
        field(&self.0, "type")
    }

    pub fn as_text(&self) -> Result<Option<TextObject>> {
        Ok(payload(&self.0, "rich text", RichTextType::Text, "text")?
            .cloned()
            .map(TextObject))
    }

    pub fn as_mention(&self) -> Result<Option<Mention>> {
        Ok(payload(&self.0, "rich text", RichTextType::Mention, "mention")?
            .cloned()
            .map(Mention))
    }

    pub fn as_equation(&self) -> Result<Option<Equation>> {
        Ok(payload(&self.0, "rich text", RichTextType::Equation, "equation")?
            .cloned()
            .map(Equation))
    }
}

#[Object(name = "NotionRichText", rename_fields = "snake_case")]
impl RichText {
    /// The plain text without annotations
    async fn plain_text(&self) -> Result<String> {
        field(&self.0, "plain_text")
    }

    /// The URL of any link or internal Notion mention in this text, if any
    async fn href(&self) -> Result<Option<String>> {
        field(&self.0, "href")
    }

    /// All annotations that apply to this rich text
    async fn annotations(&self) -> Result<Annotation> {
        required(&self.0, "annotations").map(|raw| Annotation(raw.clone()))
    }

    /// Type of this rich text object
    #[graphql(name = "type")]
    async fn text_type(&self) -> Result<RichTextType> {
        self.kind()
    }

    /// Text content
    async fn text(&self) -> Result<Option<TextObject>> {
        self.as_text()
    }

    /// Mention
    async fn mention(&self) -> Result<Option<Mention>> {
        self.as_mention()
    }

    /// Equation
    async fn equation(&self) -> Result<Option<Equation>> {
        self.as_equation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_run_exposes_only_text() {
        let rich = RichText(json!({
            "type": "text",
            "plain_text": "docs",
            "href": "https://example.com",
            "text": {"content": "docs", "link": {"url": "https://example.com"}}
        }));

        assert_eq!(rich.kind().unwrap(), RichTextType::Text);
        let text = rich.as_text().unwrap().unwrap();
        assert_eq!(text.0["content"], "docs");
        assert!(rich.as_mention().unwrap().is_none());
        assert!(rich.as_equation().unwrap().is_none());
    }

    #[test]
    fn test_user_mention() {
        let mention = Mention(json!({
            "type": "user",
            "user": {"object": "user", "id": "user-1"}
        }));

        assert_eq!(mention.kind().unwrap(), MentionType::User);
        assert_eq!(mention.as_user().unwrap().unwrap().0["id"], "user-1");
        assert!(mention.target_id().unwrap().is_none());
        assert!(mention.as_date().unwrap().is_none());
    }

    #[test]
    fn test_page_mention_accepts_nested_and_flat_id() {
        let nested = Mention(json!({"type": "page", "page": {"id": "page-1"}}));
        let flat = Mention(json!({"type": "page", "id": "page-1"}));

        assert_eq!(nested.target_id().unwrap().as_deref(), Some("page-1"));
        assert_eq!(flat.target_id().unwrap().as_deref(), Some("page-1"));
    }

    #[test]
    fn test_date_mention() {
        let mention = Mention(json!({
            "type": "date",
            "date": {"start": "2021-05-13", "end": null}
        }));

        assert_eq!(mention.kind().unwrap(), MentionType::Date);
        assert_eq!(
            mention.as_date().unwrap(),
            Some(DateValue(json!({"start": "2021-05-13", "end": null})))
        );
    }

    #[test]
    fn test_tag_without_payload_is_rejected() {
        let rich = RichText(json!({
            "type": "equation",
            "plain_text": "x",
            "text": {"content": "x"}
        }));
        let err = rich.as_equation().unwrap_err();
        assert!(err.message.contains("no `equation` payload"));
        assert!(rich.as_text().unwrap().is_none());

        let err = Mention(json!({"type": "database"})).target_id().unwrap_err();
        assert!(err.message.contains("no `database` payload"));
    }

    #[test]
    fn test_unknown_mention_type_fails_only_the_tag() {
        let mention = Mention(json!({"type": "link_preview", "link_preview": {"url": "x"}}));

        assert!(mention.kind().unwrap_err().message.contains("link_preview"));
        assert!(mention.as_user().is_err());

        let rich = RichText(json!({
            "type": "mention",
            "plain_text": "x",
            "mention": {"type": "link_preview"}
        }));
        assert_eq!(rich.kind().unwrap(), RichTextType::Mention);
        assert!(rich.as_mention().unwrap().is_some());
    }
}
