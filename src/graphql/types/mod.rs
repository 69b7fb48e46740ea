//! Output types mirroring Notion's REST resources.
//!
//! Every object wraps its slice of the REST body and decodes a member only
//! when the field exposing it is resolved. A missing or out-of-set value
//! fails that field and leaves its siblings alone. Payloads that depend on a
//! `type` tag are checked against the tag when they are resolved.

mod fields;
mod resources;
mod rich_text;
mod scalars;
mod user;

use thiserror::Error;

pub use resources::{Database, DatabaseList, Page, PageList, Parent, ParentType};
pub use rich_text::{
    Annotation, Color, DateValue, Equation, Link, Mention, MentionType, RichText, RichTextType,
    TextObject,
};
pub use scalars::{BotObject, NotionProperties};
pub use user::{Person, User, UserType};

/// A tagged REST object whose payload disagrees with its tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{owner} of type `{kind}` has no `{kind}` payload")]
    MissingPayload {
        owner: &'static str,
        kind: &'static str,
    },

    #[error("{owner} carries `{field}` but its type is {kind}")]
    UnexpectedPayload {
        owner: &'static str,
        field: &'static str,
        kind: String,
    },
}
