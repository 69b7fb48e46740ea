//! Field-level access to raw REST objects.
//!
//! Objects keep Notion's body untouched and decode a member only when the field
//! exposing it is selected, so a bad value fails that field alone.

use async_graphql::Result;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::NotionGqlError;

use super::ShapeError;

pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(serde_json::from_value(value.clone()).map_err(NotionGqlError::Json)?)
}

/// Decodes member `name`. An absent member decodes like `null`.
pub(crate) fn field<T: DeserializeOwned>(raw: &Value, name: &'static str) -> Result<T> {
    match raw.get(name) {
        Some(value) => decode(value),
        None => Ok(serde_json::from_value(Value::Null)
            .map_err(|_| NotionGqlError::Json(serde_json::Error::missing_field(name)))?),
    }
}

/// Member `name` when present and not `null`.
pub(crate) fn member<'a>(raw: &'a Value, name: &str) -> Option<&'a Value> {
    raw.get(name).filter(|value| !value.is_null())
}

pub(crate) fn required<'a>(raw: &'a Value, name: &'static str) -> Result<&'a Value> {
    member(raw, name)
        .ok_or_else(|| NotionGqlError::Json(serde_json::Error::missing_field(name)).into())
}

/// Payload of a tagged object.
///
/// `None` when the `type` tag names another kind. Fails when the tag names
/// `kind` but the payload is absent.
pub(crate) fn payload<'a, K>(
    raw: &'a Value,
    owner: &'static str,
    tag: K,
    kind: &'static str,
) -> Result<Option<&'a Value>>
where
    K: DeserializeOwned + PartialEq,
{
    if field::<K>(raw, "type")? != tag {
        return Ok(None);
    }
    member(raw, kind)
        .map(Some)
        .ok_or_else(|| ShapeError::MissingPayload { owner, kind }.into())
}
