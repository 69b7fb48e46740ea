use async_graphql::{Enum, Object, Result};
use serde::Deserialize;
use serde_json::Value;

use super::ShapeError;
use super::fields::{field, member};
use super::scalars::BotObject;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[graphql(name = "NotionUserTypeEnum", rename_items = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Person,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Person(pub Value);

#[Object(name = "NotionPerson", rename_fields = "snake_case")]
impl Person {
    /// Email address of person
    async fn email(&self) -> Result<Option<String>> {
        field(&self.0, "email")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User(pub Value);

impl User {
    pub fn kind(&self) -> Result<Option<UserType>> {
        field(&self.0, "type")
    }

    /// The `person` payload, which only person users may carry.
    pub fn as_person(&self) -> Result<Option<Person>> {
        let Some(person) = member(&self.0, "person") else {
            return Ok(None);
        };
        match self.kind()? {
            Some(UserType::Person) => Ok(Some(Person(person.clone()))),
            other => Err(ShapeError::UnexpectedPayload {
                owner: "user",
                field: "person",
                kind: match other {
                    Some(UserType::Bot) => "bot".to_string(),
                    _ => "unset".to_string(),
                },
            }
            .into()),
        }
    }
}

#[Object(name = "NotionUserObject", rename_fields = "snake_case")]
impl User {
    /// Always "user"
    async fn object(&self) -> Result<String> {
        field(&self.0, "object")
    }

    /// Unique identifier for this user
    async fn id(&self) -> Result<String> {
        field(&self.0, "id")
    }

    /// Type of the user
    #[graphql(name = "type")]
    async fn user_type(&self) -> Result<Option<UserType>> {
        self.kind()
    }

    /// User's name, as displayed in Notion
    async fn name(&self) -> Result<Option<String>> {
        field(&self.0, "name")
    }

    /// Chosen avatar image
    async fn avatar_url(&self) -> Result<Option<String>> {
        field(&self.0, "avatar_url")
    }

    /// Properties only present for non-bot users
    async fn person(&self) -> Result<Option<Person>> {
        self.as_person()
    }

    /// Properties only present for bot users
    async fn bot(&self) -> Result<Option<BotObject>> {
        field(&self.0, "bot")
    }
}
