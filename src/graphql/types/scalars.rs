use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use serde::Deserialize;

/// Schema-less property map of a database or page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NotionProperties(pub serde_json::Value);

#[Scalar(name = "NotionProperties")]
impl ScalarType for NotionProperties {
    fn parse(value: Value) -> InputValueResult<Self> {
        value.into_json().map(Self).map_err(InputValueError::custom)
    }

    fn to_value(&self) -> Value {
        passthrough(&self.0)
    }
}

/// Payload Notion attaches to bot users.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BotObject(pub serde_json::Value);

#[Scalar(name = "NotionBotObject")]
impl ScalarType for BotObject {
    fn parse(value: Value) -> InputValueResult<Self> {
        value.into_json().map(Self).map_err(InputValueError::custom)
    }

    fn to_value(&self) -> Value {
        passthrough(&self.0)
    }
}

fn passthrough(json: &serde_json::Value) -> Value {
    Value::from_json(json.clone()).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_value_keeps_content_and_key_order() {
        let raw = r#"{"Status":{"id":"a%3Bc","type":"select"},"Name":{"id":"title","type":"title"},"Count":{"id":"n","number":{"format":"number"}}}"#;
        let props: NotionProperties = serde_json::from_str(raw).unwrap();

        let out = props.to_value().into_json().unwrap();
        assert_eq!(serde_json::to_string(&out).unwrap(), raw);
    }

    #[test]
    fn test_accepts_any_json_shape() {
        for value in [json!(null), json!(3.5), json!("text"), json!([1, {"a": false}])] {
            let bot: BotObject = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(bot.to_value().into_json().unwrap(), value);
        }
    }

    #[test]
    fn test_parse_round_trips_input_value() {
        let input = Value::from_json(json!({"owner": {"type": "workspace"}})).unwrap();
        let bot = BotObject::parse(input).unwrap();
        assert_eq!(bot.0, json!({"owner": {"type": "workspace"}}));
    }
}
