//! # procedures::example
//!
//! `example.hello` — demonstration query that echoes an optional name back
//! as a greeting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct HelloInput {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub greeting: String,
}

/// Validate the raw input. A missing input is treated as `{}`.
pub fn parse_input(input: Option<Value>) -> Result<HelloInput, AppError> {
    match input {
        None | Some(Value::Null) => Ok(HelloInput::default()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid input for example.hello: {e}"))),
    }
}

pub fn hello(input: HelloInput) -> Greeting {
    let name = input.name.as_deref().unwrap_or("world");
    Greeting { greeting: format!("Hello {name}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn greets_world_without_a_name() {
        let input = parse_input(None).unwrap();
        assert_eq!(hello(input).greeting, "Hello world");

        let input = parse_input(Some(json!({}))).unwrap();
        assert_eq!(hello(input).greeting, "Hello world");

        let input = parse_input(Some(json!({ "name": null }))).unwrap();
        assert_eq!(hello(input).greeting, "Hello world");
    }

    #[test]
    fn greets_by_name() {
        let input = parse_input(Some(json!({ "name": "Ada" }))).unwrap();
        assert_eq!(hello(input), Greeting { greeting: "Hello Ada".into() });
    }

    #[test]
    fn rejects_non_string_name() {
        let err = parse_input(Some(json!({ "name": 42 }))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn rejects_non_object_input() {
        assert!(parse_input(Some(json!("Ada"))).is_err());
    }
}
