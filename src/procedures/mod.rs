//! # procedures
//!
//! The typed procedure registry exposed to the dashboard.
//!
//! | Path             | Kind  | Input               | Output               |
//! |------------------|-------|---------------------|----------------------|
//! | `backend.status` | query | —                   | `{ trading: bool }`  |
//! | `example.hello`  | query | `{ name?: string }` | `{ greeting: str }`  |

use serde_json::Value;

use crate::{error::AppError, state::SharedState};

pub mod backend;
pub mod example;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    BackendStatus,
    ExampleHello,
}

impl Procedure {
    /// Resolve a dotted procedure path, e.g. `"backend.status"`.
    pub fn resolve(path: &str) -> Result<Self, AppError> {
        match path {
            "backend.status" => Ok(Procedure::BackendStatus),
            "example.hello"  => Ok(Procedure::ExampleHello),
            other => Err(AppError::NotFound(other.to_string())),
        }
    }

    /// Run the procedure with its (already transformer-unwrapped) input.
    pub async fn call(self, state: &SharedState, input: Option<Value>) -> Result<Value, AppError> {
        match self {
            // backend.status takes no input; anything supplied is ignored.
            Procedure::BackendStatus => {
                let status = backend::status(state).await?;
                to_value(&status)
            }
            Procedure::ExampleHello => {
                let input = example::parse_input(input)?;
                to_value(&example::hello(input))
            }
        }
    }
}

fn to_value<T: serde::Serialize>(output: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(output).map_err(anyhow::Error::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Procedure::resolve("backend.status").unwrap(), Procedure::BackendStatus);
        assert_eq!(Procedure::resolve("example.hello").unwrap(), Procedure::ExampleHello);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let err = Procedure::resolve("backend.start").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref p) if p == "backend.start"));
    }
}
