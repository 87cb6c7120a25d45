//! Filter value types shared by the OpenF1 tool parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToolError;
use crate::domains::openf1::FilterMap;

/// A numeric filter value.
///
/// Besides plain numbers the upstream accepts comparison expressions
/// (`">=315"`, `"<50"`) and the `"latest"` keyword for session and meeting
/// keys. Those are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
#[schemars(inline)]
pub enum NumericFilter {
    Integer(i64),
    Decimal(f64),
    Expression(String),
}

/// Undeclared filter keys, forwarded to the upstream untouched.
pub type ExtraFilters = Map<String, Value>;

/// Serialize typed filters back into the flat map the encoder consumes.
///
/// Only scalar values may reach the query string: arrays and objects are
/// rejected here, before any request is made.
pub fn into_filter_map<F: Serialize>(filters: &F) -> Result<FilterMap, ToolError> {
    let value = serde_json::to_value(filters).map_err(|e| ToolError::internal(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(ToolError::internal("filters did not serialize to an object"));
    };

    if let Some((key, _)) = map
        .iter()
        .find(|(_, v)| matches!(v, Value::Array(_) | Value::Object(_)))
    {
        return Err(ToolError::invalid_arguments(format!(
            "filter '{}' must be a number, string or boolean",
            key
        )));
    }

    Ok(map)
}
