// The roles endpoint answers either a bare array or `{ data, total }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::core::pagination::Paginated;

/// Normalizes either listing shape. A bare array counts its own length as the
/// total; a `data` envelope without `total` counts zero; anything else is an
/// empty page.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Result<Paginated<T>, serde_json::Error> {
    match body {
        Value::Array(items) => {
            let items: Vec<T> = serde_json::from_value(Value::Array(items))?;
            let total = items.len() as u64;
            Ok(Paginated { items, total })
        }
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(data @ Value::Array(_)) => {
                let items = serde_json::from_value(data)?;
                let total = envelope.get("total").and_then(Value::as_u64).unwrap_or(0);
                Ok(Paginated { items, total })
            }
            _ => Ok(Paginated::empty()),
        },
        _ => Ok(Paginated::empty()),
    }
}
