//! Market data DTOs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Currency API response: `{ "data": { "<CODE>": rate } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRates {
    pub data: HashMap<String, f64>,
}

impl CurrencyRates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.data.get(code).copied()
    }
}

/// Last crypto price payload from `GET /information/crypto`.
///
/// Kept wholesale; the client does not interpret quotes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PriceSnapshot {
    pub payload: Value,
}

impl Default for PriceSnapshot {
    fn default() -> Self {
        Self {
            payload: Value::Object(Map::new()),
        }
    }
}
