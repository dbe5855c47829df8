//! Backend-owned finance records.
//!
//! Each record is an opaque JSON object. Lists are kept in server order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recorded income/expense entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Transaction {
    pub fields: Map<String, Value>,
}

impl Transaction {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A user wallet (cash, bank account, exchange balance, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Wallet {
    pub fields: Map<String, Value>,
}

impl Wallet {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A transaction category (public reference data)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Category {
    pub fields: Map<String, Value>,
}

impl Category {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Payload for `POST /transactions`, forwarded verbatim
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct NewTransaction {
    pub fields: Map<String, Value>,
}

impl From<Map<String, Value>> for NewTransaction {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
