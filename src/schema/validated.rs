//! The typed configuration produced by a successful validation pass

use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigUint;
use serde_json::{Map, Value};

use super::keys::BRIDGE_MODE;
use super::types::{Address, BridgeMode, Decimal, TypedValue};

/// Placeholder rendered in place of secret values.
pub const MASK: &str = "***";

/// Immutable, fully-typed configuration.
///
/// Holds exactly the fields of the schema it was validated against; optional
/// fields that were unset are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    mode: BridgeMode,
    values: BTreeMap<String, TypedValue>,
    secrets: BTreeSet<String>,
}

impl ValidatedConfig {
    pub(crate) fn new(
        mode: BridgeMode,
        values: BTreeMap<String, TypedValue>,
        secrets: BTreeSet<String>,
    ) -> Self {
        Self {
            mode,
            values,
            secrets,
        }
    }

    /// The bridge mode the config was validated for
    pub fn mode(&self) -> BridgeMode {
        self.mode
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name)? {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn big_integer(&self, name: &str) -> Option<&BigUint> {
        match self.values.get(name)? {
            TypedValue::BigInteger(n) => Some(n),
            _ => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<&Decimal> {
        match self.values.get(name)? {
            TypedValue::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn address(&self, name: &str) -> Option<&Address> {
        match self.values.get(name)? {
            TypedValue::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn addresses(&self, name: &str) -> Option<&[Address]> {
        match self.values.get(name)? {
            TypedValue::AddressList(list) => Some(list),
            _ => None,
        }
    }

    /// Renders the config as a JSON object with secret values masked.
    ///
    /// Keys are sorted; `BRIDGE_MODE` is included.
    pub fn to_masked_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(BRIDGE_MODE.to_string(), Value::String(self.mode.as_str().to_string()));

        for (name, value) in &self.values {
            let rendered = if self.secrets.contains(name) {
                Value::String(MASK.to_string())
            } else {
                // TypedValue serialization is infallible
                serde_json::to_value(value).unwrap_or(Value::Null)
            };
            map.insert(name.clone(), rendered);
        }

        Value::Object(map)
    }
}
