//! Raw URL query DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single query value as it arrives on the wire.
///
/// Repeated keys (`?project=1&project=2`) collapse into `List`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    /// Mirrors the truthiness of a URL value: only an empty scalar is falsy.
    /// A list is always kept, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            QueryValue::Scalar(s) => !s.is_empty(),
            QueryValue::List(_) => true,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Scalar(existing) => {
                let first = std::mem::take(existing);
                *self = QueryValue::List(vec![first, value]);
            }
            QueryValue::List(values) => values.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

/// Untyped query mapping. A missing key is the "absent" shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode a raw query string such as `?project=1&project=2&statsPeriod=14d`.
    ///
    /// Never fails: invalid percent escapes are decoded lossily and a pair
    /// without `=` maps to the empty string.
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = QueryParams::new();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);

            match params.0.get_mut(&key) {
                Some(existing) => existing.push(value),
                None => {
                    params.0.insert(key, QueryValue::Scalar(value));
                }
            }
        }

        params
    }

    /// Encode back into a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        for (key, value) in &self.0 {
            let key = urlencoding::encode(key);
            match value {
                QueryValue::Scalar(v) => parts.push(format!("{}={}", key, urlencoding::encode(v))),
                QueryValue::List(values) => {
                    for v in values {
                        parts.push(format!("{}={}", key, urlencoding::encode(v)));
                    }
                }
            }
        }
        parts.join("&")
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_become_a_list() {
        let q = QueryParams::from_query_string("?project=1&project=2&statsPeriod=24h");
        assert_eq!(q.get("project"), Some(&QueryValue::from(vec!["1", "2"])));
        assert_eq!(q.get("statsPeriod"), Some(&QueryValue::from("24h")));
    }

    #[test]
    fn decodes_escapes_and_bare_keys() {
        let q = QueryParams::from_query_string("environment=prod%20eu&query=a+b&utc");
        assert_eq!(q.get("environment"), Some(&QueryValue::from("prod eu")));
        assert_eq!(q.get("query"), Some(&QueryValue::from("a b")));
        assert_eq!(q.get("utc"), Some(&QueryValue::from("")));
    }

    #[test]
    fn encodes_lists_as_repeated_keys() {
        let q: QueryParams = [("environment", QueryValue::from(vec!["prod", "stage 2"]))]
            .into_iter()
            .collect();
        assert_eq!(q.to_query_string(), "environment=prod&environment=stage%202");
    }

    #[test]
    fn deserializes_from_json_mapping() {
        let q: QueryParams = serde_json::from_value(serde_json::json!({
            "project": ["1", "2"],
            "statsPeriod": "14d"
        }))
        .unwrap();
        assert_eq!(q.get("project"), Some(&QueryValue::from(vec!["1", "2"])));
        assert!(q.get("environment").is_none());
    }

    #[test]
    fn empty_scalar_is_falsy_but_empty_list_is_not() {
        assert!(!QueryValue::from("").is_truthy());
        assert!(QueryValue::List(vec![]).is_truthy());
        assert!(QueryValue::from("0").is_truthy());
    }
}
