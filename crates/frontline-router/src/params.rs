//! Ordered parameter mappings.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Parameter names that must always resolve, even when absent from the path.
pub const CORE_PARAMS: [&str; 3] = ["module", "controller", "action"];

/// Parameters that address the controller and never end up in a query string.
pub const STRUCTURAL_PARAMS: [&str; 5] = ["module", "controller", "action", "format", "prefix"];

/// Value every core parameter defaults to.
pub const INDEX: &str = "index";

/// Format used when a path carries no extension.
pub const DEFAULT_FORMAT: &str = "html";

/// Returns whether `name` is one of the core parameters.
#[must_use]
pub fn is_core(name: &str) -> bool {
    CORE_PARAMS.contains(&name)
}

/// An insertion-ordered mapping from parameter names to string values.
///
/// Setting an existing key replaces its value but keeps its position, so query
/// strings built from a mapping are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the framework defaults with the given format.
    #[must_use]
    pub fn framework_defaults(format: &str) -> Self {
        let mut params = Self::new();
        params.insert("prefix", "");
        params.insert("module", INDEX);
        params.insert("controller", INDEX);
        params.insert("action", INDEX);
        params.insert("format", format);
        params
    }

    /// Returns the framework default for a single parameter, if it has one.
    #[must_use]
    pub fn framework_default(name: &str) -> Option<&'static str> {
        match name {
            "prefix" => Some(""),
            "module" | "controller" | "action" => Some(INDEX),
            "format" => Some(DEFAULT_FORMAT),
            _ => None,
        }
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Params::insert`].
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the parameter is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes a parameter and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Parses a parameter as a specific type.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Overlays `other` onto this mapping; its values win.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> serde::de::Visitor<'de> for ParamsVisitor {
            type Value = Params;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of string parameters")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Params, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut params = Params::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    params.insert(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut params = Params::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut params = Params::new().set("id", "42");
        assert!(params.contains("id"));
        assert_eq!(params.parse::<u32>("id"), Some(42));
        assert_eq!(params.remove("id"), Some("42".to_string()));
        assert!(!params.contains("id"));
        assert_eq!(params.remove("id"), None);
    }

    #[test]
    fn test_framework_defaults() {
        let params = Params::framework_defaults("json");
        assert_eq!(params.get("prefix"), Some(""));
        assert_eq!(params.get("module"), Some("index"));
        assert_eq!(params.get("controller"), Some("index"));
        assert_eq!(params.get("action"), Some("index"));
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(Params::framework_default("userId"), None);
    }

    #[test]
    fn test_extend_overrides() {
        let mut base = Params::new().set("module", "index").set("page", "1");
        base.extend_from(&Params::new().set("module", "users"));
        assert_eq!(base.get("module"), Some("users"));
        assert_eq!(base.get("page"), Some("1"));
    }

    #[test]
    fn test_json_preserves_order() {
        let params: Params = serde_json::from_str(r#"{"z":"1","a":"2"}"#).unwrap();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"z":"1","a":"2"}"#);
    }
}
