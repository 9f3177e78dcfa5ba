use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Option name -> ordered values, e.g. `Size -> [S, M, L]`.
///
/// Key order is the order the page supplied them in; the first key is the
/// default option for new rows. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionValueMap {
    entries: Vec<(String, Vec<String>)>,
}

impl OptionValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A repeated key replaces the earlier values but
    /// keeps its original position.
    pub fn with_option<S: Into<String>>(mut self, name: &str, values: impl IntoIterator<Item = S>) -> Self {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((name.to_string(), values)),
        }
        self
    }

    /// Values for an option; empty when the option is unknown.
    pub fn values(&self, option: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == option)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, option: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == option)
    }

    pub fn first_option(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for OptionValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Deserialized through a visitor so document order survives; a HashMap would
// lose which option comes first.
impl<'de> Deserialize<'de> for OptionValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OptionValueMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of option names to lists of values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OptionValueMap::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    map = map.with_option(&key, values);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
