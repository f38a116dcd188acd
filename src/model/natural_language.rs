use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde_json::{Map, Value};

/// A BCP 47 language tag. Empty means no language was specified.
pub type LangRef = String;

pub const NIL_LANG: &str = "";

/// Language tagged text, as used by `name`, `content`, `summary` and
/// `preferredUsername`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaturalLanguageValues(BTreeMap<LangRef, String>);

impl NaturalLanguageValues {
    pub fn new() -> NaturalLanguageValues {
        NaturalLanguageValues::default()
    }

    /// Sets the text for `lang`, returning the previous one.
    pub fn set(&mut self, lang: impl Into<LangRef>, value: impl Into<String>) -> Option<String> {
        self.0.insert(lang.into(), value.into())
    }

    pub fn with(mut self, lang: impl Into<LangRef>, value: impl Into<String>) -> Self {
        self.set(lang, value);
        self
    }

    /// The text for `lang`, or an empty string.
    pub fn get(&self, lang: &str) -> &str {
        self.0.get(lang).map(String::as_str).unwrap_or_default()
    }

    pub fn remove(&mut self, lang: &str) -> Option<String> {
        self.0.remove(lang)
    }

    /// The untagged text if present, otherwise the first tagged one.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0
            .get_key_value(NIL_LANG)
            .or_else(|| self.0.iter().next())
            .map(|(lang, value)| (lang.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(lang, value)| (lang.as_str(), value.as_str()))
    }

    /// A single untagged entry collapses to a bare string, anything else is
    /// written as an object keyed by language.
    pub(crate) fn to_value(&self) -> Option<Value> {
        if self.0.is_empty() {
            return None;
        }
        if let (1, Some(text)) = (self.0.len(), self.0.get(NIL_LANG)) {
            return Some(Value::String(text.clone()));
        }
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(lang, value)| (lang.clone(), Value::String(value.clone())))
            .collect();
        Some(Value::Object(map))
    }

    pub(crate) fn from_value(value: &Value) -> NaturalLanguageValues {
        match value {
            Value::String(text) => NaturalLanguageValues::from(text.as_str()),
            Value::Object(map) => map
                .iter()
                .filter_map(|(lang, value)| value.as_str().map(|text| (lang.clone(), text)))
                .collect(),
            _ => NaturalLanguageValues::default(),
        }
    }
}

impl From<&str> for NaturalLanguageValues {
    fn from(value: &str) -> Self {
        NaturalLanguageValues::new().with(NIL_LANG, value)
    }
}

impl From<String> for NaturalLanguageValues {
    fn from(value: String) -> Self {
        NaturalLanguageValues::new().with(NIL_LANG, value)
    }
}

impl<L, V> FromIterator<(L, V)> for NaturalLanguageValues
where
    L: Into<LangRef>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        NaturalLanguageValues(
            iter.into_iter()
                .map(|(lang, value)| (lang.into(), value.into()))
                .collect(),
        )
    }
}

impl Display for NaturalLanguageValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first().map(|(_, text)| text).unwrap_or_default())
    }
}
