use std::fmt::{self, Display};

use jiff::{SignedDuration, Span, SpanRelativeTo, Timestamp};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::Result;
use crate::json_ld::Discriminator;
use crate::model::{Id, Item, ItemCollection, NaturalLanguageValues};

use super::Decoder;

/// The JSON token type of a raw property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Read access to the properties of one JSON object being decoded.
///
/// Every accessor fails soft: a missing key or a value of the wrong shape
/// reads as `None` or the zero value. Only the nested item accessors return
/// a `Result`, because a nested record with mandatory fields may fail.
#[derive(Clone, Copy)]
pub struct Fields<'a> {
    decoder: &'a Decoder,
    map: &'a Map<String, Value>,
    depth: usize,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(decoder: &'a Decoder, map: &'a Map<String, Value>, depth: usize) -> Self {
        Fields {
            decoder,
            map,
            depth,
        }
    }

    /// Nesting level of this object, zero for the document itself.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn id(&self) -> Id {
        self.get_str("id")
            .or_else(|| self.get_str("@id"))
            .map(Id::from)
            .unwrap_or_default()
    }

    /// The first string of `type` (or `@type`).
    pub fn kind(&self) -> Discriminator {
        for prop in ["type", "@type"] {
            match self.map.get(prop) {
                Some(Value::String(kind)) => return Discriminator::from(kind.as_str()),
                Some(Value::Array(kinds)) => {
                    if let Some(kind) = kinds.iter().find_map(Value::as_str) {
                        return Discriminator::from(kind);
                    }
                }
                _ => {}
            }
        }
        Discriminator::default()
    }

    pub fn get_raw(&self, key: &str) -> Option<(&'a Value, ValueKind)> {
        self.map.get(key).map(|value| (value, ValueKind::from(value)))
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(Value::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.map.get(key).and_then(Value::as_i64)
    }

    pub fn get_uint(&self, key: &str) -> Option<u64> {
        self.map.get(key).and_then(Value::as_u64)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.map.get(key).and_then(Value::as_f64)
    }

    pub fn string(&self, key: &str) -> String {
        self.get_str(key).unwrap_or_default().to_owned()
    }

    /// A string, or an array of strings.
    pub fn str_array(&self, key: &str) -> Vec<String> {
        match self.map.get(key) {
            Some(Value::String(value)) => vec![value.clone()],
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn natural_language(&self, key: &str) -> NaturalLanguageValues {
        self.map
            .get(key)
            .map(NaturalLanguageValues::from_value)
            .unwrap_or_default()
    }

    pub fn timestamp(&self, key: &str) -> Option<Timestamp> {
        let text = self.get_str(key)?;
        match text.parse() {
            Ok(timestamp) => Some(timestamp),
            Err(error) => {
                trace!(target: "vocab", key, %error, "ignoring malformed timestamp");
                None
            }
        }
    }

    /// An xsd:duration such as `PT5S` or `P1D`. Days are 24 hours long;
    /// years and months have no fixed length and read as absent.
    pub fn duration(&self, key: &str) -> Option<SignedDuration> {
        let text = self.get_str(key)?;
        let parsed = text
            .parse::<Span>()
            .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()));
        match parsed {
            Ok(duration) => Some(duration),
            Err(error) => {
                trace!(target: "vocab", key, %error, "ignoring malformed duration");
                None
            }
        }
    }

    /// A Link-or-Item property: an array decodes to an item collection, an
    /// object to the item its type selects and a string to a bare link.
    pub fn item(&self, key: &str) -> Result<Option<Item>> {
        match self.map.get(key) {
            Some(value) => self.decoder.decode_nested(value, self.depth + 1),
            None => Ok(None),
        }
    }

    /// A list property; a single value reads as a list of one.
    pub fn items(&self, key: &str) -> Result<ItemCollection> {
        match self.map.get(key) {
            Some(value) => self.items_from(value),
            None => Ok(ItemCollection::new()),
        }
    }

    pub fn items_from(&self, value: &Value) -> Result<ItemCollection> {
        match value {
            Value::Array(values) => self.decoder.decode_array(values, self.depth + 1),
            value => Ok(self
                .decoder
                .decode_nested(value, self.depth + 1)?
                .into_iter()
                .collect()),
        }
    }

    /// A nested record that is not an item, such as `endpoints`.
    pub fn record(&self, key: &str) -> Option<Fields<'a>> {
        match self.map.get(key) {
            Some(Value::Object(map)) => Some(Fields::new(self.decoder, map, self.depth + 1)),
            Some(value) => {
                trace!(target: "vocab", key, kind = %ValueKind::from(value), "ignoring non-object record");
                None
            }
            None => None,
        }
    }
}
