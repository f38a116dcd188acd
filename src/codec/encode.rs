use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde_json::{Map, Number, Value};

use crate::config::EncodeConfig;
use crate::error::{Error, Result};
use crate::json_ld::{ActivityStreamsContext, ContextProvider, Discriminator};
use crate::model::{Id, Item, ItemCollection, NaturalLanguageValues, ObjectOrLink};

/// Implemented by every entity shape. A variant writes its base first and
/// then its own properties, so the wire order follows the type hierarchy.
pub(crate) trait WriteFields {
    fn write_fields(&self, w: &mut Writer);
}

/// Builds one JSON object, skipping empty values.
pub(crate) struct Writer {
    map: Map<String, Value>,
}

impl Writer {
    pub(crate) fn new() -> Writer {
        Writer { map: Map::new() }
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.map)
    }

    pub(crate) fn encode<T: WriteFields + ?Sized>(value: &T) -> Value {
        let mut w = Writer::new();
        value.write_fields(&mut w);
        w.finish()
    }

    fn put(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_owned(), value);
    }

    pub(crate) fn id(&mut self, id: &Id) {
        self.string("id", id.as_str());
    }

    pub(crate) fn kind(&mut self, kind: &Discriminator) {
        self.string("type", kind.as_str());
    }

    pub(crate) fn string(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.put(key, Value::String(value.to_owned()));
        }
    }

    pub(crate) fn strings(&mut self, key: &str, values: &[String]) {
        match values {
            [] => {}
            [value] => self.string(key, value),
            values => self.put(
                key,
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            ),
        }
    }

    pub(crate) fn natural_language(&mut self, key: &str, values: &NaturalLanguageValues) {
        if let Some(value) = values.to_value() {
            self.put(key, value);
        }
    }

    pub(crate) fn item(&mut self, key: &str, item: Option<&Item>) {
        let Some(value) = item.map(Item::to_value) else {
            return;
        };
        let empty = match &value {
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            _ => false,
        };
        if !empty {
            self.put(key, value);
        }
    }

    pub(crate) fn items(&mut self, key: &str, items: &ItemCollection) {
        if !items.is_empty() {
            self.put(key, items.to_value());
        }
    }

    pub(crate) fn timestamp(&mut self, key: &str, value: Option<Timestamp>) {
        if let Some(ts) = value {
            self.put(key, Value::String(ts.to_string()));
        }
    }

    pub(crate) fn duration(&mut self, key: &str, value: Option<SignedDuration>) {
        if let Some(duration) = value {
            self.put(key, Value::String(duration.to_string()));
        }
    }

    pub(crate) fn uint(&mut self, key: &str, value: u64) {
        self.put(key, Value::Number(Number::from(value)));
    }

    pub(crate) fn nonzero(&mut self, key: &str, value: u64) {
        if value != 0 {
            self.uint(key, value);
        }
    }

    pub(crate) fn float(&mut self, key: &str, value: Option<f64>) {
        if let Some(number) = value.and_then(Number::from_f64) {
            self.put(key, Value::Number(number));
        }
    }

    /// A nested record that is not an item. Omitted when nothing was written.
    pub(crate) fn record(&mut self, key: &str, f: impl FnOnce(&mut Writer)) {
        let mut nested = Writer::new();
        f(&mut nested);
        if !nested.map.is_empty() {
            self.put(key, nested.finish());
        }
    }
}

/// Serializes items into their JSON wire form.
pub struct Encoder {
    context: Box<dyn ContextProvider>,
    context_url: String,
}

impl Encoder {
    pub fn new(config: &EncodeConfig) -> Encoder {
        Encoder {
            context: Box::new(ActivityStreamsContext {
                security: config.security_context,
            }),
            context_url: config.context_url.clone(),
        }
    }

    pub fn with_context_provider(mut self, provider: impl ContextProvider + 'static) -> Encoder {
        self.context = Box::new(provider);
        self
    }

    /// The wire form of `item`, without a context.
    pub fn to_value(&self, item: &Item) -> Value {
        item.to_value()
    }

    pub fn to_vec(&self, item: &Item) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.to_value(item)).map_err(Error::Encode)
    }

    /// The wire form of an outermost document. `@context` is written as the
    /// first key of object documents.
    pub fn document(&self, item: &Item) -> Value {
        let value = item.to_value();
        let Value::Object(fields) = value else {
            return value;
        };
        let Some(context) = self.context.context(item.kind(), &self.context_url) else {
            return Value::Object(fields);
        };
        let mut map = Map::with_capacity(fields.len() + 1);
        map.insert("@context".to_owned(), context);
        map.extend(fields);
        Value::Object(map)
    }

    pub fn to_document(&self, item: &Item) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.document(item)).map_err(Error::Encode)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new(&EncodeConfig::default())
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("context_url", &self.context_url)
            .finish_non_exhaustive()
    }
}
