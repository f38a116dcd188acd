use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::config::DecodeConfig;
use crate::error::{Error, Result};
use crate::model::{Id, Item, ItemCollection};

use super::{Fields, Registry, ValueKind};

/// Turns JSON documents into items, selecting the variant by `type`.
///
/// A decoder holds no state that changes while decoding, so one instance can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct Decoder {
    registry: Registry,
    max_depth: usize,
}

impl Decoder {
    pub fn new(config: &DecodeConfig) -> Decoder {
        Decoder {
            registry: Registry::default(),
            max_depth: config.max_depth,
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Decoder {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Item> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::MalformedDocument(e.to_string()))?;
        self.decode_value(&value)
    }

    pub fn decode_str(&self, text: &str) -> Result<Item> {
        self.decode(text.as_bytes())
    }

    /// Decodes an outermost document: an object, or an array of items.
    pub fn decode_value(&self, value: &Value) -> Result<Item> {
        match value {
            Value::Object(map) => self.decode_object(map, 0),
            Value::Array(values) => Ok(Item::ItemCollection(self.decode_array(values, 0)?)),
            other => Err(Error::MalformedDocument(format!(
                "expected a JSON object or array, found {}",
                ValueKind::from(other)
            ))),
        }
    }

    pub(crate) fn decode_nested(&self, value: &Value, depth: usize) -> Result<Option<Item>> {
        if depth > self.max_depth {
            warn!(target: "vocab", depth, max_depth = self.max_depth, "dropping item nested too deep");
            return Ok(None);
        }
        match value {
            Value::Array(values) => {
                let items = self.decode_array(values, depth)?;
                Ok((!items.is_empty()).then_some(Item::ItemCollection(items)))
            }
            Value::Object(map) => self.decode_object(map, depth).map(Some),
            Value::String(iri) if !iri.is_empty() => Ok(Some(Item::from(Id::from(iri.as_str())))),
            other => {
                trace!(target: "vocab", kind = %ValueKind::from(other), "ignoring non-item value");
                Ok(None)
            }
        }
    }

    /// Elements that are neither strings nor objects are skipped.
    pub(crate) fn decode_array(&self, values: &[Value], depth: usize) -> Result<ItemCollection> {
        if depth > self.max_depth {
            warn!(target: "vocab", depth, max_depth = self.max_depth, "dropping items nested too deep");
            return Ok(ItemCollection::new());
        }
        let mut items = ItemCollection::new();
        for value in values {
            match value {
                Value::Object(map) => items.push(self.decode_object(map, depth)?),
                Value::String(iri) if !iri.is_empty() => items.push(Item::from(Id::from(iri.as_str()))),
                other => {
                    trace!(target: "vocab", kind = %ValueKind::from(other), "skipping array element");
                }
            }
        }
        Ok(items)
    }

    fn decode_object(&self, map: &Map<String, Value>, depth: usize) -> Result<Item> {
        let fields = Fields::new(self, map, depth);
        let kind = fields.kind();
        let decode = match self.registry.get(kind.as_str()) {
            Some(decode) => decode,
            None => {
                if !kind.is_empty() {
                    debug!(target: "vocab", %kind, "no decoder registered, using fallback");
                }
                self.registry.fallback()
            }
        };
        decode(&fields)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(&DecodeConfig::default())
    }
}
