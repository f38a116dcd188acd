//! JSON wire codec for the vocabulary model.
//!
//! Decoding is driven by the `"type"` of each object and never fails on a
//! malformed optional property; it is read as absent instead. Encoding writes
//! properties in a fixed order: `id`, `type`, the object properties, then
//! those of each more specific shape.

mod decode;
mod encode;
mod fields;
mod registry;

pub use self::decode::Decoder;
pub use self::encode::Encoder;
pub(crate) use self::encode::{WriteFields, Writer};
pub use self::fields::{Fields, ValueKind};
pub use self::registry::{DecodeFn, Registry};
