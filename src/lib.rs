//! ActivityStreams 2.0 vocabulary as Rust types, with a JSON codec.
//!
//! ```
//! use pinka_vocab::{Actor, Decoder, Encoder};
//!
//! let decoder = Decoder::default();
//! let item = decoder.decode_str(r#"{"id":"https://example.com/u/john","type":"Person"}"#)?;
//! let actor = Actor::try_from(item)?;
//! assert_eq!(actor.id, "https://example.com/u/john");
//!
//! let doc = Encoder::default().to_document(&actor.into())?;
//! assert!(doc.starts_with(br#"{"@context":"#));
//! # Ok::<(), pinka_vocab::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod json_ld;
pub mod model;

pub use crate::codec::{Decoder, Encoder, Registry};
pub use crate::config::Config;
pub use crate::error::{ConversionError, Error, Result};
pub use crate::json_ld::Discriminator;
pub use crate::model::{
    Activity, Actor, Collection, CollectionPage, Equality, Id, IntransitiveActivity, Item,
    ItemCollection, ItemContainer, Link, NaturalLanguageValues, Object, ObjectOrLink,
    OrderedCollection, OrderedCollectionPage, Place, Profile, Question, Relationship, Tombstone,
};
