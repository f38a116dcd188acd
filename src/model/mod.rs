//! Strongly typed ActivityStreams vocabulary.
//!
//! Every entity shape is a struct that owns the shape it extends as `base`
//! and derefs to it, so `actor.name` reads the name of the underlying
//! [`Object`]. Polymorphic properties are [`Item`]s.

/// Lets a variant read and write the fields of the shape it extends.
macro_rules! impl_deref_base {
    ($typ:ty => $base:ty) => {
        impl std::ops::Deref for $typ {
            type Target = $base;
            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }
        impl std::ops::DerefMut for $typ {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.base
            }
        }
    };
}

mod activity;
mod actor;
mod audience;
mod collection;
mod convert;
mod extended;
mod id;
mod item;
mod link;
mod natural_language;
mod object;

pub use self::activity::{Activity, IntransitiveActivity, Question};
pub use self::actor::{Actor, Endpoints, PublicKey};
pub use self::audience::dedup_recipients;
pub use self::collection::{
    Collection, CollectionPage, ItemContainer, OrderedCollection, OrderedCollectionPage,
};
pub use self::extended::{Place, Profile, Relationship, Tombstone};
pub use self::id::{Equality, Id};
pub use self::item::{Item, ItemCollection, ObjectOrLink};
pub use self::link::Link;
pub use self::natural_language::{LangRef, NIL_LANG, NaturalLanguageValues};
pub use self::object::{Object, Source};

/// A MIME media type such as `text/html`.
pub type MimeType = String;
