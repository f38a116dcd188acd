use std::collections::HashMap;

use crate::error::Result;
use crate::json_ld::{
    ACTIVITY_TYPES, ACTOR_TYPES, Discriminator, INTRANSITIVE_ACTIVITY_TYPES, LINK_TYPES,
    OBJECT_TYPES,
};
use crate::model::{
    Activity, Actor, Collection, CollectionPage, IntransitiveActivity, Item, Link, Object,
    OrderedCollection, OrderedCollectionPage, Place, Profile, Question, Relationship, Tombstone,
};

use super::Fields;

/// Builds an item from the properties of one JSON object.
pub type DecodeFn = fn(&Fields<'_>) -> Result<Item>;

/// Maps a discriminator to the function decoding it.
///
/// Types without an entry go to the fallback, the generic [`Object`] unless
/// replaced.
#[derive(Debug, Clone)]
pub struct Registry {
    decoders: HashMap<Discriminator, DecodeFn>,
    fallback: DecodeFn,
}

fn decode_object(fields: &Fields<'_>) -> Result<Item> {
    Object::decode(fields).map(Item::from)
}

impl Registry {
    /// A registry decoding everything as a generic object.
    pub fn empty() -> Registry {
        Registry {
            decoders: HashMap::new(),
            fallback: decode_object,
        }
    }

    /// Registers `decode` for `kind`, returning the function it replaces.
    pub fn register(&mut self, kind: impl Into<Discriminator>, decode: DecodeFn) -> Option<DecodeFn> {
        self.decoders.insert(kind.into(), decode)
    }

    pub fn unregister(&mut self, kind: &str) -> Option<DecodeFn> {
        self.decoders.remove(kind)
    }

    pub fn get(&self, kind: &str) -> Option<DecodeFn> {
        self.decoders.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.decoders.contains_key(kind)
    }

    pub fn fallback(&self) -> DecodeFn {
        self.fallback
    }

    pub fn set_fallback(&mut self, decode: DecodeFn) {
        self.fallback = decode;
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    fn register_all(&mut self, kinds: &[Discriminator], decode: DecodeFn) {
        for kind in kinds {
            self.register(kind.clone(), decode);
        }
    }
}

impl Default for Registry {
    /// Every built-in vocabulary type.
    fn default() -> Self {
        let mut registry = Registry::empty();
        registry.register_all(&OBJECT_TYPES, decode_object);
        registry.register_all(&LINK_TYPES, |f| Link::decode(f).map(Item::from));
        registry.register_all(&ACTIVITY_TYPES, |f| Activity::decode(f).map(Item::from));
        registry.register_all(&INTRANSITIVE_ACTIVITY_TYPES, |f| {
            IntransitiveActivity::decode(f).map(Item::from)
        });
        registry.register(Discriminator::ACTOR, |f| Actor::decode(f).map(Item::from));
        registry.register_all(&ACTOR_TYPES, |f| Actor::decode(f).map(Item::from));

        registry.register(Discriminator::QUESTION, |f| Question::decode(f).map(Item::from));
        registry.register(Discriminator::PLACE, |f| Place::decode(f).map(Item::from));
        registry.register(Discriminator::PROFILE, |f| Profile::decode(f).map(Item::from));
        registry.register(Discriminator::RELATIONSHIP, |f| {
            Relationship::decode(f).map(Item::from)
        });
        registry.register(Discriminator::TOMBSTONE, |f| Tombstone::decode(f).map(Item::from));

        registry.register(Discriminator::COLLECTION, |f| {
            Collection::decode(f).map(Item::from)
        });
        registry.register(Discriminator::ORDERED_COLLECTION, |f| {
            OrderedCollection::decode(f).map(Item::from)
        });
        registry.register(Discriminator::COLLECTION_PAGE, |f| {
            CollectionPage::decode(f).map(Item::from)
        });
        registry.register(Discriminator::ORDERED_COLLECTION_PAGE, |f| {
            OrderedCollectionPage::decode(f).map(Item::from)
        });
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_knows_builtin_types() {
        let registry = Registry::default();
        for kind in ["Note", "Mention", "Follow", "Arrive", "Question", "Person", "Actor"] {
            assert!(registry.contains(kind), "{kind}");
        }
        assert!(registry.contains("OrderedCollectionPage"));
        assert!(!registry.contains("ItemCollection"));
        assert!(!registry.contains("FrobnicatorWidget"));
    }

    #[test]
    fn register_and_unregister() {
        let mut registry = Registry::empty();
        assert!(registry.is_empty());
        assert!(registry.register("Emoji", decode_object).is_none());
        assert!(registry.register("Emoji", decode_object).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister("Emoji").is_some());
        assert!(registry.get("Emoji").is_none());
    }
}
