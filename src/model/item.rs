use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::codec::Writer;
use crate::json_ld::Discriminator;

use super::{
    Activity, Actor, Collection, CollectionPage, Equality, Id, IntransitiveActivity, Link,
    Object, OrderedCollection, OrderedCollectionPage, Place, Profile, Question, Relationship,
    Tombstone,
};

/// The capabilities shared by everything a polymorphic property can hold.
pub trait ObjectOrLink {
    fn id(&self) -> &Id;
    /// The IRI to dereference: the `href` of a link, the `id` otherwise.
    fn link(&self) -> &Id {
        self.id()
    }
    fn kind(&self) -> &Discriminator;
    fn is_link(&self) -> bool {
        false
    }
    fn is_object(&self) -> bool {
        true
    }
    fn is_collection(&self) -> bool {
        false
    }
}

/// Any ActivityStreams entity, or a reference to one.
///
/// Actor roles (`Person`, `Service`, ...) are all [`Actor`]; the role lives in
/// the discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Link(Box<Link>),
    Object(Box<Object>),
    Activity(Box<Activity>),
    IntransitiveActivity(Box<IntransitiveActivity>),
    Question(Box<Question>),
    Actor(Box<Actor>),
    Collection(Box<Collection>),
    OrderedCollection(Box<OrderedCollection>),
    CollectionPage(Box<CollectionPage>),
    OrderedCollectionPage(Box<OrderedCollectionPage>),
    Place(Box<Place>),
    Profile(Box<Profile>),
    Relationship(Box<Relationship>),
    Tombstone(Box<Tombstone>),
    ItemCollection(ItemCollection),
}

static ITEM_COLLECTION_KIND: Discriminator = Discriminator::ITEM_COLLECTION;
static OBJECT_KIND: Discriminator = Discriminator::OBJECT;
static EMPTY_ID: Id = Id::EMPTY;

macro_rules! impl_item_variants {
    ($($variant:ident => $accessor:ident),* $(,)?) => {
        $(
            impl From<$variant> for Item {
                fn from(value: $variant) -> Self {
                    Item::$variant(Box::new(value))
                }
            }
        )*

        impl Item {
            $(
                pub fn $accessor(&self) -> Option<&$variant> {
                    match self {
                        Item::$variant(value) => Some(&**value),
                        _ => None,
                    }
                }
            )*
        }

        impl ObjectOrLink for Item {
            fn id(&self) -> &Id {
                match self {
                    $(Item::$variant(value) => value.id(),)*
                    Item::ItemCollection(items) => items.id(),
                }
            }
            fn link(&self) -> &Id {
                match self {
                    $(Item::$variant(value) => value.link(),)*
                    Item::ItemCollection(items) => items.link(),
                }
            }
            fn kind(&self) -> &Discriminator {
                match self {
                    $(Item::$variant(value) => value.kind(),)*
                    Item::ItemCollection(items) => items.kind(),
                }
            }
            fn is_link(&self) -> bool {
                match self {
                    $(Item::$variant(value) => value.is_link(),)*
                    Item::ItemCollection(items) => items.is_link(),
                }
            }
            fn is_object(&self) -> bool {
                match self {
                    $(Item::$variant(value) => value.is_object(),)*
                    Item::ItemCollection(items) => items.is_object(),
                }
            }
            fn is_collection(&self) -> bool {
                match self {
                    $(Item::$variant(value) => value.is_collection(),)*
                    Item::ItemCollection(items) => items.is_collection(),
                }
            }
        }
    };
}

impl_item_variants!(
    Link => as_link,
    Object => as_object,
    Activity => as_activity,
    IntransitiveActivity => as_intransitive_activity,
    Question => as_question,
    Actor => as_actor,
    Collection => as_collection,
    OrderedCollection => as_ordered_collection,
    CollectionPage => as_collection_page,
    OrderedCollectionPage => as_ordered_collection_page,
    Place => as_place,
    Profile => as_profile,
    Relationship => as_relationship,
    Tombstone => as_tombstone,
);

macro_rules! impl_object_or_link {
    ($($typ:ty),* ; collection = $collection:expr) => {
        $(
            impl ObjectOrLink for $typ {
                fn id(&self) -> &Id {
                    &self.id
                }
                /// An object decoded without a `type` reports `Object`.
                fn kind(&self) -> &Discriminator {
                    if self.kind.is_empty() {
                        &OBJECT_KIND
                    } else {
                        &self.kind
                    }
                }
                fn is_collection(&self) -> bool {
                    $collection
                }
            }
        )*
    };
}

impl_object_or_link!(
    Object, Activity, IntransitiveActivity, Question, Actor, Place, Profile, Relationship, Tombstone;
    collection = false
);
impl_object_or_link!(
    Collection, OrderedCollection, CollectionPage, OrderedCollectionPage;
    collection = true
);

impl Item {
    /// The [`Object`] every variant except links and item collections is
    /// built on.
    pub fn base_object(&self) -> Option<&Object> {
        match self {
            Item::Link(_) | Item::ItemCollection(_) => None,
            Item::Object(object) => Some(&**object),
            Item::Activity(activity) => Some(&activity.base.base),
            Item::IntransitiveActivity(activity) => Some(&activity.base),
            Item::Question(question) => Some(&question.base.base),
            Item::Actor(actor) => Some(&actor.base),
            Item::Collection(collection) => Some(&collection.base),
            Item::OrderedCollection(collection) => Some(&collection.base),
            Item::CollectionPage(page) => Some(&page.base.base),
            Item::OrderedCollectionPage(page) => Some(&page.base.base),
            Item::Place(place) => Some(&place.base),
            Item::Profile(profile) => Some(&profile.base),
            Item::Relationship(relationship) => Some(&relationship.base),
            Item::Tombstone(tombstone) => Some(&tombstone.base),
        }
    }

    pub fn base_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Item::Link(_) | Item::ItemCollection(_) => None,
            Item::Object(object) => Some(&mut **object),
            Item::Activity(activity) => Some(&mut activity.base.base),
            Item::IntransitiveActivity(activity) => Some(&mut activity.base),
            Item::Question(question) => Some(&mut question.base.base),
            Item::Actor(actor) => Some(&mut actor.base),
            Item::Collection(collection) => Some(&mut collection.base),
            Item::OrderedCollection(collection) => Some(&mut collection.base),
            Item::CollectionPage(page) => Some(&mut page.base.base),
            Item::OrderedCollectionPage(page) => Some(&mut page.base.base),
            Item::Place(place) => Some(&mut place.base),
            Item::Profile(profile) => Some(&mut profile.base),
            Item::Relationship(relationship) => Some(&mut relationship.base),
            Item::Tombstone(tombstone) => Some(&mut tombstone.base),
        }
    }

    /// A link carrying nothing but an IRI.
    pub fn is_bare_link(&self) -> bool {
        matches!(self, Item::Link(link) if link.is_bare())
    }

    /// Everyone the item is addressed to, blind copies included.
    pub fn recipients(&self) -> ItemCollection {
        self.base_object()
            .map(Object::recipients)
            .unwrap_or_default()
    }

    /// Strips `bto` and `bcc` before the item leaves this server.
    pub fn clean(&mut self) {
        match self {
            Item::Activity(activity) => activity.clean(),
            Item::ItemCollection(items) => items.iter_mut().for_each(Item::clean),
            item => {
                if let Some(object) = item.base_object_mut() {
                    object.clean();
                }
            }
        }
    }

    /// The wire form: a string for bare links, an array for item
    /// collections and an object for everything else.
    pub fn to_value(&self) -> Value {
        match self {
            Item::Link(link) => link.to_value(),
            Item::Object(object) => Writer::encode(&**object),
            Item::Activity(activity) => Writer::encode(&**activity),
            Item::IntransitiveActivity(activity) => Writer::encode(&**activity),
            Item::Question(question) => Writer::encode(&**question),
            Item::Actor(actor) => Writer::encode(&**actor),
            Item::Collection(collection) => Writer::encode(&**collection),
            Item::OrderedCollection(collection) => Writer::encode(&**collection),
            Item::CollectionPage(page) => Writer::encode(&**page),
            Item::OrderedCollectionPage(page) => Writer::encode(&**page),
            Item::Place(place) => Writer::encode(&**place),
            Item::Profile(profile) => Writer::encode(&**profile),
            Item::Relationship(relationship) => Writer::encode(&**relationship),
            Item::Tombstone(tombstone) => Writer::encode(&**tombstone),
            Item::ItemCollection(items) => items.to_value(),
        }
    }

    pub fn as_item_collection(&self) -> Option<&ItemCollection> {
        match self {
            Item::ItemCollection(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Id> for Item {
    fn from(value: Id) -> Self {
        Item::Link(Box::new(Link::from(value)))
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::from(Id::from(value))
    }
}

impl From<ItemCollection> for Item {
    fn from(value: ItemCollection) -> Self {
        Item::ItemCollection(value)
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

/// An ordered list of items. Duplicates are kept unless [`dedup`] is called.
///
/// [`dedup`]: ItemCollection::dedup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection(Vec<Item>);

impl ItemCollection {
    pub fn new() -> ItemCollection {
        ItemCollection::default()
    }

    pub fn contains_id(&self, id: &Id, mode: Equality) -> bool {
        self.0.iter().any(|item| item.link().equals(id, mode))
    }

    /// Drops later occurrences of the same IRI. Anonymous entries are all
    /// kept.
    pub fn dedup(&mut self) {
        let mut seen: HashSet<Id> = HashSet::new();
        self.0
            .retain(|item| item.link().is_empty() || seen.insert(item.link().clone()));
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.0
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Array(self.0.iter().map(Item::to_value).collect())
    }
}

impl ObjectOrLink for ItemCollection {
    fn id(&self) -> &Id {
        &EMPTY_ID
    }
    fn kind(&self) -> &Discriminator {
        &ITEM_COLLECTION_KIND
    }
    fn is_object(&self) -> bool {
        false
    }
    fn is_collection(&self) -> bool {
        true
    }
}

impl Deref for ItemCollection {
    type Target = Vec<Item>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ItemCollection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(value: Vec<Item>) -> Self {
        ItemCollection(value)
    }
}

impl FromIterator<Item> for ItemCollection {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        ItemCollection(iter.into_iter().collect())
    }
}

impl IntoIterator for ItemCollection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn capabilities() {
        let link = Item::from("https://example.com/1");
        assert!(link.is_link());
        assert!(!link.is_object());
        assert!(link.is_bare_link());
        assert_eq!(link.id(), "https://example.com/1");

        let note = Item::from(Object::new("https://example.com/note", Discriminator::NOTE));
        assert!(note.is_object());
        assert!(!note.is_link());
        assert!(!note.is_collection());
        assert_eq!(note.kind(), &Discriminator::NOTE);

        let followers = Item::from(Collection::new("https://example.com/followers"));
        assert!(followers.is_collection());
        assert!(followers.is_object());

        let items = Item::from(ItemCollection::from(vec![link, note]));
        assert!(items.is_collection());
        assert!(!items.is_object());
        assert_eq!(items.kind(), "ItemCollection");
        assert!(items.id().is_empty());
    }

    #[test]
    fn borrow_variant() {
        let item = Item::from(Actor::person("https://example.com/users/john"));
        assert!(item.as_actor().is_some());
        assert!(item.as_collection().is_none());
        assert_eq!(
            item.base_object().map(|o| o.id.as_str()),
            Some("https://example.com/users/john")
        );
    }

    #[test]
    fn serialize_with_serde() -> anyhow::Result<()> {
        let items: ItemCollection = [Item::from("https://a"), Item::from("https://b")]
            .into_iter()
            .collect();
        let text = serde_json::to_string(&Item::from(items))?;
        assert_eq!(text, r#"["https://a","https://b"]"#);
        assert_eq!(
            serde_json::to_value(Item::from(Link::new("https://c")))?,
            json!({"type": "Link", "href": "https://c"})
        );
        Ok(())
    }

    #[test]
    fn contains_and_dedup() {
        let mut items: ItemCollection = [
            Item::from("https://example.com/a"),
            Item::from("https://example.com/b"),
            Item::from("https://example.com/a"),
        ]
        .into_iter()
        .collect();
        assert!(items.contains_id(&Id::from("https://example.com/b/"), Equality::Tolerant));
        assert!(!items.contains_id(&Id::from("https://example.com/b/"), Equality::Strict));
        items.dedup();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn dedup_keeps_anonymous_entries() {
        let mut tabs = Object::new("", Discriminator::NOTE);
        let mut spaces = tabs.clone();
        tabs.name.set("", "Tabs");
        spaces.name.set("", "Spaces");
        let mut options: ItemCollection = [
            Item::from(tabs),
            Item::from(spaces),
            Item::from("https://example.com/a"),
            Item::from("https://example.com/a"),
        ]
        .into_iter()
        .collect();
        options.dedup();
        assert_eq!(options.len(), 3);
        assert!(options[0].id().is_empty());
        assert!(options[1].id().is_empty());
    }
}
