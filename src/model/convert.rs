//! Conversions between the variants of [`Item`].
//!
//! Widening moves the base shape out. Narrowing is only allowed when the
//! discriminator says the item really is of the narrower type; the fields
//! the base does not have start out empty.

use crate::error::ConversionError;
use crate::json_ld::Discriminator;

use super::{
    Activity, Actor, Collection, CollectionPage, IntransitiveActivity, Item, ItemCollection, Link,
    Object, ObjectOrLink, OrderedCollection, OrderedCollectionPage, Place, Profile, Question,
    Relationship, Tombstone,
};

fn fail(item: &Item, to: &'static str) -> ConversionError {
    ConversionError::new(item.kind(), to)
}

impl TryFrom<Item> for Object {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Object(object) => Ok(*object),
            Item::Activity(activity) => Ok(activity.base.base),
            Item::IntransitiveActivity(activity) => Ok(activity.base),
            Item::Question(question) => Ok(question.base.base),
            Item::Actor(actor) => Ok(actor.base),
            Item::Collection(collection) => Ok(collection.base),
            Item::OrderedCollection(collection) => Ok(collection.base),
            Item::CollectionPage(page) => Ok(page.base.base),
            Item::OrderedCollectionPage(page) => Ok(page.base.base),
            Item::Place(place) => Ok(place.base),
            Item::Profile(profile) => Ok(profile.base),
            Item::Relationship(relationship) => Ok(relationship.base),
            Item::Tombstone(tombstone) => Ok(tombstone.base),
            other @ (Item::Link(_) | Item::ItemCollection(_)) => Err(fail(&other, "Object")),
        }
    }
}

impl TryFrom<Item> for Link {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Link(link) => Ok(*link),
            other => Err(fail(&other, "Link")),
        }
    }
}

impl TryFrom<Item> for ItemCollection {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::ItemCollection(items) => Ok(items),
            Item::Collection(collection) => Ok(collection.items),
            Item::OrderedCollection(collection) => Ok(collection.ordered_items),
            Item::CollectionPage(page) => Ok(page.base.items),
            Item::OrderedCollectionPage(page) => Ok(page.base.ordered_items),
            other => Err(fail(&other, "ItemCollection")),
        }
    }
}

impl TryFrom<Item> for IntransitiveActivity {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::IntransitiveActivity(activity) => Ok(*activity),
            Item::Activity(activity) => Ok(activity.base),
            Item::Question(question) => Ok(question.base),
            Item::Object(object)
                if object.kind.is_activity() || object.kind.is_intransitive_activity() =>
            {
                Ok(IntransitiveActivity::from_base(*object))
            }
            other => Err(fail(&other, "IntransitiveActivity")),
        }
    }
}

impl TryFrom<Item> for Activity {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Activity(activity) => Ok(*activity),
            Item::IntransitiveActivity(activity) if activity.kind.is_activity() => Ok(Activity {
                base: *activity,
                object: None,
            }),
            Item::Object(object) if object.kind.is_activity() => Ok(Activity {
                base: IntransitiveActivity::from_base(*object),
                object: None,
            }),
            other => Err(fail(&other, "Activity")),
        }
    }
}

impl TryFrom<Item> for Question {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Question(question) => Ok(*question),
            Item::IntransitiveActivity(activity) if activity.kind == Discriminator::QUESTION => {
                Ok(Question {
                    base: *activity,
                    ..Default::default()
                })
            }
            Item::Object(object) if object.kind == Discriminator::QUESTION => Ok(Question {
                base: IntransitiveActivity::from_base(*object),
                ..Default::default()
            }),
            other => Err(fail(&other, "Question")),
        }
    }
}

impl TryFrom<Item> for Actor {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Actor(actor) => Ok(*actor),
            Item::Object(object) if object.kind.is_actor() => Ok(Actor::from_base(*object)),
            other => Err(fail(&other, "Actor")),
        }
    }
}

impl TryFrom<Item> for Collection {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::Collection(collection) => Ok(*collection),
            Item::CollectionPage(page) => Ok(page.base),
            Item::Object(object)
                if object
                    .kind
                    .is_any_of(&[Discriminator::COLLECTION, Discriminator::COLLECTION_PAGE]) =>
            {
                Ok(Collection::from_base(*object))
            }
            other => Err(fail(&other, "Collection")),
        }
    }
}

impl TryFrom<Item> for OrderedCollection {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::OrderedCollection(collection) => Ok(*collection),
            Item::OrderedCollectionPage(page) => Ok(page.base),
            Item::Object(object)
                if object.kind.is_any_of(&[
                    Discriminator::ORDERED_COLLECTION,
                    Discriminator::ORDERED_COLLECTION_PAGE,
                ]) =>
            {
                Ok(OrderedCollection::from_base(*object))
            }
            other => Err(fail(&other, "OrderedCollection")),
        }
    }
}

impl TryFrom<Item> for CollectionPage {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::CollectionPage(page) => Ok(*page),
            Item::Collection(collection) if collection.kind == Discriminator::COLLECTION_PAGE => {
                Ok(CollectionPage {
                    base: *collection,
                    ..Default::default()
                })
            }
            Item::Object(object) if object.kind == Discriminator::COLLECTION_PAGE => {
                Ok(CollectionPage {
                    base: Collection::from_base(*object),
                    ..Default::default()
                })
            }
            other => Err(fail(&other, "CollectionPage")),
        }
    }
}

impl TryFrom<Item> for OrderedCollectionPage {
    type Error = ConversionError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        match item {
            Item::OrderedCollectionPage(page) => Ok(*page),
            Item::OrderedCollection(collection)
                if collection.kind == Discriminator::ORDERED_COLLECTION_PAGE =>
            {
                Ok(OrderedCollectionPage {
                    base: *collection,
                    ..Default::default()
                })
            }
            Item::Object(object) if object.kind == Discriminator::ORDERED_COLLECTION_PAGE => {
                Ok(OrderedCollectionPage {
                    base: OrderedCollection::from_base(*object),
                    ..Default::default()
                })
            }
            other => Err(fail(&other, "OrderedCollectionPage")),
        }
    }
}

macro_rules! impl_try_from_object {
    ($($typ:ident => $kind:ident),* $(,)?) => {
        $(
            impl TryFrom<Item> for $typ {
                type Error = ConversionError;

                fn try_from(item: Item) -> Result<Self, Self::Error> {
                    match item {
                        Item::$typ(value) => Ok(*value),
                        Item::Object(object) if object.kind == Discriminator::$kind => {
                            Ok($typ::from_base(*object))
                        }
                        other => Err(fail(&other, stringify!($typ))),
                    }
                }
            }
        )*
    };
}

impl_try_from_object!(
    Place => PLACE,
    Profile => PROFILE,
    Relationship => RELATIONSHIP,
    Tombstone => TOMBSTONE,
);

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::codec::Decoder;
    use crate::error::ConversionError;
    use crate::json_ld::Discriminator;
    use crate::model::{
        Activity, Actor, Collection, CollectionPage, IntransitiveActivity, Item, ItemCollection,
        Link, Object, OrderedCollection, Question, Tombstone,
    };

    #[test]
    fn widen_to_base() -> Result<()> {
        let actor = Actor::person("https://example.com/users/john");
        let object = Object::try_from(Item::from(actor))?;
        assert_eq!(object.kind, Discriminator::PERSON);
        assert_eq!(object.id, "https://example.com/users/john");

        let like = Activity::new(
            "https://example.com/likes/1",
            Discriminator::LIKE,
            Some(Item::from("https://example.com/notes/1")),
        );
        let intransitive = IntransitiveActivity::try_from(Item::from(like))?;
        assert_eq!(intransitive.kind, Discriminator::LIKE);
        Ok(())
    }

    #[test]
    fn narrow_by_discriminator() -> Result<()> {
        let object = Object::new("https://example.com/users/john", Discriminator::SERVICE);
        let actor = Actor::try_from(Item::from(object))?;
        assert_eq!(actor.kind, Discriminator::SERVICE);
        assert!(actor.inbox.is_none());

        let object = Object::new("https://example.com/notes/1", Discriminator::NOTE);
        let err = Actor::try_from(Item::from(object)).unwrap_err();
        assert_eq!(
            err,
            ConversionError {
                from: Discriminator::NOTE,
                to: "Actor"
            }
        );

        let object = Object::new("https://example.com/q/1", Discriminator::QUESTION);
        assert!(Question::try_from(Item::from(object)).is_ok());
        let object = Object::new("https://example.com/t/1", Discriminator::TOMBSTONE);
        assert!(Tombstone::try_from(Item::from(object)).is_ok());
        Ok(())
    }

    #[test]
    fn decoded_person_is_not_a_collection() -> Result<()> {
        let decoder = Decoder::default();
        let person = json!({"id": "https://example.com/users/john", "type": "Person"});
        let item = decoder.decode_value(&person)?;
        assert!(Actor::try_from(item.clone()).is_ok());
        let err = Collection::try_from(item).unwrap_err();
        assert_eq!(err.to_string(), "unable to convert Person to Collection");
        Ok(())
    }

    #[test]
    fn collections_give_up_their_items() -> Result<()> {
        let mut outbox = OrderedCollection::new("https://example.com/outbox");
        outbox.ordered_items.push(Item::from("https://example.com/notes/1"));
        let items = ItemCollection::try_from(Item::from(outbox))?;
        assert_eq!(items.len(), 1);

        let page = CollectionPage::new(
            "https://example.com/followers?page=1",
            Item::from("https://example.com/followers"),
        );
        let collection = Collection::try_from(Item::from(page))?;
        assert_eq!(collection.kind, Discriminator::COLLECTION_PAGE);
        assert!(CollectionPage::try_from(Item::from(collection)).is_ok());
        assert!(CollectionPage::try_from(Item::from(Collection::new("https://x"))).is_err());
        Ok(())
    }

    #[test]
    fn links_only_convert_to_links() {
        let item = Item::from("https://example.com/1");
        assert!(Link::try_from(item.clone()).is_ok());
        assert!(Object::try_from(item.clone()).is_err());
        assert!(ItemCollection::try_from(item).is_err());
    }
}
