use crate::codec::{Fields, WriteFields, Writer};
use crate::error::Result;
use crate::json_ld::Discriminator;

use super::{Equality, Id, Item, ItemCollection, Object, ObjectOrLink};

/// The behavior shared by every collection shape.
pub trait ItemContainer: ObjectOrLink {
    fn items(&self) -> &ItemCollection;
    fn items_mut(&mut self) -> &mut ItemCollection;
    /// The advertised size, zero when unknown.
    fn total_items(&self) -> u64;

    fn append(&mut self, item: impl Into<Item>)
    where
        Self: Sized,
    {
        self.items_mut().push(item.into());
    }

    /// `totalItems` when set, otherwise the number of materialized items.
    fn count(&self) -> u64 {
        match self.total_items() {
            0 => self.items().len() as u64,
            total => total,
        }
    }

    /// Membership by tolerant comparison, so `https://x/a/` is found when
    /// looking for `https://x/a`.
    fn contains(&self, id: &Id) -> bool {
        self.contains_with(id, Equality::Tolerant)
    }

    fn contains_with(&self, id: &Id, mode: Equality) -> bool {
        self.items().contains_id(id, mode)
    }
}

/// See <https://www.w3.org/TR/activitystreams-vocabulary/#dfn-collection>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub base: Object,
    pub current: Option<Item>,
    pub first: Option<Item>,
    pub last: Option<Item>,
    pub total_items: u64,
    pub items: ItemCollection,
}

/// A collection whose items are in reverse chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollection {
    pub base: Object,
    pub current: Option<Item>,
    pub first: Option<Item>,
    pub last: Option<Item>,
    pub total_items: u64,
    pub ordered_items: ItemCollection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPage {
    pub base: Collection,
    pub part_of: Option<Item>,
    pub next: Option<Item>,
    pub prev: Option<Item>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollectionPage {
    pub base: OrderedCollection,
    pub part_of: Option<Item>,
    pub next: Option<Item>,
    pub prev: Option<Item>,
    pub start_index: u64,
}

impl_deref_base!(Collection => Object);
impl_deref_base!(OrderedCollection => Object);
impl_deref_base!(CollectionPage => Collection);
impl_deref_base!(OrderedCollectionPage => OrderedCollection);

impl Collection {
    pub fn new(id: impl Into<Id>) -> Collection {
        Collection::from_base(Object::new(id, Discriminator::COLLECTION))
    }

    pub(crate) fn from_base(base: Object) -> Collection {
        Collection {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Collection> {
        Ok(Collection {
            base: Object::decode(f)?,
            current: f.item("current")?,
            first: f.item("first")?,
            last: f.item("last")?,
            total_items: f.get_uint("totalItems").unwrap_or_default(),
            items: f.items("items")?,
        })
    }
}

impl OrderedCollection {
    pub fn new(id: impl Into<Id>) -> OrderedCollection {
        OrderedCollection::from_base(Object::new(id, Discriminator::ORDERED_COLLECTION))
    }

    pub(crate) fn from_base(base: Object) -> OrderedCollection {
        OrderedCollection {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<OrderedCollection> {
        Ok(OrderedCollection {
            base: Object::decode(f)?,
            current: f.item("current")?,
            first: f.item("first")?,
            last: f.item("last")?,
            total_items: f.get_uint("totalItems").unwrap_or_default(),
            ordered_items: f.items("orderedItems")?,
        })
    }
}

impl CollectionPage {
    pub fn new(id: impl Into<Id>, part_of: impl Into<Item>) -> CollectionPage {
        let mut base = Collection::new(id);
        base.kind = Discriminator::COLLECTION_PAGE;
        CollectionPage {
            base,
            part_of: Some(part_of.into()),
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<CollectionPage> {
        Ok(CollectionPage {
            base: Collection::decode(f)?,
            part_of: f.item("partOf")?,
            next: f.item("next")?,
            prev: f.item("prev")?,
        })
    }
}

impl OrderedCollectionPage {
    pub fn new(id: impl Into<Id>, part_of: impl Into<Item>) -> OrderedCollectionPage {
        let mut base = OrderedCollection::new(id);
        base.kind = Discriminator::ORDERED_COLLECTION_PAGE;
        OrderedCollectionPage {
            base,
            part_of: Some(part_of.into()),
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<OrderedCollectionPage> {
        Ok(OrderedCollectionPage {
            base: OrderedCollection::decode(f)?,
            part_of: f.item("partOf")?,
            next: f.item("next")?,
            prev: f.item("prev")?,
            start_index: f.get_uint("startIndex").unwrap_or_default(),
        })
    }
}

impl WriteFields for Collection {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("current", self.current.as_ref());
        w.item("first", self.first.as_ref());
        w.item("last", self.last.as_ref());
        w.items("items", &self.items);
        w.uint("totalItems", self.total_items);
    }
}

impl WriteFields for OrderedCollection {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("current", self.current.as_ref());
        w.item("first", self.first.as_ref());
        w.item("last", self.last.as_ref());
        w.items("orderedItems", &self.ordered_items);
        w.uint("totalItems", self.total_items);
    }
}

impl WriteFields for CollectionPage {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("partOf", self.part_of.as_ref());
        w.item("next", self.next.as_ref());
        w.item("prev", self.prev.as_ref());
    }
}

impl WriteFields for OrderedCollectionPage {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("partOf", self.part_of.as_ref());
        w.item("next", self.next.as_ref());
        w.item("prev", self.prev.as_ref());
        w.nonzero("startIndex", self.start_index);
    }
}

macro_rules! impl_item_container {
    ($($typ:ty => $($field:ident).+),* $(,)?) => {
        $(
            impl ItemContainer for $typ {
                fn items(&self) -> &ItemCollection {
                    &self.$($field).+
                }
                fn items_mut(&mut self) -> &mut ItemCollection {
                    &mut self.$($field).+
                }
                fn total_items(&self) -> u64 {
                    self.total_items
                }
            }
        )*
    };
}

impl_item_container!(
    Collection => items,
    OrderedCollection => ordered_items,
    CollectionPage => base.items,
    OrderedCollectionPage => base.ordered_items,
);

impl ItemContainer for ItemCollection {
    fn items(&self) -> &ItemCollection {
        self
    }
    fn items_mut(&mut self) -> &mut ItemCollection {
        self
    }
    fn total_items(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::codec::{Decoder, Writer};
    use crate::json_ld::Discriminator;
    use crate::model::{
        Collection, CollectionPage, Equality, Id, Item, ItemContainer, Object, ObjectOrLink,
        OrderedCollectionPage,
    };

    #[test]
    fn count_prefers_total_items() {
        let mut followers = Collection::new("https://example.com/users/john/followers");
        followers.total_items = 5;
        followers.append(Item::from("https://a.example/1"));
        followers.append(Item::from("https://a.example/2"));
        assert_eq!(followers.count(), 5);

        followers.total_items = 0;
        followers.append(Object::new("https://a.example/3", Discriminator::NOTE));
        assert_eq!(followers.count(), 3);
    }

    #[test]
    fn contains_is_tolerant_unless_asked() {
        let mut outbox = Collection::new("https://example.com/outbox");
        outbox.append(Item::from("https://example.com/notes/1/"));
        outbox.append(Item::from("https://example.com/notes/2?page=1"));
        let id = Id::from("https://example.com/notes/1");
        assert!(outbox.contains(&id));
        assert!(outbox.contains(&Id::from("https://example.com/notes/2")));
        assert!(outbox.contains_with(&id, Equality::Tolerant));
        assert!(!outbox.contains_with(&id, Equality::Strict));
        assert!(outbox.contains_with(&id, Equality::default()));
        assert!(!Collection::new("https://example.com/empty").contains(&id));
    }

    #[test]
    fn decode_ordered_page() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "id": "https://example.com/outbox?page=2",
            "type": "OrderedCollectionPage",
            "partOf": "https://example.com/outbox",
            "next": "https://example.com/outbox?page=3",
            "startIndex": 20,
            "orderedItems": [
                {"id": "https://example.com/notes/1", "type": "Note"},
                "https://example.com/notes/2"
            ]
        }))?;
        let page = item.as_ordered_collection_page().unwrap();
        assert_eq!(page.start_index, 20);
        assert_eq!(page.count(), 2);
        assert_eq!(page.ordered_items[0].kind(), "Note");
        assert!(page.part_of.as_ref().is_some_and(Item::is_bare_link));
        Ok(())
    }

    #[test]
    fn page_appends_after_collection() {
        let mut page = CollectionPage::new(
            "https://example.com/followers?page=1",
            Id::from("https://example.com/followers"),
        );
        page.append(Item::from("https://a.example/1"));
        let value = Writer::encode(&page);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["id", "type", "items", "totalItems", "partOf"]);
        assert_eq!(value["totalItems"], json!(0));

        let ordered = OrderedCollectionPage::new(
            "https://example.com/o?page=1",
            Id::from("https://example.com/o"),
        );
        assert_eq!(Writer::encode(&ordered)["type"], json!("OrderedCollectionPage"));
    }
}
