use jiff::{SignedDuration, Timestamp};

use crate::codec::{Fields, WriteFields, Writer};
use crate::error::Result;
use crate::json_ld::Discriminator;

use super::{Id, Item, ItemCollection, MimeType, NaturalLanguageValues};

/// The base shape of every ActivityStreams entity except links.
///
/// See <https://www.w3.org/TR/activitystreams-vocabulary/#dfn-object>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub id: Id,
    pub kind: Discriminator,
    pub name: NaturalLanguageValues,
    pub attachment: Option<Item>,
    pub attributed_to: Option<Item>,
    pub audience: ItemCollection,
    /// HTML unless `media_type` says otherwise.
    pub content: NaturalLanguageValues,
    pub context: Option<Item>,
    pub media_type: MimeType,
    pub published: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub generator: Option<Item>,
    pub icon: Option<Item>,
    pub image: Option<Item>,
    pub in_reply_to: Option<Item>,
    pub location: Option<Item>,
    pub preview: Option<Item>,
    pub replies: Option<Item>,
    pub duration: Option<SignedDuration>,
    pub summary: NaturalLanguageValues,
    pub tag: ItemCollection,
    pub url: Option<Item>,
    pub to: ItemCollection,
    pub bto: ItemCollection,
    pub cc: ItemCollection,
    pub bcc: ItemCollection,
    pub likes: Option<Item>,
    pub shares: Option<Item>,
    pub source: Source,
}

/// The markup `content` was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub content: NaturalLanguageValues,
    pub media_type: MimeType,
}

impl Source {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.media_type.is_empty()
    }
}

impl Object {
    /// An empty `kind` means a plain `Object`.
    pub fn new(id: impl Into<Id>, kind: Discriminator) -> Object {
        Object {
            id: id.into(),
            kind: if kind.is_empty() {
                Discriminator::OBJECT
            } else {
                kind
            },
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Object> {
        Ok(Object {
            id: f.id(),
            kind: f.kind(),
            name: f.natural_language("name"),
            attachment: f.item("attachment")?,
            attributed_to: f.item("attributedTo")?,
            audience: f.items("audience")?,
            content: f.natural_language("content"),
            context: f.item("context")?,
            media_type: f.string("mediaType"),
            published: f.timestamp("published"),
            updated: f.timestamp("updated"),
            start_time: f.timestamp("startTime"),
            end_time: f.timestamp("endTime"),
            generator: f.item("generator")?,
            icon: f.item("icon")?,
            image: f.item("image")?,
            in_reply_to: f.item("inReplyTo")?,
            location: f.item("location")?,
            preview: f.item("preview")?,
            replies: f.item("replies")?,
            duration: f.duration("duration"),
            summary: f.natural_language("summary"),
            tag: f.items("tag")?,
            url: f.item("url")?,
            to: f.items("to")?,
            bto: f.items("bto")?,
            cc: f.items("cc")?,
            bcc: f.items("bcc")?,
            likes: f.item("likes")?,
            shares: f.item("shares")?,
            source: f
                .record("source")
                .map(|source| Source {
                    content: source.natural_language("content"),
                    media_type: source.string("mediaType"),
                })
                .unwrap_or_default(),
        })
    }
}

impl WriteFields for Object {
    fn write_fields(&self, w: &mut Writer) {
        w.id(&self.id);
        w.kind(&self.kind);
        w.natural_language("name", &self.name);
        w.item("attachment", self.attachment.as_ref());
        w.item("attributedTo", self.attributed_to.as_ref());
        w.items("audience", &self.audience);
        w.natural_language("content", &self.content);
        w.item("context", self.context.as_ref());
        w.string("mediaType", &self.media_type);
        w.timestamp("published", self.published);
        w.timestamp("updated", self.updated);
        w.timestamp("startTime", self.start_time);
        w.timestamp("endTime", self.end_time);
        w.item("generator", self.generator.as_ref());
        w.item("icon", self.icon.as_ref());
        w.item("image", self.image.as_ref());
        w.item("inReplyTo", self.in_reply_to.as_ref());
        w.item("location", self.location.as_ref());
        w.item("preview", self.preview.as_ref());
        w.item("replies", self.replies.as_ref());
        w.duration("duration", self.duration);
        w.natural_language("summary", &self.summary);
        w.items("tag", &self.tag);
        w.item("url", self.url.as_ref());
        w.items("to", &self.to);
        w.items("bto", &self.bto);
        w.items("cc", &self.cc);
        w.items("bcc", &self.bcc);
        w.item("likes", self.likes.as_ref());
        w.item("shares", self.shares.as_ref());
        if !self.source.is_empty() {
            w.record("source", |w| {
                w.natural_language("content", &self.source.content);
                w.string("mediaType", &self.source.media_type);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use jiff::{SignedDuration, Timestamp};
    use serde_json::json;

    use crate::codec::{Decoder, Writer};
    use crate::json_ld::Discriminator;
    use crate::model::{Item, NaturalLanguageValues, Object, ObjectOrLink};

    #[test]
    fn empty_kind_is_object() {
        assert_eq!(Object::new("", Discriminator::default()).kind, Discriminator::OBJECT);
    }

    #[test]
    fn decode_soft_misses() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "id": "https://example.com/note/1",
            "type": "Note",
            "published": "yesterday",
            "updated": "2024-03-01T10:00:00Z",
            "duration": "PT5S",
            "mediaType": 7,
            "summary": ["not", "text"],
            "icon": 3,
            "tag": "https://example.com/tags/rust"
        }))?;
        let note = item.as_object().unwrap();
        assert_eq!(note.published, None);
        assert_eq!(note.updated, Some("2024-03-01T10:00:00Z".parse::<Timestamp>()?));
        assert_eq!(note.duration, Some(SignedDuration::from_secs(5)));
        assert_eq!(note.media_type, "");
        assert!(note.summary.is_empty());
        assert_eq!(note.icon, None);
        assert_eq!(note.tag.len(), 1);
        assert_eq!(note.tag[0].link(), "https://example.com/tags/rust");
        Ok(())
    }

    #[test]
    fn decode_day_durations() -> Result<()> {
        let decoder = Decoder::default();
        let duration = |value: &str| -> Result<_> {
            let item = decoder.decode_value(&json!({"type": "Video", "duration": value}))?;
            Ok(item.as_object().and_then(|video| video.duration))
        };
        assert_eq!(duration("P1D")?, Some(SignedDuration::from_hours(24)));
        assert_eq!(duration("P1DT2H")?, Some(SignedDuration::from_hours(26)));
        assert_eq!(duration("PT1M35S")?, Some(SignedDuration::from_secs(95)));
        assert_eq!(duration("P1M")?, None);
        assert_eq!(duration("soon")?, None);
        Ok(())
    }

    #[test]
    fn encode_in_declared_order() {
        let mut note = Object::new("https://example.com/note/1", Discriminator::NOTE);
        note.to.push(Item::from("https://www.w3.org/ns/activitystreams#Public"));
        note.content = NaturalLanguageValues::from("<p>hi</p>");
        note.attributed_to = Some(Item::from("https://example.com/users/john"));
        note.source.content = NaturalLanguageValues::from("hi");
        note.source.media_type = "text/markdown".into();

        let value = Writer::encode(&note);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["id", "type", "attributedTo", "content", "to", "source"]);
        assert_eq!(value["source"], json!({"content": "hi", "mediaType": "text/markdown"}));
    }
}
