use serde_json::Value;

use crate::codec::{Fields, WriteFields, Writer};
use crate::error::Result;
use crate::json_ld::Discriminator;

use super::{Id, Item, MimeType, NaturalLanguageValues, ObjectOrLink};

/// A qualified reference to a resource.
///
/// A link holding nothing but an id is written as a plain IRI string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub id: Id,
    pub kind: Discriminator,
    pub href: Id,
    pub rel: Vec<String>,
    pub media_type: MimeType,
    pub name: NaturalLanguageValues,
    pub hreflang: String,
    pub height: u64,
    pub width: u64,
    pub preview: Option<Item>,
}

static LINK_KIND: Discriminator = Discriminator::LINK;

impl Link {
    pub fn new(href: impl Into<Id>) -> Link {
        Link {
            kind: Discriminator::LINK,
            href: href.into(),
            ..Default::default()
        }
    }

    pub fn is_bare(&self) -> bool {
        self.kind.is_empty()
            && self.href.is_empty()
            && self.rel.is_empty()
            && self.media_type.is_empty()
            && self.name.is_empty()
            && self.hreflang.is_empty()
            && self.height == 0
            && self.width == 0
            && self.preview.is_none()
    }

    pub fn decode(f: &Fields<'_>) -> Result<Link> {
        Ok(Link {
            id: f.id(),
            kind: f.kind(),
            href: f.get_str("href").map(Id::from).unwrap_or_default(),
            rel: f.str_array("rel"),
            media_type: f.string("mediaType"),
            name: f.natural_language("name"),
            hreflang: f.string("hreflang"),
            height: f.get_uint("height").unwrap_or_default(),
            width: f.get_uint("width").unwrap_or_default(),
            preview: f.item("preview")?,
        })
    }

    pub(crate) fn to_value(&self) -> Value {
        if self.is_bare() {
            Value::String(self.id.to_string())
        } else {
            Writer::encode(self)
        }
    }
}

impl WriteFields for Link {
    fn write_fields(&self, w: &mut Writer) {
        w.id(&self.id);
        w.kind(&self.kind);
        w.string("href", self.href.as_str());
        w.strings("rel", &self.rel);
        w.string("mediaType", &self.media_type);
        w.natural_language("name", &self.name);
        w.string("hreflang", &self.hreflang);
        w.nonzero("height", self.height);
        w.nonzero("width", self.width);
        w.item("preview", self.preview.as_ref());
    }
}

impl ObjectOrLink for Link {
    fn id(&self) -> &Id {
        &self.id
    }
    fn link(&self) -> &Id {
        if self.href.is_empty() {
            &self.id
        } else {
            &self.href
        }
    }
    fn kind(&self) -> &Discriminator {
        if self.kind.is_empty() {
            &LINK_KIND
        } else {
            &self.kind
        }
    }
    fn is_link(&self) -> bool {
        true
    }
    fn is_object(&self) -> bool {
        false
    }
}

impl From<Id> for Link {
    fn from(id: Id) -> Self {
        Link {
            id,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::codec::Decoder;
    use crate::model::{Id, Link, ObjectOrLink};

    #[test]
    fn bare_link_is_a_string() {
        let link = Link::from(Id::from("https://example.com/users/john"));
        assert!(link.is_bare());
        assert_eq!(link.to_value(), json!("https://example.com/users/john"));
        assert_eq!(link.kind(), "Link");
    }

    #[test]
    fn decode_mention() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "type": "Mention",
            "href": "https://example.com/users/john",
            "name": "@john@example.com",
            "rel": "me",
            "width": 400
        }))?;
        let mention = item.as_link().unwrap();
        assert_eq!(mention.kind, "Mention");
        assert_eq!(mention.link(), "https://example.com/users/john");
        assert_eq!(mention.rel, ["me"]);
        assert_eq!(mention.width, 400);
        assert_eq!(mention.name.get(""), "@john@example.com");
        assert!(item.is_link());
        Ok(())
    }
}
