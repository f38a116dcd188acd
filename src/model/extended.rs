//! Object types that carry properties of their own.

use jiff::Timestamp;

use crate::codec::{Fields, WriteFields, Writer};
use crate::error::Result;
use crate::json_ld::Discriminator;

use super::{Id, Item, Object};

/// A logical or physical location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub base: Object,
    /// Percentage, 0.0 to 100.0.
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
    /// `cm`, `feet`, `inches`, `km`, `m`, `miles` or an IRI.
    pub units: String,
}

/// Content about another object, typically an actor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub base: Object,
    pub describes: Option<Item>,
}

/// Describes how `subject` relates to `object`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    pub base: Object,
    pub subject: Option<Item>,
    pub object: Option<Item>,
    pub relationship: Option<Item>,
}

/// What remains of a deleted object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tombstone {
    pub base: Object,
    pub former_type: Discriminator,
    pub deleted: Option<Timestamp>,
}

impl_deref_base!(Place => Object);
impl_deref_base!(Profile => Object);
impl_deref_base!(Relationship => Object);
impl_deref_base!(Tombstone => Object);

impl Place {
    pub fn new(id: impl Into<Id>) -> Place {
        Place::from_base(Object::new(id, Discriminator::PLACE))
    }

    pub(crate) fn from_base(base: Object) -> Place {
        Place {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Place> {
        Ok(Place {
            base: Object::decode(f)?,
            accuracy: f.get_float("accuracy"),
            altitude: f.get_float("altitude"),
            latitude: f.get_float("latitude"),
            longitude: f.get_float("longitude"),
            radius: f.get_float("radius"),
            units: f.string("units"),
        })
    }
}

impl Profile {
    pub fn new(id: impl Into<Id>, describes: Option<Item>) -> Profile {
        Profile {
            describes,
            ..Profile::from_base(Object::new(id, Discriminator::PROFILE))
        }
    }

    pub(crate) fn from_base(base: Object) -> Profile {
        Profile {
            base,
            describes: None,
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Profile> {
        Ok(Profile {
            base: Object::decode(f)?,
            describes: f.item("describes")?,
        })
    }
}

impl Relationship {
    pub fn new(id: impl Into<Id>) -> Relationship {
        Relationship::from_base(Object::new(id, Discriminator::RELATIONSHIP))
    }

    pub(crate) fn from_base(base: Object) -> Relationship {
        Relationship {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Relationship> {
        Ok(Relationship {
            base: Object::decode(f)?,
            subject: f.item("subject")?,
            object: f.item("object")?,
            relationship: f.item("relationship")?,
        })
    }
}

impl Tombstone {
    pub fn new(id: impl Into<Id>, former_type: Discriminator) -> Tombstone {
        Tombstone {
            former_type,
            ..Tombstone::from_base(Object::new(id, Discriminator::TOMBSTONE))
        }
    }

    pub(crate) fn from_base(base: Object) -> Tombstone {
        Tombstone {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Tombstone> {
        Ok(Tombstone {
            base: Object::decode(f)?,
            former_type: f
                .get_str("formerType")
                .map(Discriminator::from)
                .unwrap_or_default(),
            deleted: f.timestamp("deleted"),
        })
    }
}

impl WriteFields for Place {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.float("accuracy", self.accuracy);
        w.float("altitude", self.altitude);
        w.float("latitude", self.latitude);
        w.float("longitude", self.longitude);
        w.float("radius", self.radius);
        w.string("units", &self.units);
    }
}

impl WriteFields for Profile {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("describes", self.describes.as_ref());
    }
}

impl WriteFields for Relationship {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("subject", self.subject.as_ref());
        w.item("object", self.object.as_ref());
        w.item("relationship", self.relationship.as_ref());
    }
}

impl WriteFields for Tombstone {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.string("formerType", self.former_type.as_str());
        w.timestamp("deleted", self.deleted);
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::codec::Decoder;
    use crate::json_ld::Discriminator;

    #[test]
    fn decode_place() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "type": "Place",
            "name": "Fresno Area",
            "latitude": 36.75,
            "longitude": 119,
            "radius": "far",
            "units": "miles"
        }))?;
        let place = item.as_place().unwrap();
        assert_eq!(place.latitude, Some(36.75));
        assert_eq!(place.longitude, Some(119.0));
        assert_eq!(place.radius, None);
        assert_eq!(place.units, "miles");
        Ok(())
    }

    #[test]
    fn decode_tombstone() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "id": "https://example.com/notes/1",
            "type": "Tombstone",
            "formerType": "Note",
            "deleted": "2024-01-02T03:04:05Z"
        }))?;
        let tombstone = item.as_tombstone().unwrap();
        assert_eq!(tombstone.former_type, Discriminator::NOTE);
        assert!(tombstone.deleted.is_some());
        Ok(())
    }

    #[test]
    fn decode_relationship() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "type": "Relationship",
            "subject": "https://example.com/users/john",
            "relationship": "http://purl.org/vocab/relationship/acquaintanceOf",
            "object": {"type": "Person", "id": "https://example.com/users/jane"}
        }))?;
        let relationship = item.as_relationship().unwrap();
        assert!(relationship.subject.as_ref().is_some_and(|s| s.is_bare_link()));
        assert!(relationship.object.as_ref().and_then(|o| o.as_actor()).is_some());
        Ok(())
    }
}
