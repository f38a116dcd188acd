use jiff::Timestamp;

use crate::codec::{Fields, WriteFields, Writer};
use crate::error::Result;
use crate::json_ld::Discriminator;

use super::{Id, Item, ItemCollection, Object};

/// An activity without a direct object, such as `Arrive` or `Travel`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntransitiveActivity {
    pub base: Object,
    pub actor: Option<Item>,
    pub target: Option<Item>,
    pub result: Option<Item>,
    pub origin: Option<Item>,
    pub instrument: Option<Item>,
}

/// An action performed by an actor on an object.
///
/// See <https://www.w3.org/TR/activitystreams-vocabulary/#activity-types>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    pub base: IntransitiveActivity,
    pub object: Option<Item>,
}

/// A poll. Either `one_of` or `any_of` holds the options, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Question {
    pub base: IntransitiveActivity,
    pub one_of: ItemCollection,
    pub any_of: ItemCollection,
    pub closed: Option<Timestamp>,
}

impl_deref_base!(IntransitiveActivity => Object);
impl_deref_base!(Activity => IntransitiveActivity);
impl_deref_base!(Question => IntransitiveActivity);

impl IntransitiveActivity {
    /// A kind outside the intransitive types becomes the generic
    /// `IntransitiveActivity`. So does `Question`; use [`Question::new`].
    pub fn new(id: impl Into<Id>, kind: Discriminator) -> IntransitiveActivity {
        let kind = if kind.is_intransitive_activity() && kind != Discriminator::QUESTION {
            kind
        } else {
            Discriminator::INTRANSITIVE_ACTIVITY
        };
        IntransitiveActivity::from_base(Object::new(id, kind))
    }

    pub(crate) fn from_base(base: Object) -> IntransitiveActivity {
        IntransitiveActivity {
            base,
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<IntransitiveActivity> {
        Ok(IntransitiveActivity {
            base: Object::decode(f)?,
            actor: f.item("actor")?,
            target: f.item("target")?,
            result: f.item("result")?,
            origin: f.item("origin")?,
            instrument: f.item("instrument")?,
        })
    }
}

impl Activity {
    /// A kind outside the activity types becomes the generic `Activity`.
    pub fn new(id: impl Into<Id>, kind: Discriminator, object: Option<Item>) -> Activity {
        let kind = if kind.is_activity() {
            kind
        } else {
            Discriminator::ACTIVITY
        };
        Activity {
            base: IntransitiveActivity::from_base(Object::new(id, kind)),
            object,
        }
    }

    /// Strips the blind recipients of the activity and of its object.
    pub fn clean(&mut self) {
        self.base.base.clean();
        if let Some(object) = &mut self.object {
            object.clean();
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Activity> {
        Ok(Activity {
            base: IntransitiveActivity::decode(f)?,
            object: f.item("object")?,
        })
    }
}

impl Question {
    pub fn new(id: impl Into<Id>) -> Question {
        Question {
            base: IntransitiveActivity::from_base(Object::new(id, Discriminator::QUESTION)),
            ..Default::default()
        }
    }

    pub fn decode(f: &Fields<'_>) -> Result<Question> {
        Ok(Question {
            base: IntransitiveActivity::decode(f)?,
            one_of: f.items("oneOf")?,
            any_of: f.items("anyOf")?,
            closed: f.timestamp("closed"),
        })
    }
}

impl WriteFields for IntransitiveActivity {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("actor", self.actor.as_ref());
        w.item("target", self.target.as_ref());
        w.item("result", self.result.as_ref());
        w.item("origin", self.origin.as_ref());
        w.item("instrument", self.instrument.as_ref());
    }
}

impl WriteFields for Activity {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("object", self.object.as_ref());
    }
}

impl WriteFields for Question {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.items("oneOf", &self.one_of);
        w.items("anyOf", &self.any_of);
        w.timestamp("closed", self.closed);
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::codec::Decoder;
    use crate::json_ld::Discriminator;
    use crate::model::{Activity, IntransitiveActivity, Item, Object, ObjectOrLink};

    #[test]
    fn constructors_validate_kind() {
        let like = Activity::new("https://example.com/likes/1", Discriminator::LIKE, None);
        assert_eq!(like.kind, Discriminator::LIKE);
        let odd = Activity::new("https://example.com/1", Discriminator::NOTE, None);
        assert_eq!(odd.kind, Discriminator::ACTIVITY);
        let arrive = IntransitiveActivity::new("https://example.com/2", Discriminator::ARRIVE);
        assert_eq!(arrive.kind, Discriminator::ARRIVE);
        let odd = IntransitiveActivity::new("https://example.com/3", Discriminator::LIKE);
        assert_eq!(odd.kind, Discriminator::INTRANSITIVE_ACTIVITY);
    }

    #[test]
    fn question_kind_stays_off_intransitive() -> Result<()> {
        let activity = IntransitiveActivity::new("https://example.com/4", Discriminator::QUESTION);
        assert_eq!(activity.kind, Discriminator::INTRANSITIVE_ACTIVITY);

        let item = Item::from(activity);
        let decoded = Decoder::default().decode_value(&item.to_value())?;
        assert_eq!(decoded, item);
        Ok(())
    }

    #[test]
    fn clean_reaches_embedded_object() {
        let mut note = Object::new("https://example.com/notes/1", Discriminator::NOTE);
        note.bcc.push(Item::from("https://example.com/users/secret"));
        let mut create = Activity::new(
            "https://example.com/activities/1",
            Discriminator::CREATE,
            Some(note.into()),
        );
        create.bto.push(Item::from("https://example.com/users/other"));
        create.to.push(Item::from("https://example.com/users/jane"));

        create.clean();
        assert!(create.bto.is_empty());
        assert_eq!(create.to.len(), 1);
        let object = create.object.as_ref().and_then(Item::as_object).unwrap();
        assert!(object.bcc.is_empty());
    }

    #[test]
    fn decode_question() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "id": "https://example.com/polls/1",
            "type": "Question",
            "name": "Tabs or spaces?",
            "oneOf": [
                {"type": "Note", "name": "Tabs"},
                {"type": "Note", "name": "Spaces"}
            ],
            "closed": "2024-05-01T00:00:00Z"
        }))?;
        let question = item.as_question().unwrap();
        assert_eq!(question.one_of.len(), 2);
        assert!(question.any_of.is_empty());
        assert!(question.closed.is_some());
        assert_eq!(question.name.get(""), "Tabs or spaces?");
        assert!(item.is_object());
        Ok(())
    }

    #[test]
    fn decode_follow_with_embedded_actor() -> Result<()> {
        let item = Decoder::default().decode_value(&json!({
            "id": "https://example.com/follows/1",
            "type": "Follow",
            "actor": {"id": "https://example.com/users/john", "type": "Person"},
            "object": "https://other.example/users/jane"
        }))?;
        let follow = item.as_activity().unwrap();
        assert!(follow.actor.as_ref().and_then(Item::as_actor).is_some());
        assert_eq!(
            follow.object.as_ref().map(|object| object.link().as_str()),
            Some("https://other.example/users/jane")
        );
        Ok(())
    }
}
