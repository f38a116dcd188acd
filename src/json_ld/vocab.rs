use std::borrow::{Borrow, Cow};
use std::fmt::{self, Display};

pub const ACTIVITY_STREAMS_NS: &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY_V1_NS: &str = "https://w3id.org/security/v1";
/// The special collection addressing every actor.
pub const PUBLIC_COLLECTION: &str = "https://www.w3.org/ns/activitystreams#Public";

/// The `"type"` of a vocabulary entity.
///
/// Built-in types are available as associated constants. Types coming from
/// vocabulary extensions are kept verbatim, so they survive a decode/encode
/// round trip even when no decoder knows about them.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Discriminator(Cow<'static, str>);

impl Discriminator {
    pub fn new(kind: &str) -> Discriminator {
        Discriminator(Cow::Owned(kind.to_owned()))
    }

    pub const fn from_static(kind: &'static str) -> Discriminator {
        Discriminator(Cow::Borrowed(kind))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_any_of(&self, kinds: &[Discriminator]) -> bool {
        kinds.contains(self)
    }

    /// One of the actor roles, or the generic `Actor`.
    pub fn is_actor(&self) -> bool {
        *self == Self::ACTOR || self.is_any_of(&ACTOR_TYPES)
    }

    /// A transitive activity, one that carries an `object`.
    pub fn is_activity(&self) -> bool {
        self.is_any_of(&ACTIVITY_TYPES)
    }

    pub fn is_intransitive_activity(&self) -> bool {
        self.is_any_of(&INTRANSITIVE_ACTIVITY_TYPES)
    }

    pub fn is_collection(&self) -> bool {
        self.is_any_of(&COLLECTION_TYPES)
    }

    pub fn is_link(&self) -> bool {
        self.is_any_of(&LINK_TYPES)
    }

    pub fn is_object(&self) -> bool {
        self.is_any_of(&OBJECT_TYPES)
    }
}

impl Discriminator {
    pub const OBJECT: Discriminator = Discriminator::from_static("Object");
    pub const LINK: Discriminator = Discriminator::from_static("Link");
    pub const MENTION: Discriminator = Discriminator::from_static("Mention");
    pub const ACTIVITY: Discriminator = Discriminator::from_static("Activity");
    pub const INTRANSITIVE_ACTIVITY: Discriminator =
        Discriminator::from_static("IntransitiveActivity");
    pub const ACTOR: Discriminator = Discriminator::from_static("Actor");
    pub const ITEM_COLLECTION: Discriminator = Discriminator::from_static("ItemCollection");

    pub const COLLECTION: Discriminator = Discriminator::from_static("Collection");
    pub const ORDERED_COLLECTION: Discriminator = Discriminator::from_static("OrderedCollection");
    pub const COLLECTION_PAGE: Discriminator = Discriminator::from_static("CollectionPage");
    pub const ORDERED_COLLECTION_PAGE: Discriminator =
        Discriminator::from_static("OrderedCollectionPage");

    pub const APPLICATION: Discriminator = Discriminator::from_static("Application");
    pub const GROUP: Discriminator = Discriminator::from_static("Group");
    pub const ORGANIZATION: Discriminator = Discriminator::from_static("Organization");
    pub const PERSON: Discriminator = Discriminator::from_static("Person");
    pub const SERVICE: Discriminator = Discriminator::from_static("Service");

    pub const ARTICLE: Discriminator = Discriminator::from_static("Article");
    pub const AUDIO: Discriminator = Discriminator::from_static("Audio");
    pub const DOCUMENT: Discriminator = Discriminator::from_static("Document");
    pub const EVENT: Discriminator = Discriminator::from_static("Event");
    pub const IMAGE: Discriminator = Discriminator::from_static("Image");
    pub const NOTE: Discriminator = Discriminator::from_static("Note");
    pub const PAGE: Discriminator = Discriminator::from_static("Page");
    pub const PLACE: Discriminator = Discriminator::from_static("Place");
    pub const PROFILE: Discriminator = Discriminator::from_static("Profile");
    pub const RELATIONSHIP: Discriminator = Discriminator::from_static("Relationship");
    pub const TOMBSTONE: Discriminator = Discriminator::from_static("Tombstone");
    pub const VIDEO: Discriminator = Discriminator::from_static("Video");

    pub const ACCEPT: Discriminator = Discriminator::from_static("Accept");
    pub const ADD: Discriminator = Discriminator::from_static("Add");
    pub const ANNOUNCE: Discriminator = Discriminator::from_static("Announce");
    pub const ARRIVE: Discriminator = Discriminator::from_static("Arrive");
    pub const BLOCK: Discriminator = Discriminator::from_static("Block");
    pub const CREATE: Discriminator = Discriminator::from_static("Create");
    pub const DELETE: Discriminator = Discriminator::from_static("Delete");
    pub const DISLIKE: Discriminator = Discriminator::from_static("Dislike");
    pub const FLAG: Discriminator = Discriminator::from_static("Flag");
    pub const FOLLOW: Discriminator = Discriminator::from_static("Follow");
    pub const IGNORE: Discriminator = Discriminator::from_static("Ignore");
    pub const INVITE: Discriminator = Discriminator::from_static("Invite");
    pub const JOIN: Discriminator = Discriminator::from_static("Join");
    pub const LEAVE: Discriminator = Discriminator::from_static("Leave");
    pub const LIKE: Discriminator = Discriminator::from_static("Like");
    pub const LISTEN: Discriminator = Discriminator::from_static("Listen");
    pub const MOVE: Discriminator = Discriminator::from_static("Move");
    pub const OFFER: Discriminator = Discriminator::from_static("Offer");
    pub const QUESTION: Discriminator = Discriminator::from_static("Question");
    pub const REJECT: Discriminator = Discriminator::from_static("Reject");
    pub const READ: Discriminator = Discriminator::from_static("Read");
    pub const REMOVE: Discriminator = Discriminator::from_static("Remove");
    pub const TENTATIVE_REJECT: Discriminator = Discriminator::from_static("TentativeReject");
    pub const TENTATIVE_ACCEPT: Discriminator = Discriminator::from_static("TentativeAccept");
    pub const TRAVEL: Discriminator = Discriminator::from_static("Travel");
    pub const UNDO: Discriminator = Discriminator::from_static("Undo");
    pub const UPDATE: Discriminator = Discriminator::from_static("Update");
    pub const VIEW: Discriminator = Discriminator::from_static("View");
}

pub const ACTOR_TYPES: [Discriminator; 5] = [
    Discriminator::APPLICATION,
    Discriminator::GROUP,
    Discriminator::ORGANIZATION,
    Discriminator::PERSON,
    Discriminator::SERVICE,
];

pub const ACTIVITY_TYPES: [Discriminator; 26] = [
    Discriminator::ACTIVITY,
    Discriminator::ACCEPT,
    Discriminator::ADD,
    Discriminator::ANNOUNCE,
    Discriminator::BLOCK,
    Discriminator::CREATE,
    Discriminator::DELETE,
    Discriminator::DISLIKE,
    Discriminator::FLAG,
    Discriminator::FOLLOW,
    Discriminator::IGNORE,
    Discriminator::INVITE,
    Discriminator::JOIN,
    Discriminator::LEAVE,
    Discriminator::LIKE,
    Discriminator::LISTEN,
    Discriminator::MOVE,
    Discriminator::OFFER,
    Discriminator::REJECT,
    Discriminator::READ,
    Discriminator::REMOVE,
    Discriminator::TENTATIVE_REJECT,
    Discriminator::TENTATIVE_ACCEPT,
    Discriminator::UNDO,
    Discriminator::UPDATE,
    Discriminator::VIEW,
];

pub const INTRANSITIVE_ACTIVITY_TYPES: [Discriminator; 4] = [
    Discriminator::INTRANSITIVE_ACTIVITY,
    Discriminator::ARRIVE,
    Discriminator::QUESTION,
    Discriminator::TRAVEL,
];

pub const OBJECT_TYPES: [Discriminator; 13] = [
    Discriminator::OBJECT,
    Discriminator::ARTICLE,
    Discriminator::AUDIO,
    Discriminator::DOCUMENT,
    Discriminator::EVENT,
    Discriminator::IMAGE,
    Discriminator::NOTE,
    Discriminator::PAGE,
    Discriminator::PLACE,
    Discriminator::PROFILE,
    Discriminator::RELATIONSHIP,
    Discriminator::TOMBSTONE,
    Discriminator::VIDEO,
];

pub const LINK_TYPES: [Discriminator; 2] = [Discriminator::LINK, Discriminator::MENTION];

pub const COLLECTION_TYPES: [Discriminator; 5] = [
    Discriminator::ITEM_COLLECTION,
    Discriminator::COLLECTION,
    Discriminator::ORDERED_COLLECTION,
    Discriminator::COLLECTION_PAGE,
    Discriminator::ORDERED_COLLECTION_PAGE,
];

impl From<&str> for Discriminator {
    fn from(value: &str) -> Self {
        Discriminator::new(value)
    }
}

impl From<String> for Discriminator {
    fn from(value: String) -> Self {
        Discriminator(Cow::Owned(value))
    }
}

impl Borrow<str> for Discriminator {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Discriminator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Discriminator {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Discriminator {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
