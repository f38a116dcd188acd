use pem_rfc7468::LineEnding;

use crate::codec::{Fields, WriteFields, Writer};
use crate::error::{Error, Result};
use crate::json_ld::Discriminator;

use super::{Id, Item, ItemCollection, NaturalLanguageValues, Object, OrderedCollection};

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// An entity that can perform activities. The role (`Person`, `Service`,
/// ...) is carried by `kind`.
///
/// See <https://www.w3.org/TR/activitypub/#actor-objects>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actor {
    pub base: Object,
    pub inbox: Option<Item>,
    pub outbox: Option<Item>,
    pub following: Option<Item>,
    pub followers: Option<Item>,
    pub liked: Option<Item>,
    pub preferred_username: NaturalLanguageValues,
    pub endpoints: Option<Endpoints>,
    pub streams: ItemCollection,
    pub public_key: Option<PublicKey>,
}

/// Server-wide endpoints that may be useful to an actor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoints {
    pub upload_media: Option<Item>,
    pub oauth_authorization_endpoint: Option<Item>,
    pub oauth_token_endpoint: Option<Item>,
    pub provide_client_key: Option<Item>,
    pub sign_client_key: Option<Item>,
    pub shared_inbox: Option<Item>,
}

/// The key used to verify HTTP signatures made on behalf of an actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicKey {
    pub id: Id,
    pub owner: Id,
    pub public_key_pem: String,
}

impl_deref_base!(Actor => Object);

impl Actor {
    /// A role outside the actor types becomes the generic `Actor`. The
    /// inbox, outbox and liked collections are created under `id`.
    pub fn new(id: impl Into<Id>, role: Discriminator) -> Actor {
        let id = id.into();
        let kind = if role.is_actor() {
            role
        } else {
            Discriminator::ACTOR
        };
        Actor {
            inbox: Some(OrderedCollection::new(id.join("inbox")).into()),
            outbox: Some(OrderedCollection::new(id.join("outbox")).into()),
            liked: Some(OrderedCollection::new(id.join("liked")).into()),
            ..Actor::from_base(Object::new(id, kind))
        }
    }

    pub fn application(id: impl Into<Id>) -> Actor {
        Actor::new(id, Discriminator::APPLICATION)
    }

    pub fn group(id: impl Into<Id>) -> Actor {
        Actor::new(id, Discriminator::GROUP)
    }

    pub fn organization(id: impl Into<Id>) -> Actor {
        Actor::new(id, Discriminator::ORGANIZATION)
    }

    pub fn person(id: impl Into<Id>) -> Actor {
        Actor::new(id, Discriminator::PERSON)
    }

    pub fn service(id: impl Into<Id>) -> Actor {
        Actor::new(id, Discriminator::SERVICE)
    }

    pub(crate) fn from_base(base: Object) -> Actor {
        Actor {
            base,
            ..Default::default()
        }
    }

    /// The shared inbox advertised in `endpoints`, if any.
    pub fn shared_inbox(&self) -> Option<&Item> {
        self.endpoints.as_ref()?.shared_inbox.as_ref()
    }

    pub fn decode(f: &Fields<'_>) -> Result<Actor> {
        let endpoints = match f.record("endpoints") {
            Some(endpoints) => Some(Endpoints::decode(&endpoints)?),
            None => None,
        };
        let public_key = match f.record("publicKey") {
            Some(key) => Some(PublicKey::decode(&key)?),
            None => None,
        };
        Ok(Actor {
            base: Object::decode(f)?,
            inbox: f.item("inbox")?,
            outbox: f.item("outbox")?,
            following: f.item("following")?,
            followers: f.item("followers")?,
            liked: f.item("liked")?,
            preferred_username: f.natural_language("preferredUsername"),
            endpoints,
            streams: f.items("streams")?,
            public_key,
        })
    }
}

impl WriteFields for Actor {
    fn write_fields(&self, w: &mut Writer) {
        self.base.write_fields(w);
        w.item("inbox", self.inbox.as_ref());
        w.item("outbox", self.outbox.as_ref());
        w.item("following", self.following.as_ref());
        w.item("followers", self.followers.as_ref());
        w.item("liked", self.liked.as_ref());
        w.natural_language("preferredUsername", &self.preferred_username);
        if let Some(endpoints) = &self.endpoints {
            w.record("endpoints", |w| endpoints.write_fields(w));
        }
        w.items("streams", &self.streams);
        if let Some(key) = &self.public_key {
            w.record("publicKey", |w| key.write_fields(w));
        }
    }
}

impl Endpoints {
    pub fn decode(f: &Fields<'_>) -> Result<Endpoints> {
        Ok(Endpoints {
            upload_media: f.item("uploadMedia")?,
            oauth_authorization_endpoint: f.item("oauthAuthorizationEndpoint")?,
            oauth_token_endpoint: f.item("oauthTokenEndpoint")?,
            provide_client_key: f.item("provideClientKey")?,
            sign_client_key: f.item("signClientKey")?,
            shared_inbox: f.item("sharedInbox")?,
        })
    }
}

impl WriteFields for Endpoints {
    fn write_fields(&self, w: &mut Writer) {
        w.item("uploadMedia", self.upload_media.as_ref());
        w.item(
            "oauthAuthorizationEndpoint",
            self.oauth_authorization_endpoint.as_ref(),
        );
        w.item("oauthTokenEndpoint", self.oauth_token_endpoint.as_ref());
        w.item("provideClientKey", self.provide_client_key.as_ref());
        w.item("signClientKey", self.sign_client_key.as_ref());
        w.item("sharedInbox", self.shared_inbox.as_ref());
    }
}

impl PublicKey {
    /// Wraps a DER encoded SubjectPublicKeyInfo in PEM.
    pub fn from_der(id: impl Into<Id>, owner: impl Into<Id>, der: &[u8]) -> Result<PublicKey> {
        let public_key_pem = pem_rfc7468::encode_string(PUBLIC_KEY_LABEL, LineEnding::LF, der)?;
        Ok(PublicKey {
            id: id.into(),
            owner: owner.into(),
            public_key_pem,
        })
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        let (label, der) = pem_rfc7468::decode_vec(self.public_key_pem.as_bytes())?;
        if label != PUBLIC_KEY_LABEL {
            return Err(Error::UnexpectedKeyLabel(label.to_string()));
        }
        Ok(der)
    }

    /// All three properties are mandatory.
    pub fn decode(f: &Fields<'_>) -> Result<PublicKey> {
        let required = |key: &'static str| {
            f.get_str(key)
                .filter(|value| !value.is_empty())
                .ok_or(Error::PublicKeyFieldMissing(key))
        };
        Ok(PublicKey {
            id: Id::from(required("id")?),
            owner: Id::from(required("owner")?),
            public_key_pem: required("publicKeyPem")?.to_owned(),
        })
    }
}

impl WriteFields for PublicKey {
    fn write_fields(&self, w: &mut Writer) {
        w.id(&self.id);
        w.string("owner", self.owner.as_str());
        w.string("publicKeyPem", &self.public_key_pem);
    }
}
