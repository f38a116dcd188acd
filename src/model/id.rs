use std::fmt::{self, Display};

use url::Url;

/// The IRI identifying an object or link. Empty means anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(String);

/// How two identifiers are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Equality {
    /// Byte for byte.
    Strict,
    /// Same scheme, host, port and path, ignoring a trailing slash, the
    /// query and the fragment.
    #[default]
    Tolerant,
}

impl Id {
    pub(crate) const EMPTY: Id = Id(String::new());

    pub fn new(iri: impl Into<String>) -> Id {
        Id(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn equals(&self, other: &Id, mode: Equality) -> bool {
        match mode {
            Equality::Strict => self.0 == other.0,
            Equality::Tolerant => tolerant_eq(&self.0, &other.0),
        }
    }

    /// Appends a path segment, e.g. `inbox` to an actor IRI.
    pub fn join(&self, segment: &str) -> Id {
        Id(format!("{}/{}", self.0.trim_end_matches('/'), segment))
    }
}

fn tolerant_eq(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => {
            a.scheme() == b.scheme()
                && a.host_str() == b.host_str()
                && a.port_or_known_default() == b.port_or_known_default()
                && a.path().trim_end_matches('/') == b.path().trim_end_matches('/')
        }
        _ => strip_noise(a) == strip_noise(b),
    }
}

fn strip_noise(iri: &str) -> &str {
    let end = iri.find(['?', '#']).unwrap_or(iri.len());
    iri[..end].trim_end_matches('/')
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_owned())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id(value)
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

impl From<Id> for String {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Equality, Id};

    #[test]
    fn strict_is_exact() {
        let a = Id::from("https://example.com/users/john");
        assert!(a.equals(&Id::from("https://example.com/users/john"), Equality::Strict));
        assert!(!a.equals(&Id::from("https://example.com/users/john/"), Equality::Strict));
    }

    #[test]
    fn tolerant_ignores_noise() {
        let a = Id::from("https://example.com/users/john");
        for b in [
            "https://example.com/users/john/",
            "https://EXAMPLE.com/users/john",
            "https://example.com:443/users/john",
            "https://example.com/users/john?page=1",
            "https://example.com/users/john#main-key",
        ] {
            assert!(a.equals(&Id::from(b), Equality::Tolerant), "{b}");
        }
        assert!(!a.equals(&Id::from("http://example.com/users/john"), Equality::Tolerant));
        assert!(!a.equals(&Id::from("https://example.com/users/jane"), Equality::Tolerant));
    }

    #[test]
    fn tolerant_falls_back_for_relative_ids() {
        let a = Id::from("users/john");
        assert!(a.equals(&Id::from("users/john/#x"), Equality::Tolerant));
        assert!(!a.equals(&Id::from("users/jane"), Equality::Tolerant));
    }

    #[test]
    fn default_is_tolerant() {
        assert_eq!(Equality::default(), Equality::Tolerant);
    }

    #[test]
    fn join_segments() {
        let actor = Id::from("https://example.com/users/john/");
        assert_eq!(actor.join("inbox"), "https://example.com/users/john/inbox");
    }
}
