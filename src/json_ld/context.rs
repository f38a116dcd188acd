use serde_json::{Value, json};

use super::vocab::{Discriminator, SECURITY_V1_NS};

/// Produces the `@context` of an outermost document.
///
/// Note - this never implements remote context fetching or term expansion.
/// Documents are read as plain JSON with the ActivityStreams vocabulary
/// assumed, per <https://www.w3.org/TR/activitystreams-core/#jsonld>.
pub trait ContextProvider: Send + Sync {
    /// Returns the context for a document of type `kind`, or `None` when the
    /// document should be written without one.
    fn context(&self, kind: &Discriminator, url: &str) -> Option<Value>;
}

/// The ActivityStreams context, extended with the security vocabulary for
/// actors so that `publicKey` is understood by Mastodon.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityStreamsContext {
    pub security: bool,
}

impl ContextProvider for ActivityStreamsContext {
    fn context(&self, kind: &Discriminator, url: &str) -> Option<Value> {
        if url.is_empty() {
            return None;
        }
        if self.security && kind.is_actor() {
            return Some(json!([url, SECURITY_V1_NS]));
        }
        Some(Value::String(url.to_owned()))
    }
}

/// Never writes a context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ContextProvider for NoContext {
    fn context(&self, _kind: &Discriminator, _url: &str) -> Option<Value> {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::json_ld::ACTIVITY_STREAMS_NS;

    #[test]
    fn actors_get_security_context() {
        let provider = ActivityStreamsContext { security: true };
        assert_eq!(
            provider.context(&Discriminator::PERSON, ACTIVITY_STREAMS_NS),
            Some(json!([
                "https://www.w3.org/ns/activitystreams",
                "https://w3id.org/security/v1"
            ]))
        );
        assert_eq!(
            provider.context(&Discriminator::NOTE, ACTIVITY_STREAMS_NS),
            Some(json!("https://www.w3.org/ns/activitystreams"))
        );
    }

    #[test]
    fn empty_url_disables_context() {
        let provider = ActivityStreamsContext::default();
        assert_eq!(provider.context(&Discriminator::NOTE, ""), None);
        assert_eq!(NoContext.context(&Discriminator::NOTE, ACTIVITY_STREAMS_NS), None);
    }
}
