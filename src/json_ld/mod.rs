//! Just enough JSON-LD
//!
//! Documents are read as plain JSON with the ActivityStreams vocabulary
//! assumed. Only the outermost document written is decorated with a
//! `@context`.

mod context;
mod vocab;

pub use self::context::{ActivityStreamsContext, ContextProvider, NoContext};
pub use self::vocab::{
    ACTIVITY_STREAMS_NS, ACTIVITY_TYPES, ACTOR_TYPES, COLLECTION_TYPES, Discriminator,
    INTRANSITIVE_ACTIVITY_TYPES, LINK_TYPES, OBJECT_TYPES, PUBLIC_COLLECTION, SECURITY_V1_NS,
};
