use thiserror::Error;

use crate::json_ld::Discriminator;

#[derive(Error, Debug)]
pub enum Error {
    /// The top level document is not a JSON object or array.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A `publicKey` record must carry `id`, `owner` and `publicKeyPem`.
    #[error("publicKey is missing required property {0}")]
    PublicKeyFieldMissing(&'static str),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("unable to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid PEM public key: {0}")]
    InvalidPem(#[from] pem_rfc7468::Error),

    #[error("unexpected PEM label {0}, expected PUBLIC KEY")]
    UnexpectedKeyLabel(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A view conversion was requested that the item's actual shape does not
/// allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to convert {from} to {to}")]
pub struct ConversionError {
    pub from: Discriminator,
    pub to: &'static str,
}

impl ConversionError {
    pub(crate) fn new(from: &Discriminator, to: &'static str) -> ConversionError {
        ConversionError {
            from: from.clone(),
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        let err = Error::PublicKeyFieldMissing("owner");
        assert_eq!(err.to_string(), "publicKey is missing required property owner");

        let err = Error::from(ConversionError::new(&Discriminator::PERSON, "Collection"));
        assert_eq!(err.to_string(), "unable to convert Person to Collection");

        let err = Error::MalformedDocument("expected a JSON object or array".into());
        assert_eq!(
            err.to_string(),
            "malformed document: expected a JSON object or array"
        );
    }
}
