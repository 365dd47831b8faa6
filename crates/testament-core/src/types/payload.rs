use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// Payload
///
/// Opaque ciphertext-like blob supplied by the owner at creation. The blob is
/// never interpreted or re-encoded here; any encoding tag (the source
/// deployment prefixes blobs with one) is part of the blob itself and is the
/// producer's concern. Immutable after creation.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(String);

impl Payload {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self(value)
    }
}
