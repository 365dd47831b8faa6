use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use thiserror::Error as ThisError;

/// Generic JSON serialization infrastructure.
///
/// This module is format-level only:
/// - No registry-layer constants or policy limits are defined here.
/// - Callers that need bounded decode must pass explicit limits.
/// - Engine-specific decode policy belongs in subsystem wrappers (`codec`).

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),

    #[error("deserialize size limit exceeded: {len} bytes (limit {max_bytes})")]
    DeserializeSizeLimitExceeded { len: usize, max_bytes: usize },
}

///
/// SerializeErrorKind
///
/// Stable error-kind taxonomy for serializer failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SerializeErrorKind {
    Serialize,
    Deserialize,
    DeserializeSizeLimitExceeded,
}

impl SerializeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serialize => "serialize",
            Self::Deserialize => "deserialize",
            Self::DeserializeSizeLimitExceeded => "deserialize_size_limit_exceeded",
        }
    }
}

impl fmt::Display for SerializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SerializeError {
    /// Return a stable error kind independent of backend error-message text.
    #[must_use]
    pub const fn kind(&self) -> SerializeErrorKind {
        match self {
            Self::Serialize(_) => SerializeErrorKind::Serialize,
            Self::Deserialize(_) => SerializeErrorKind::Deserialize,
            Self::DeserializeSizeLimitExceeded { .. } => {
                SerializeErrorKind::DeserializeSizeLimitExceeded
            }
        }
    }
}

/// Serialize a value to JSON bytes.
pub fn serialize<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    serde_json::to_vec(ty).map_err(|err| SerializeError::Serialize(err.to_string()))
}

/// Deserialize a value produced by [`serialize`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|err| SerializeError::Deserialize(err.to_string()))
}

/// Deserialize a value produced by [`serialize`], with an explicit size limit.
///
/// Size limits are caller policy, not serialization-format policy.
pub fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > max_bytes {
        return Err(SerializeError::DeserializeSizeLimitExceeded {
            len: bytes.len(),
            max_bytes,
        });
    }

    deserialize(bytes)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Probe {
        name: String,
        count: u64,
    }

    #[test]
    fn round_trip_preserves_value() {
        let probe = Probe {
            name: "index".to_string(),
            count: 7,
        };

        let bytes = serialize(&probe).expect("serialize");
        let decoded: Probe = deserialize(&bytes).expect("deserialize");

        assert_eq!(decoded, probe);
    }

    #[test]
    fn malformed_bytes_report_deserialize_kind() {
        let err = deserialize::<Probe>(b"not json").unwrap_err();
        assert_eq!(err.kind(), SerializeErrorKind::Deserialize);
    }

    #[test]
    fn bounded_decode_rejects_oversized_input() {
        let probe = Probe {
            name: "x".repeat(64),
            count: 0,
        };
        let bytes = serialize(&probe).expect("serialize");

        let err = deserialize_bounded::<Probe>(&bytes, 8).unwrap_err();
        assert_eq!(
            err.kind(),
            SerializeErrorKind::DeserializeSizeLimitExceeded,
            "expected size-limit rejection, got: {err}"
        );
    }

    #[test]
    fn bounded_decode_accepts_input_at_limit() {
        let probe = Probe {
            name: "y".to_string(),
            count: 1,
        };
        let bytes = serialize(&probe).expect("serialize");

        let decoded: Probe = deserialize_bounded(&bytes, bytes.len()).expect("deserialize");
        assert_eq!(decoded, probe);
    }
}
