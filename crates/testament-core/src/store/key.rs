use crate::types::WillId;

///
/// Well-known keys
///
/// The store is flat, so the whole storage scheme is two key shapes:
/// one fixed key for the id index, and one prefixed key per record.
/// Key formatting lives here and nowhere else.
///

/// Key holding the encoded id index.
pub const INDEX_KEY: &str = "will_keys";

/// Prefix of every per-record key.
pub const RECORD_KEY_PREFIX: &str = "will_";

/// Storage key for one record.
#[must_use]
pub fn record_key(id: &WillId) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

///
/// TESTS
///
