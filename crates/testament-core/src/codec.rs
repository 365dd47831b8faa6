use crate::{
    MAX_INDEX_BYTES, MAX_RECORD_BYTES,
    serialize::{SerializeError, deserialize_bounded, serialize},
    types::{Address, Payload, WillId, WillRecord, WillStatus},
};
use serde::{Deserialize, Serialize};

///
/// Record codec
///
/// Wire-format policy over the generic serialization helpers:
/// - the record envelope carries exactly the ledger schema
///   (`data`, `timestamp`, `owner`, `beneficiary`, `status`)
/// - the record id is the storage key, never part of the envelope
/// - decode is bounded by the crate payload limits
///
/// A missing `status` decodes as draft; old writers omitted the field.
///

///
/// RecordEnvelope
///

#[derive(Deserialize, Serialize)]
struct RecordEnvelope {
    data: Payload,
    timestamp: u64,
    owner: Address,
    beneficiary: Address,
    #[serde(default)]
    status: WillStatus,
}

/// Encode one record into its ledger envelope.
pub fn encode_record(record: &WillRecord) -> Result<Vec<u8>, SerializeError> {
    let envelope = RecordEnvelope {
        data: record.payload.clone(),
        timestamp: record.created_at,
        owner: record.owner.clone(),
        beneficiary: record.beneficiary.clone(),
        status: record.status,
    };

    serialize(&envelope)
}

/// Decode one record envelope, rebinding it to the id it was stored under.
pub fn decode_record(id: WillId, bytes: &[u8]) -> Result<WillRecord, SerializeError> {
    let envelope: RecordEnvelope = deserialize_bounded(bytes, MAX_RECORD_BYTES)?;

    Ok(WillRecord {
        id,
        payload: envelope.data,
        created_at: envelope.timestamp,
        owner: envelope.owner,
        beneficiary: envelope.beneficiary,
        status: envelope.status,
    })
}

/// Encode the id index as a flat JSON array.
pub fn encode_index(ids: &[WillId]) -> Result<Vec<u8>, SerializeError> {
    serialize(&ids)
}

/// Decode the id index.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<WillId>, SerializeError> {
    deserialize_bounded(bytes, MAX_INDEX_BYTES)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::SerializeErrorKind;
    use proptest::prelude::*;

    fn record(status: WillStatus) -> WillRecord {
        WillRecord {
            id: WillId::from("w1"),
            payload: Payload::from("FHE-eyJhc3NldHMiOiJhbGwifQ=="),
            created_at: 1_700_000_000,
            owner: Address::from("0xA"),
            beneficiary: Address::from("0xB"),
            status,
        }
    }

    #[test]
    fn record_round_trip() {
        let original = record(WillStatus::Active);
        let bytes = encode_record(&original).expect("encode");
        let decoded = decode_record(original.id.clone(), &bytes).expect("decode");

        assert_eq!(decoded, original);
    }

    #[test]
    fn envelope_matches_ledger_schema() {
        let bytes = encode_record(&record(WillStatus::Draft)).expect("encode");
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["beneficiary", "data", "owner", "status", "timestamp"]
        );
        assert_eq!(object["status"], "draft");
        assert!(object.get("id").is_none(), "id must stay out of the envelope");
    }

    #[test]
    fn missing_status_decodes_as_draft() {
        let bytes = br#"{"data":"blob","timestamp":5,"owner":"0xA","beneficiary":"0xB"}"#;
        let decoded = decode_record(WillId::from("w1"), bytes).expect("decode");

        assert_eq!(decoded.status, WillStatus::Draft);
    }

    #[test]
    fn malformed_record_reports_deserialize_kind() {
        let err = decode_record(WillId::from("w1"), b"{broken").unwrap_err();
        assert_eq!(err.kind(), SerializeErrorKind::Deserialize);
    }

    #[test]
    fn index_round_trip() {
        let ids = vec![WillId::from("a"), WillId::from("b")];
        let bytes = encode_index(&ids).expect("encode");
        let decoded = decode_index(&bytes).expect("decode");

        assert_eq!(decoded, ids);
    }

    #[test]
    fn empty_index_is_a_flat_array() {
        let bytes = encode_index(&[]).expect("encode");
        assert_eq!(bytes, b"[]");
    }

    proptest! {
        #[test]
        fn record_round_trip_holds_for_all_valid_records(
            payload in ".{0,64}",
            created_at in any::<u64>(),
            owner in "0x[0-9a-fA-F]{1,40}",
            beneficiary in "0x[0-9a-fA-F]{1,40}",
            status_ix in 0_usize..4,
        ) {
            let status = [
                WillStatus::Draft,
                WillStatus::Active,
                WillStatus::Executed,
                WillStatus::Revoked,
            ][status_ix];

            let original = WillRecord {
                id: WillId::from("prop"),
                payload: Payload::from(payload),
                created_at,
                owner: Address::from(owner),
                beneficiary: Address::from(beneficiary),
                status,
            };

            let bytes = encode_record(&original).unwrap();
            let decoded = decode_record(original.id.clone(), &bytes).unwrap();

            prop_assert_eq!(decoded, original);
        }
    }
}
