//! Typed sync event payloads and their JSON decoding.
//!
//! Every message body on the sync topics is a JSON object with camelCase
//! field names and numeric identifiers. Decoding is pure: it performs no
//! I/O and either yields a fully populated record or a [`DecodeError`].

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Add/update/delete of a warning sentence entity.
///
/// The semantic operation is not carried in the payload; it is derived from
/// the topic the message arrived on and threaded through as
/// [`WarningSentenceOp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningSentenceSyncEvent {
    pub warning_sentence_id: i64,
}

/// Attach/detach of a warning sentence to/from a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWarningSentenceSyncEvent {
    pub product_id: i64,
    pub warning_sentence_id: i64,
}

/// Creation of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSyncEvent {
    pub user_id: i64,
}

/// Semantic operation for a warning sentence sync, derived from the topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSentenceOp {
    Add,
    Update,
    Delete,
}

/// Semantic operation for a product association sync, derived from the topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAssociationOp {
    Attach,
    Detach,
}

/// Parse a raw message body into a typed event record.
///
/// Fails if the body is not valid JSON, if a required identifier field is
/// missing, or if an identifier is not numeric. Unknown extra fields are
/// ignored.
pub fn decode<T: serde::de::DeserializeOwned>(payload: &[u8]) -> Result<T, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }
    serde_json::from_slice(payload).map_err(DecodeError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_warning_sentence_event() {
        let event: WarningSentenceSyncEvent =
            decode(br#"{"warningSentenceId": 42}"#).expect("valid payload");
        assert_eq!(event.warning_sentence_id, 42);
    }

    #[test]
    fn decodes_product_association_event_with_both_ids() {
        let event: ProductWarningSentenceSyncEvent =
            decode(br#"{"productId": 7, "warningSentenceId": 3}"#).expect("valid payload");
        assert_eq!(event.product_id, 7);
        assert_eq!(event.warning_sentence_id, 3);
    }

    #[test]
    fn large_identifiers_round_trip_exactly() {
        let id = i64::MAX;
        let json = serde_json::to_vec(&UserSyncEvent { user_id: id }).expect("serializable");
        let event: UserSyncEvent = decode(&json).expect("valid payload");
        assert_eq!(event.user_id, id);
    }

    #[test]
    fn missing_identifier_is_a_decode_error() {
        let err = decode::<WarningSentenceSyncEvent>(br#"{"text": "flammable"}"#)
            .expect_err("missing id must not decode");
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn non_numeric_identifier_is_a_decode_error() {
        assert!(decode::<UserSyncEvent>(br#"{"userId": "abc"}"#).is_err());
    }

    #[test]
    fn empty_payload_is_a_decode_error() {
        let err = decode::<UserSyncEvent>(b"").expect_err("empty payload must not decode");
        assert!(matches!(err, DecodeError::EmptyPayload));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let event: UserSyncEvent =
            decode(br#"{"userId": 1, "source": "webshop"}"#).expect("valid payload");
        assert_eq!(event.user_id, 1);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(decode::<UserSyncEvent>(b"not json").is_err());
    }
}
