//! Error types for the sync consumer.

use thiserror::Error;

use crate::services::dispatcher::SyncError;

/// Failure to parse a message body into a typed event record.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[source] serde_json::Error),
    #[error("empty message payload")]
    EmptyPayload,
}

/// Errors surfaced by the consume loop.
///
/// `Decode` and `Sync` are recovered at the per-message boundary and never
/// terminate the loop; `Kafka` is fatal only when it occurs during consumer
/// setup (transient fetch errors are logged and retried in place).
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("sync dispatch error: {0}")]
    Sync(#[from] SyncError),
}
