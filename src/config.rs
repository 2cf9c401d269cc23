//! Environment-driven configuration for the sync consumer.

/// Kafka connection settings.
///
/// Topic names are fixed (see [`crate::routing::topics`]); only the broker
/// list and consumer group are configurable.
#[derive(Debug, Clone)]
pub struct KafkaConfig {
    /// Broker addresses, comma-separated.
    pub brokers: String,
    /// Consumer group ID under which offsets are tracked.
    pub group_id: String,
}

impl KafkaConfig {
    /// Load configuration from environment variables, with local defaults.
    pub fn from_env() -> Self {
        Self {
            brokers: std::env::var("KAFKA_BROKERS")
                .unwrap_or_else(|_| "localhost:9092".to_string()),
            group_id: std::env::var("KAFKA_GROUP_ID")
                .unwrap_or_else(|_| "sync_group".to_string()),
        }
    }
}
