//! Kafka consumer for sync events.
//!
//! Pulls one message at a time from the sync topics, routes it by topic
//! name, decodes the payload, and invokes the dispatcher. Malformed
//! messages and downstream sync failures are logged and skipped; only
//! setup-time Kafka errors terminate the loop.

use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::ClientConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::KafkaConfig;
use crate::error::ConsumerError;
use crate::events::{
    decode, ProductWarningSentenceSyncEvent, UserSyncEvent, WarningSentenceSyncEvent,
};
use crate::routing::{topics, Route, TopicRouter};
use crate::services::dispatcher::SyncDispatcher;

/// Route and dispatch a single message.
///
/// All-or-nothing per message: on any decode failure no dispatcher call is
/// made. Messages on topics outside the routed set are skipped with no
/// action. Pure apart from the dispatcher call itself.
pub async fn process_message(
    router: &TopicRouter,
    dispatcher: &dyn SyncDispatcher,
    topic: &str,
    payload: &[u8],
) -> Result<(), ConsumerError> {
    let Some(route) = router.route(topic) else {
        debug!(topic = %topic, "No handler for topic, skipping message");
        return Ok(());
    };

    match route {
        Route::WarningSentence(op) => {
            let event: WarningSentenceSyncEvent = decode(payload)?;
            dispatcher.sync_warning_sentence(op, &event).await?;
        }
        Route::ProductAssociation(op) => {
            let event: ProductWarningSentenceSyncEvent = decode(payload)?;
            dispatcher.sync_product_association(op, &event).await?;
        }
        Route::User => {
            let event: UserSyncEvent = decode(payload)?;
            dispatcher.sync_user(&event).await?;
        }
    }

    Ok(())
}

/// The consume loop: owns the subscription for its whole lifetime.
pub struct SyncEventConsumer {
    consumer: StreamConsumer,
    router: TopicRouter,
    dispatcher: Arc<dyn SyncDispatcher>,
    shutdown_rx: watch::Receiver<bool>,
}

impl SyncEventConsumer {
    /// Create the Kafka consumer and subscribe to the sync topics.
    pub fn new(
        config: &KafkaConfig,
        dispatcher: Arc<dyn SyncDispatcher>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Result<Self, ConsumerError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "latest")
            .set("session.timeout.ms", "30000")
            .set("enable.partition.eof", "false")
            .create()?;

        consumer.subscribe(&topics::SUBSCRIBED)?;

        info!(
            brokers = %config.brokers,
            group_id = %config.group_id,
            "Subscribed to sync topics"
        );

        Ok(Self {
            consumer,
            router: TopicRouter,
            dispatcher,
            shutdown_rx,
        })
    }

    /// Run the consume loop until shutdown is signaled.
    ///
    /// Blocks on the next message and the shutdown signal, whichever comes
    /// first; the signal is only observed at this wait boundary, never
    /// mid-dispatch, so no message is left partially processed. Returns
    /// `Ok(())` on a signaled shutdown. The subscription is released when
    /// the consumer is dropped on return.
    pub async fn run(mut self) -> Result<(), ConsumerError> {
        info!("Waiting for sync requests");

        loop {
            let received = tokio::select! {
                changed = self.shutdown_rx.changed() => {
                    // A dropped sender counts as shutdown.
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        info!("Shutdown signal received, stopping sync consumer");
                        break;
                    }
                    continue;
                }
                received = self.consumer.recv() => received,
            };

            match received {
                Ok(msg) => {
                    let topic = msg.topic().to_string();
                    info!(topic = %topic, "Received sync message");

                    let payload = msg.payload().unwrap_or_default();
                    if let Err(e) =
                        process_message(&self.router, self.dispatcher.as_ref(), &topic, payload)
                            .await
                    {
                        // Per-message failures are never fatal.
                        warn!(topic = %topic, error = %e, "Failed to process sync message");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Kafka consume error");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }

        info!("Sync consumer stopped");
        Ok(())
    }
}
