//! Downstream synchronization dispatcher seam.
//!
//! The consumer decodes and routes messages; applying a sync event to the
//! target store is the dispatcher's job and lives behind this trait. Each
//! operation is expected to be idempotent at the data-store level, since
//! the broker only guarantees at-least-once delivery.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::events::{
    ProductAssociationOp, ProductWarningSentenceSyncEvent, UserSyncEvent, WarningSentenceOp,
    WarningSentenceSyncEvent,
};

/// Failure applying a sync event to the target store.
#[derive(Debug, Error)]
#[error("sync failed: {0}")]
pub struct SyncError(String);

impl SyncError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Applies synchronization events to the target data store.
///
/// One instance is owned by the consume loop for its whole lifetime and
/// invoked once per successfully decoded message.
#[async_trait]
pub trait SyncDispatcher: Send + Sync {
    async fn sync_warning_sentence(
        &self,
        op: WarningSentenceOp,
        event: &WarningSentenceSyncEvent,
    ) -> Result<(), SyncError>;

    async fn sync_product_association(
        &self,
        op: ProductAssociationOp,
        event: &ProductWarningSentenceSyncEvent,
    ) -> Result<(), SyncError>;

    async fn sync_user(&self, event: &UserSyncEvent) -> Result<(), SyncError>;
}

/// Dispatcher that logs each event instead of touching a target store.
///
/// Used for dry runs and local development; the store-backed dispatcher
/// lives with the store integration, outside this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDispatcher;

#[async_trait]
impl SyncDispatcher for LoggingDispatcher {
    async fn sync_warning_sentence(
        &self,
        op: WarningSentenceOp,
        event: &WarningSentenceSyncEvent,
    ) -> Result<(), SyncError> {
        info!(
            op = ?op,
            warning_sentence_id = event.warning_sentence_id,
            "Synchronizing warning sentence"
        );
        Ok(())
    }

    async fn sync_product_association(
        &self,
        op: ProductAssociationOp,
        event: &ProductWarningSentenceSyncEvent,
    ) -> Result<(), SyncError> {
        info!(
            op = ?op,
            product_id = event.product_id,
            warning_sentence_id = event.warning_sentence_id,
            "Synchronizing product association"
        );
        Ok(())
    }

    async fn sync_user(&self, event: &UserSyncEvent) -> Result<(), SyncError> {
        info!(user_id = event.user_id, "Synchronizing user");
        Ok(())
    }
}
