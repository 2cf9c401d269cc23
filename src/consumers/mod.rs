pub mod sync_events;

pub use sync_events::{process_message, SyncEventConsumer};
