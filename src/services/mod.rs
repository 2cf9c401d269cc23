pub mod dispatcher;

pub use dispatcher::{LoggingDispatcher, SyncDispatcher, SyncError};
