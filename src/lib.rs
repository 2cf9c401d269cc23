pub mod config;
pub mod consumers;
pub mod error;
pub mod events;
pub mod routing;
pub mod services;
