//! Discovery V1: environment queries and feedback events.

pub mod models;
pub mod service;

pub use models::*;
pub use service::DiscoveryService;
