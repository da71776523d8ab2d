//! Assistant V2: session-scoped conversational exchanges.

pub mod models;
pub mod service;

pub use models::*;
pub use service::AssistantService;
