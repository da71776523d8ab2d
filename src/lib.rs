//! Client SDK for the Cognia cloud platform (Assistant V2, Discovery V1).
//!
//! Each operation runs a one-shot pipeline: credentials resolve into a
//! connector bound to a fully-qualified endpoint URL, the operation submits
//! a request descriptor, and on completion the response adapter maps the raw
//! transport outcome into a typed result and fires the caller's callback
//! exactly once. Argument validation fails fast before any network I/O;
//! everything after submission is delivered through the callback.
//!
//! Operations must be invoked from within a tokio runtime context, since
//! the exchange is spawned onto the ambient runtime and the calling thread
//! never blocks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    AuthMethod, Callback, Credentials, CustomData, DetailedResponse, HttpMethod, RawResponse,
    RequestDescriptor, Result, ServiceError, WireRequest,
};
pub use services::assistant::AssistantService;
pub use services::discovery::DiscoveryService;
