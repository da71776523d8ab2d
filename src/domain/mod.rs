pub mod adapter;
pub mod connector;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod service;

pub use connector::RestConnector;
pub use errors::*;
pub use models::*;
pub use resolver::ConnectorResolver;
pub use service::{Operation, ServiceClient};

pub(crate) use service::check_required;
