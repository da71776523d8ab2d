use crate::domain::{RawResponse, Result, WireRequest};
use async_trait::async_trait;

/// Port for one outbound HTTP exchange.
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Performs the exchange and returns the raw outcome.
    ///
    /// Returns `Err` only for transport-level failures; a completed exchange
    /// with a non-2xx status is an `Ok` response with its success flag
    /// cleared and an error description set.
    async fn perform(&self, request: WireRequest) -> Result<RawResponse>;
}
