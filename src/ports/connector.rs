use crate::domain::RequestDescriptor;

/// Port for submitting one request for asynchronous execution.
pub trait ConnectorPort: Send + Sync {
    /// Submits the descriptor and returns whether the submission was
    /// accepted.
    ///
    /// When accepted, the descriptor's completion handler fires exactly
    /// once, never synchronously within this call. When rejected, the
    /// handler never fires.
    fn submit(&self, descriptor: RequestDescriptor) -> bool;
}
