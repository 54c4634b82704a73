use crate::mget::MultiGetService;
use crate::transport::{Transport, TransportRequest, TransportResponse};
use crate::Result;
use std::sync::Arc;

/// Handle to a document store. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Client {
    pub(crate) transport: Arc<dyn Transport>,
}

impl Client {
    pub fn builder() -> super::ClientBuilder {
        super::ClientBuilder::new()
    }

    /// Wrap an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Start a batched document lookup bound to this client.
    pub fn multi_get(&self) -> MultiGetService<'_> {
        MultiGetService::new(self)
    }

    pub(crate) async fn perform(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.transport.perform(request).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
