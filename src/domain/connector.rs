use std::sync::Arc;

use url::Url;

use crate::ports::{ConnectorPort, TransportPort};

use super::models::{RawResponse, RequestDescriptor, WireRequest};

/// A connector bound to one fully-qualified endpoint URL.
///
/// Read-only once built; a single connector may serve concurrently in-flight
/// submissions, each owning its own descriptor and raw response.
pub struct RestConnector {
    url: Url,
    authorization: String,
    transport: Arc<dyn TransportPort>,
}

impl RestConnector {
    pub(crate) fn new(url: Url, authorization: String, transport: Arc<dyn TransportPort>) -> Self {
        Self {
            url,
            authorization,
            transport,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ConnectorPort for RestConnector {
    fn submit(&self, descriptor: RequestDescriptor) -> bool {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                log::error!("submission rejected: no async runtime available");
                return false;
            }
        };

        let RequestDescriptor {
            request_id,
            method,
            query,
            mut headers,
            body,
            on_response,
        } = descriptor;

        let mut url = self.url.clone();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &query {
                pairs.append_pair(name, value);
            }
        }

        headers
            .entry("Authorization".to_string())
            .or_insert_with(|| self.authorization.clone());

        let wire = WireRequest {
            request_id,
            method,
            url,
            headers,
            body,
        };
        let transport = self.transport.clone();

        handle.spawn(async move {
            log::debug!("request {} {} {}", request_id, wire.method.as_str(), wire.url);
            let raw = match transport.perform(wire).await {
                Ok(raw) => raw,
                Err(error) => {
                    log::debug!("request {} failed: {}", request_id, error);
                    RawResponse::failure(&error)
                }
            };
            on_response(raw);
        });

        true
    }
}
