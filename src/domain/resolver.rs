use std::sync::Arc;

use url::Url;

use crate::ports::TransportPort;

use super::connector::RestConnector;
use super::models::Credentials;

/// Resolves credentials plus an endpoint path into a connector bound to the
/// fully-qualified URL.
///
/// Resolution failure is signalled by `None`, not an error, so the operation
/// can abort before any network I/O. The service default base URL is
/// substituted when the credentials carry no explicit one.
pub struct ConnectorResolver {
    default_url: &'static str,
    transport: Arc<dyn TransportPort>,
}

impl ConnectorResolver {
    pub fn new(default_url: &'static str, transport: Arc<dyn TransportPort>) -> Self {
        Self {
            default_url,
            transport,
        }
    }

    pub fn resolve(&self, credentials: &Credentials, path: &str) -> Option<RestConnector> {
        if !credentials.has_auth_material() {
            log::error!("cannot resolve a connector for {}: no usable auth material", path);
            return None;
        }

        let base = credentials.url().unwrap_or(self.default_url);
        let full = format!("{}{}", base.trim_end_matches('/'), path);
        match full.parse::<Url>() {
            Ok(url) => Some(RestConnector::new(
                url,
                credentials.authorization(),
                self.transport.clone(),
            )),
            Err(e) => {
                log::error!("invalid endpoint URL {}: {}", full, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawResponse, Result, WireRequest};
    use async_trait::async_trait;

    struct UnreachableTransport;

    #[async_trait]
    impl TransportPort for UnreachableTransport {
        async fn perform(&self, _: WireRequest) -> Result<RawResponse> {
            panic!("resolution must not touch the transport");
        }
    }

    fn resolver() -> ConnectorResolver {
        ConnectorResolver::new("https://gateway.cognia.cloud/assistant/api", Arc::new(UnreachableTransport))
    }

    #[test]
    fn missing_auth_material_resolves_to_none() {
        let credentials = Credentials::with_api_key("");
        assert!(resolver().resolve(&credentials, "/v2/assistants/a/sessions").is_none());
    }

    #[test]
    fn default_url_is_substituted() {
        let credentials = Credentials::with_api_key("key");
        let connector = resolver().resolve(&credentials, "/v2/assistants/a/sessions").unwrap();
        assert_eq!(
            connector.url().as_str(),
            "https://gateway.cognia.cloud/assistant/api/v2/assistants/a/sessions"
        );
    }

    #[test]
    fn explicit_credentials_url_overrides_default() {
        let credentials = Credentials::with_api_key("key").with_url("http://127.0.0.1:9090/");
        let connector = resolver().resolve(&credentials, "/v2/assistants/a/sessions").unwrap();
        assert_eq!(connector.url().as_str(), "http://127.0.0.1:9090/v2/assistants/a/sessions");
    }

    #[test]
    fn unparseable_url_resolves_to_none() {
        let credentials = Credentials::with_api_key("key").with_url("not a url");
        assert!(resolver().resolve(&credentials, "/v2/assistants/a/sessions").is_none());
    }
}
