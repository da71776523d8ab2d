use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::ports::{ConnectorPort, TransportPort};

use super::adapter::response_handler;
use super::errors::{Result, ServiceError};
use super::models::{
    Callback, Credentials, CustomData, HttpMethod, RequestDescriptor, CUSTOM_REQUEST_HEADERS,
    SDK_ANALYTICS_HEADER,
};
use super::resolver::ConnectorResolver;

/// One remote endpoint, described declaratively by the per-service operation
/// methods: operation id, verb, path with parameters already substituted,
/// and an optional pre-serialized JSON body.
pub struct Operation {
    pub id: &'static str,
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

/// Shared request pipeline for every service client.
///
/// `execute` stamps the analytics header and `version` query parameter,
/// merges caller-supplied custom headers, resolves a connector and submits
/// the descriptor. Resolution failure returns `Ok(false)` and the callback
/// never fires; an accepted submission completes asynchronously through the
/// response adapter.
pub struct ServiceClient {
    service_name: &'static str,
    service_version: &'static str,
    version_date: String,
    credentials: Credentials,
    resolver: ConnectorResolver,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .field("version_date", &self.version_date)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl ServiceClient {
    pub fn new(
        service_name: &'static str,
        service_version: &'static str,
        default_url: &'static str,
        version_date: &str,
        credentials: Credentials,
        transport: Arc<dyn TransportPort>,
    ) -> Result<Self> {
        if version_date.is_empty() {
            return Err(ServiceError::MissingArgument("version_date"));
        }
        if !credentials.has_auth_material() {
            return Err(ServiceError::InvalidCredentials(format!(
                "{} requires an api key, a username and password, or a bearer token",
                service_name
            )));
        }

        Ok(Self {
            service_name,
            service_version,
            version_date: version_date.to_string(),
            credentials,
            resolver: ConnectorResolver::new(default_url, transport),
        })
    }

    /// Replaces the credentials used by subsequent operations. In-flight
    /// calls keep the connector they were resolved with.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    pub fn execute<T>(
        &self,
        operation: Operation,
        callback: Callback<T>,
        custom_data: Option<CustomData>,
    ) -> Result<bool>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let custom_data = custom_data.unwrap_or_default();

        let mut headers = HashMap::new();
        if let Some(Value::Object(extra)) = custom_data.get(CUSTOM_REQUEST_HEADERS) {
            for (name, value) in extra {
                if let Value::String(value) = value {
                    headers.insert(name.clone(), value.clone());
                }
            }
        }
        headers.insert(
            SDK_ANALYTICS_HEADER.to_string(),
            format!(
                "service_name={};service_version={};operation_id={}",
                self.service_name, self.service_version, operation.id
            ),
        );
        if operation.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            headers.insert("Accept".to_string(), "application/json".to_string());
        }

        let mut query = HashMap::new();
        query.insert("version".to_string(), self.version_date.clone());

        let descriptor = RequestDescriptor {
            request_id: Uuid::new_v4(),
            method: operation.method,
            query,
            headers,
            body: operation.body,
            on_response: response_handler(callback, custom_data),
        };

        let connector = match self.resolver.resolve(&self.credentials, &operation.path) {
            Some(connector) => connector,
            None => return Ok(false),
        };

        Ok(connector.submit(descriptor))
    }
}

/// Fails fast with `MissingArgument` on the first empty required parameter,
/// before any resolver or transport side effect.
pub(crate) fn check_required(params: &[(&'static str, &str)]) -> Result<()> {
    for &(name, value) in params {
        if value.is_empty() {
            return Err(ServiceError::MissingArgument(name));
        }
    }
    Ok(())
}
