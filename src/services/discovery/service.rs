use std::sync::Arc;

use crate::adapters::ReqwestTransport;
use crate::domain::{
    check_required, Callback, Credentials, CustomData, HttpMethod, Operation, Result,
    ServiceClient, ServiceError,
};
use crate::ports::TransportPort;

use super::models::{
    CreateEventObject, CreateEventResponse, ListEnvironmentsResponse, QueryRequest, QueryResponse,
};

const SERVICE_NAME: &str = "discovery";
const SERVICE_VERSION: &str = "V1";
const DEFAULT_URL: &str = "https://gateway.cognia.cloud/discovery/api";

/// Client for the Discovery V1 API.
pub struct DiscoveryService {
    client: ServiceClient,
}

impl DiscoveryService {
    /// Creates a client with the default reqwest transport.
    pub fn new(version_date: &str, credentials: Credentials) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(version_date, credentials, transport)
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(
        version_date: &str,
        credentials: Credentials,
        transport: Arc<dyn TransportPort>,
    ) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::new(
                SERVICE_NAME,
                SERVICE_VERSION,
                DEFAULT_URL,
                version_date,
                credentials,
                transport,
            )?,
        })
    }

    /// Replaces the service credentials for subsequent operations.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.client.set_credentials(credentials);
    }

    /// List the environments the credentials can reach.
    pub fn list_environments(
        &self,
        callback: Callback<ListEnvironmentsResponse>,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        self.client.execute(
            Operation {
                id: "ListEnvironments",
                method: HttpMethod::Get,
                path: "/v1/environments".to_string(),
                body: None,
            },
            callback,
            custom_data,
        )
    }

    /// Query a collection.
    pub fn query(
        &self,
        callback: Callback<QueryResponse>,
        environment_id: &str,
        collection_id: &str,
        request: Option<&QueryRequest>,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        check_required(&[
            ("environment_id", environment_id),
            ("collection_id", collection_id),
        ])?;

        let body = match request {
            Some(request) => Some(
                serde_json::to_vec(request)
                    .map_err(|e| ServiceError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        self.client.execute(
            Operation {
                id: "Query",
                method: HttpMethod::Post,
                path: format!(
                    "/v1/environments/{}/collections/{}/query",
                    environment_id, collection_id
                ),
                body,
            },
            callback,
            custom_data,
        )
    }

    /// Record a user event, such as a click on a query result.
    pub fn create_event(
        &self,
        callback: Callback<CreateEventResponse>,
        event: &CreateEventObject,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        check_required(&[
            ("event.data.environment_id", &event.data.environment_id),
            ("event.data.collection_id", &event.data.collection_id),
            ("event.data.document_id", &event.data.document_id),
        ])?;

        let body = serde_json::to_vec(event)
            .map_err(|e| ServiceError::Serialization(e.to_string()))?;

        self.client.execute(
            Operation {
                id: "CreateEvent",
                method: HttpMethod::Post,
                path: "/v1/events".to_string(),
                body: Some(body),
            },
            callback,
            custom_data,
        )
    }
}
