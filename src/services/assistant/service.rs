use std::sync::Arc;

use crate::adapters::ReqwestTransport;
use crate::domain::{
    check_required, Callback, Credentials, CustomData, HttpMethod, Operation, Result,
    ServiceClient, ServiceError,
};
use crate::ports::TransportPort;

use super::models::{MessageRequest, MessageResponse, SessionResponse};

const SERVICE_NAME: &str = "conversation";
const SERVICE_VERSION: &str = "V2";
const DEFAULT_URL: &str = "https://gateway.cognia.cloud/assistant/api";

/// Client for the Assistant V2 API.
///
/// Every operation submits one request and completes through its callback,
/// exactly once, asynchronously. Operations issued concurrently on one
/// client may complete in any order.
pub struct AssistantService {
    client: ServiceClient,
}

impl AssistantService {
    /// Creates a client with the default reqwest transport.
    ///
    /// `version_date` selects the API behaviour snapshot, `yyyy-mm-dd`.
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

    /// Create a session.
    ///
    /// A session maintains conversation state between message calls; pass
    /// the returned `session_id` to `message` and `delete_session`.
    pub fn create_session(
        &self,
        callback: Callback<SessionResponse>,
        assistant_id: &str,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        check_required(&[("assistant_id", assistant_id)])?;

        self.client.execute(
            Operation {
                id: "CreateSession",
                method: HttpMethod::Post,
                path: format!("/v2/assistants/{}/sessions", assistant_id),
                body: None,
            },
            callback,
            custom_data,
        )
    }

    /// Delete a session explicitly before it times out.
    pub fn delete_session(
        &self,
        callback: Callback<serde_json::Value>,
        assistant_id: &str,
        session_id: &str,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        check_required(&[("assistant_id", assistant_id), ("session_id", session_id)])?;

        self.client.execute(
            Operation {
                id: "DeleteSession",
                method: HttpMethod::Delete,
                path: format!("/v2/assistants/{}/sessions/{}", assistant_id, session_id),
                body: None,
            },
            callback,
            custom_data,
        )
    }

    /// Send user input to the assistant and receive its response.
    pub fn message(
        &self,
        callback: Callback<MessageResponse>,
        assistant_id: &str,
        session_id: &str,
        request: Option<&MessageRequest>,
        custom_data: Option<CustomData>,
    ) -> Result<bool> {
        check_required(&[("assistant_id", assistant_id), ("session_id", session_id)])?;

        let body = match request {
            Some(request) => Some(
                serde_json::to_vec(request)
                    .map_err(|e| ServiceError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        self.client.execute(
            Operation {
                id: "Message",
                method: HttpMethod::Post,
                path: format!(
                    "/v2/assistants/{}/sessions/{}/message",
                    assistant_id, session_id
                ),
                body,
            },
            callback,
            custom_data,
        )
    }
}
