use async_trait::async_trait;

use crate::domain::{HttpMethod, RawResponse, Result, ServiceError, WireRequest};
use crate::ports::TransportPort;

const USER_AGENT: &str = concat!("cognia-sdk/", env!("COGNIA_SDK_VERSION"));

/// Transport adapter over a pooled `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ServiceError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TransportPort for ReqwestTransport {
    async fn perform(&self, request: WireRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(convert_method(&request.method), request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ServiceError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(format!("failed to read response body: {}", e)))?
            .to_vec();

        let success = status.is_success();
        let error = if success {
            None
        } else {
            Some(format!("HTTP {}", status))
        };

        Ok(RawResponse {
            status_code: status.as_u16(),
            headers,
            body,
            success,
            error,
        })
    }
}

fn convert_method(method: &HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
