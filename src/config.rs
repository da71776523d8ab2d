//! Credential configuration sources.
//!
//! Credentials can be constructed directly, loaded from a per-service
//! credentials file, or read from environment variables. The file format is
//! TOML with one `[services.<name>]` table per service entry.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Credentials, Result, ServiceError};

/// One service entry in the credentials file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub apikey: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bearer_token: Option<String>,
    pub url: Option<String>,
}

/// Credentials file mapping service names to auth entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsFile {
    pub services: HashMap<String, ServiceEntry>,
}

impl CredentialsFile {
    /// Loads a credentials file from an explicit path. A missing file loads
    /// as an empty entry set.
    pub fn load(path: &Path) -> Result<Self> {
        confy::load_path(path)
            .map_err(|e| ServiceError::Config(format!("failed to load credentials file: {}", e)))
    }

    /// Builds `Credentials` for a named service entry. Auth sources are
    /// tried in order: api key, username/password, bearer token.
    pub fn credentials_for(&self, service: &str) -> Option<Credentials> {
        self.services.get(service).and_then(entry_to_credentials)
    }
}

/// Reads credentials from `<PREFIX>_APIKEY`, `<PREFIX>_USERNAME` /
/// `<PREFIX>_PASSWORD`, `<PREFIX>_BEARER_TOKEN` and `<PREFIX>_URL`.
pub fn credentials_from_env(prefix: &str) -> Option<Credentials> {
    let entry = ServiceEntry {
        apikey: env::var(format!("{}_APIKEY", prefix)).ok(),
        username: env::var(format!("{}_USERNAME", prefix)).ok(),
        password: env::var(format!("{}_PASSWORD", prefix)).ok(),
        bearer_token: env::var(format!("{}_BEARER_TOKEN", prefix)).ok(),
        url: env::var(format!("{}_URL", prefix)).ok(),
    };
    entry_to_credentials(&entry)
}

fn entry_to_credentials(entry: &ServiceEntry) -> Option<Credentials> {
    let non_empty = |value: &Option<String>| -> Option<String> {
        value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
    };

    let credentials = if let Some(apikey) = non_empty(&entry.apikey) {
        Credentials::with_api_key(&apikey)
    } else if let (Some(username), Some(password)) =
        (non_empty(&entry.username), non_empty(&entry.password))
    {
        Credentials::with_basic_auth(&username, &password)
    } else if let Some(token) = non_empty(&entry.bearer_token) {
        Credentials::with_bearer_token(&token)
    } else {
        return None;
    };

    match non_empty(&entry.url) {
        Some(url) => Some(credentials.with_url(&url)),
        None => Some(credentials),
    }
}
