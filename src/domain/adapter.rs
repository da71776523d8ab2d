use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::ServiceError;
use super::models::{Callback, CustomData, DetailedResponse, RawResponse, ResponseHandler, RAW_JSON_KEY};

/// Builds the one-shot completion handler that maps a raw transport outcome
/// into a typed result and fires the caller callback.
///
/// The handler copies status and headers verbatim, decodes a non-empty body
/// as UTF-8 JSON into `T`, and attaches the raw JSON text to the custom-data
/// bag under `"json"` when the decode succeeds. A decode failure is logged,
/// forces the success flag false, and still fires the callback so the caller
/// is never left hanging.
pub(crate) fn response_handler<T>(callback: Callback<T>, mut custom_data: CustomData) -> ResponseHandler
where
    T: DeserializeOwned + Send + 'static,
{
    Box::new(move |raw: RawResponse| {
        let mut response = DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers.clone(),
            success: raw.success,
            result: None,
        };

        let mut error = match (&raw.error, raw.status_code) {
            (Some(message), 0) => Some(ServiceError::Transport(message.clone())),
            (Some(message), status) => Some(ServiceError::Http {
                status,
                message: message.clone(),
            }),
            (None, _) => None,
        };

        if !raw.body.is_empty() {
            match decode_body::<T>(&raw.body) {
                Ok((value, json)) => {
                    response.result = Some(value);
                    custom_data.insert(RAW_JSON_KEY.to_string(), Value::String(json));
                }
                Err(decode_error) => {
                    log::error!("response decode failed: {}", decode_error);
                    response.success = false;
                    // HTTP-level errors take precedence over decode errors.
                    if error.is_none() {
                        error = Some(decode_error);
                    }
                }
            }
        }

        callback(response, error, custom_data);
    })
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<(T, String), ServiceError> {
    let text = std::str::from_utf8(body).map_err(|e| ServiceError::Decode(e.to_string()))?;
    let value = serde_json::from_str(text).map_err(|e| ServiceError::Decode(e.to_string()))?;
    Ok((value, text.to_string()))
}
