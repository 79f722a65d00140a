//! The response envelope shared by every endpoint.
//!
//! Every Ozon reply carries its payload under a `result` key. The crate
//! decodes that into [`ApiResponse<T>`] and then attaches the transport-level
//! [`CommonResponse`] (HTTP status and headers), which never appears in the
//! JSON body itself.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Transport metadata copied onto every successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonResponse {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
}

impl CommonResponse {
    /// Capture status and headers from a raw `reqwest` response.
    pub(crate) fn from_response(resp: &reqwest::Response) -> Self {
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in resp.headers() {
            headers
                .entry(name.as_str().to_owned())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        Self {
            status_code: resp.status().as_u16(),
            headers,
        }
    }

    /// First value of the named header. The lookup ignores ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// A typed Ozon response: the `result` payload plus the envelope.
///
/// A body without a `result` key fails to decode rather than producing an
/// empty payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Populated by [`OzonClient`](crate::client::OzonClient) after the round
    /// trip; always empty straight out of the decoder.
    #[serde(skip)]
    pub common: CommonResponse,
    /// Method result.
    pub result: T,
}

impl<T> ApiResponse<T> {
    /// Drop the envelope and keep the payload.
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Decode an explicit `null` the same as a missing field.
///
/// Use together with `#[serde(default)]` on maps and sequences.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
