//! Response value returned by the transport and stored as a cache entry

use bytes::Bytes;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// A fully materialized HTTP response.
///
/// Cached entries are immutable snapshots of this value; two responses are
/// equal when status, headers, body and URL are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// URL the response was fetched from
    #[serde(default)]
    pub url: String,
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(with = "body_base64")]
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            url: String::new(),
            status: status.as_u16(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// 200 OK with `body`
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Status as an `http::StatusCode`, if it is in the valid range
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value with a case-insensitive name match
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

mod body_base64 {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_body_survives_json() {
        let response = HttpResponse::ok(vec![0u8, 159, 146, 150, 255])
            .with_url("https://example.com/blob")
            .with_header("Content-Type", "application/octet-stream");
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: HttpResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse::ok("").with_header("ETag", "\"abc\"");
        assert_eq!(response.header("etag"), Some("\"abc\""));
        assert_eq!(response.header("last-modified"), None);
    }

    #[test]
    fn success_is_2xx_only() {
        assert!(HttpResponse::new(StatusCode::CREATED, "").is_success());
        assert!(!HttpResponse::new(StatusCode::NOT_MODIFIED, "").is_success());
        assert!(!HttpResponse::new(StatusCode::NOT_FOUND, "").is_success());
    }

    #[test]
    fn json_body_decodes() {
        let response = HttpResponse::ok(r#"{"name":"alpha","size":3}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["name"], "alpha");
        assert_eq!(value["size"], 3);
    }
}
