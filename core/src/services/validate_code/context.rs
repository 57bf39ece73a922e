//! Request context seen by processors, generators and senders

use std::sync::Mutex;

use serde::Serialize;

use crate::errors::ParameterError;

/// Body a sender writes back to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeResponse {
    /// MIME type of the body
    pub content_type: String,
    /// JSON body
    pub body: serde_json::Value,
}

impl CodeResponse {
    /// JSON response body
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            content_type: "application/json".to_string(),
            body,
        }
    }
}

/// Read-only view of an inbound request plus a response slot
///
/// Implemented by the transport layer; [`CodeRequest`] is the in-crate
/// implementation backed by a form-encoded query string.
pub trait RequestContext: Send + Sync {
    /// Identifier of the client session the request belongs to
    fn session_id(&self) -> &str;

    /// First value of the named parameter, `None` when absent
    fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError>;

    /// Hand a response body to the transport layer
    fn write_response(&self, response: CodeResponse);
}

/// Request backed by an `application/x-www-form-urlencoded` query string
#[derive(Debug)]
pub struct CodeRequest {
    session_id: String,
    query: String,
    response: Mutex<Option<CodeResponse>>,
}

impl CodeRequest {
    /// Create from a session id and a raw query string (`a=1&b=2`)
    pub fn new(session_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            query: query.into(),
            response: Mutex::new(None),
        }
    }

    /// Create from decoded name/value pairs
    pub fn with_params(session_id: impl Into<String>, params: &[(&str, &str)]) -> Self {
        let query = params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        Self::new(session_id, query)
    }

    /// Take the response written by a sender, if any
    pub fn take_response(&self) -> Option<CodeResponse> {
        self.response
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl RequestContext for CodeRequest {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn parameter(&self, name: &str) -> Result<Option<String>, ParameterError> {
        for pair in self.query.split('&').filter(|pair| !pair.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            // Keys that fail to decode cannot be the one asked for
            let Some(key) = decode_component(raw_key) else {
                continue;
            };
            if key != name {
                continue;
            }
            return decode_component(raw_value)
                .map(Some)
                .ok_or_else(|| ParameterError::InvalidEncoding {
                    name: name.to_string(),
                });
        }
        Ok(None)
    }

    fn write_response(&self, response: CodeResponse) {
        *self
            .response
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(response);
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_lookup() {
        let request = CodeRequest::new("s1", "smsCode=4821&mobile=13812345678");

        assert_eq!(request.session_id(), "s1");
        assert_eq!(request.parameter("smsCode").unwrap(), Some("4821".to_string()));
        assert_eq!(request.parameter("mobile").unwrap(), Some("13812345678".to_string()));
        assert_eq!(request.parameter("imageCode").unwrap(), None);
    }

    #[test]
    fn test_parameter_decoding() {
        let request = CodeRequest::new("s1", "imageCode=a%20b&note=x+y&empty=&flag");

        assert_eq!(request.parameter("imageCode").unwrap(), Some("a b".to_string()));
        assert_eq!(request.parameter("note").unwrap(), Some("x y".to_string()));
        assert_eq!(request.parameter("empty").unwrap(), Some(String::new()));
        assert_eq!(request.parameter("flag").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_repeated_parameter_returns_first() {
        let request = CodeRequest::new("s1", "smsCode=1111&smsCode=2222");
        assert_eq!(request.parameter("smsCode").unwrap(), Some("1111".to_string()));
    }

    #[test]
    fn test_invalid_encoding_is_a_binding_error() {
        let request = CodeRequest::new("s1", "smsCode=%FF%FE");
        assert_eq!(
            request.parameter("smsCode"),
            Err(ParameterError::InvalidEncoding {
                name: "smsCode".to_string()
            })
        );
    }

    #[test]
    fn test_with_params_round_trips() {
        let request = CodeRequest::with_params("s1", &[("imageCode", "a&b=c"), ("width", "100")]);
        assert_eq!(request.parameter("imageCode").unwrap(), Some("a&b=c".to_string()));
        assert_eq!(request.parameter("width").unwrap(), Some("100".to_string()));
    }

    #[test]
    fn test_response_slot() {
        let request = CodeRequest::new("s1", "");
        assert!(request.take_response().is_none());

        request.write_response(CodeResponse::json(serde_json::json!({"ok": true})));
        let response = request.take_response().expect("response written");
        assert_eq!(response.content_type, "application/json");
        assert!(request.take_response().is_none());
    }
}
