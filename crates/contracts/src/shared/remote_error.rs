//! Error body returned by the remote REST service
//!
//! Shape: `{ "message": string | string[], "error"?: string, "statusCode"?: number }`.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemoteMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub message: Option<RemoteMessage>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
}

impl RemoteError {
    /// Decode an error body; anything that is not the expected JSON yields `None`
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Human readable message, falling back to the `error` field
    pub fn message(&self) -> Option<String> {
        let text = match &self.message {
            Some(RemoteMessage::One(m)) => m.trim().to_string(),
            Some(RemoteMessage::Many(items)) => items
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            None => String::new(),
        };
        if !text.is_empty() {
            return Some(text);
        }
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
    }
}

/// Extract the remote message from a raw error body
pub fn message_from_body(body: &str) -> Option<String> {
    RemoteError::parse(body)?.message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message() {
        let body = r#"{"message":"Could not find any entity of type \"Category\"","error":"Not Found","statusCode":404}"#;
        let err = RemoteError::parse(body).unwrap();
        assert_eq!(err.status_code, Some(404));
        assert_eq!(
            err.message().as_deref(),
            Some("Could not find any entity of type \"Category\"")
        );
    }

    #[test]
    fn test_message_array_is_joined() {
        let body = r#"{"message":["name should not be empty","image must be a URL address"],"error":"Bad Request","statusCode":400}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("name should not be empty; image must be a URL address")
        );
    }

    #[test]
    fn test_falls_back_to_error_field() {
        let body = r#"{"message":[],"error":"Bad Request","statusCode":400}"#;
        assert_eq!(message_from_body(body).as_deref(), Some("Bad Request"));
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(message_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(message_from_body(""), None);
        assert_eq!(message_from_body("{}"), None);
    }
}
