//! HTTP response construction

use serde::Serialize;
use skillboard_api::ErrorBody;

/// An HTTP response carrying a JSON body
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// A 200 response with the given JSON payload
    pub fn json<T: Serialize>(payload: &T) -> Self {
        Self::with_status(200, payload)
    }

    /// A response with an explicit status and JSON payload
    pub fn with_status<T: Serialize>(status: u16, payload: &T) -> Self {
        let body = serde_json::to_string(payload)
            .unwrap_or_else(|_| r#"{"error": "Internal server error"}"#.to_string());
        Self { status, body }
    }

    /// An error response: `{"error": "..."}` with the given status
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::with_status(status, &ErrorBody::new(message))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serialize to wire bytes, including framing headers.
    pub fn to_bytes(&self, keep_alive: bool) -> Vec<u8> {
        let connection = if keep_alive { "keep-alive" } else { "close" };
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n{}",
            self.status,
            reason_phrase(self.status),
            self.body.len(),
            connection,
            self.body,
        )
        .into_bytes()
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboard_api::Ack;

    #[test]
    fn wire_format() {
        let response = Response::json(&Ack::new("Skill added successfully"));
        let bytes = response.to_bytes(true);
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: application/json\r\n"));
        assert!(text.contains("Connection: keep-alive\r\n"));
        assert!(text.ends_with("\r\n\r\n{\"message\":\"Skill added successfully\"}"));

        let body = text.split("\r\n\r\n").nth(1).unwrap();
        let length: usize = text
            .lines()
            .find_map(|l| l.strip_prefix("Content-Length: "))
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        assert_eq!(length, body.len());
    }

    #[test]
    fn error_response() {
        let response = Response::error(404, "Not found");
        assert_eq!(response.status(), 404);
        assert_eq!(response.body(), r#"{"error":"Not found"}"#);

        let text = String::from_utf8(response.to_bytes(false)).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Connection: close\r\n"));
    }
}
