//! HTTP request parsing

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::{HttpError, HttpResult};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Largest accepted header section (per line)
const MAX_LINE_BYTES: usize = 8 * 1024;

/// Request method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl Method {
    fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }
}

/// A parsed HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request path with the query string stripped, not yet decoded
    pub path: String,
    /// Whether the connection should stay open after the response
    pub keep_alive: bool,
    pub body: Vec<u8>,
}

impl Request {
    /// Path segments after the leading slash, percent-decoded.
    pub fn segments(&self) -> Vec<String> {
        self.path
            .trim_start_matches('/')
            .split('/')
            .map(percent_decode)
            .collect()
    }
}

/// Read one request off the connection.
///
/// Returns `Ok(None)` on a clean EOF before the request line (client done
/// with the connection).
pub async fn read_request<R>(reader: &mut R) -> HttpResult<Option<Request>>
where
    R: AsyncBufRead + Unpin,
{
    let line = match read_limited_line(reader).await? {
        Some(line) if !line.is_empty() => line,
        _ => return Ok(None),
    };

    let mut parts = line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(t), Some(v)) => (m, t, v),
        _ => {
            return Err(HttpError::InvalidRequest(format!(
                "Malformed request line: {line:?}"
            )));
        }
    };

    let method = Method::parse(method);
    let path = target.split('?').next().unwrap_or("").to_string();

    // HTTP/1.1 defaults to keep-alive, HTTP/1.0 to close
    let mut keep_alive = version == "HTTP/1.1";

    let mut content_length: usize = 0;
    loop {
        let header = match read_limited_line(reader).await? {
            Some(line) => line,
            None => {
                return Err(HttpError::InvalidRequest(
                    "Connection closed mid-headers".into(),
                ));
            }
        };

        if header.is_empty() {
            break;
        }

        let Some((name, value)) = header.split_once(':') else {
            return Err(HttpError::InvalidRequest(format!(
                "Malformed header: {header:?}"
            )));
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();

        match name.as_str() {
            "content-length" => {
                content_length = value.parse().map_err(|_| {
                    HttpError::InvalidRequest(format!("Bad Content-Length: {value:?}"))
                })?;
            }
            "connection" => match value.to_ascii_lowercase().as_str() {
                "close" => keep_alive = false,
                "keep-alive" => keep_alive = true,
                _ => {}
            },
            _ => {}
        }
    }

    if content_length > MAX_BODY_BYTES {
        return Err(HttpError::InvalidRequest(format!(
            "Body of {content_length} bytes exceeds limit"
        )));
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await?;
    }

    Ok(Some(Request {
        method,
        path,
        keep_alive,
        body,
    }))
}

/// Read one CRLF-terminated line, without the terminator.
///
/// Returns `Ok(None)` on EOF before any byte arrives.
async fn read_limited_line<R>(reader: &mut R) -> HttpResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }
    if n > MAX_LINE_BYTES {
        return Err(HttpError::InvalidRequest("Header line too long".into()));
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Decode `%XX` escapes in a path segment. Invalid escapes pass through
/// untouched; non-UTF-8 results are replaced lossily.
pub fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2]))
        {
            out.push(hi * 16 + lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
