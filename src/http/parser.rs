use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidUtf8,
    MalformedRequestLine,
    MalformedStatusLine,
    InvalidStatusCode,
    InvalidContentLength,
    Incomplete,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseError::InvalidUtf8 => "message is not valid UTF-8",
            ParseError::MalformedRequestLine => "request line must have exactly three tokens",
            ParseError::MalformedStatusLine => "malformed status line",
            ParseError::InvalidStatusCode => "unsupported status code",
            ParseError::InvalidContentLength => "invalid Content-Length",
            ParseError::Incomplete => "message is incomplete",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one request out of the bytes read from a connection.
///
/// The buffer is whatever a single read returned, so a truncated request is
/// parsed as far as it goes. Header lines without a `": "` separator are
/// skipped; the header section ends at the first empty line.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidUtf8)?;

    let mut lines = text.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or_default();
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, path, version] = parts[..] else {
        return Err(ParseError::MalformedRequestLine);
    };

    // Headers
    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(": ") {
            headers.push((key.to_string(), value.to_string()));
        }
    }

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Parses a serialized response back into a [`Response`].
///
/// Only the headers this server emits are interpreted. Without a
/// `Content-Type` header the response is treated as headerless and any
/// trailing bytes are ignored.
pub fn parse_http_response(buf: &[u8]) -> Result<Response, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidUtf8)?;
    let body_bytes = &buf[headers_end + 4..];

    let mut lines = head.split("\r\n");

    let status_line = lines.next().ok_or(ParseError::MalformedStatusLine)?;
    let mut parts = status_line.splitn(3, ' ');
    let version = parts.next().ok_or(ParseError::MalformedStatusLine)?;
    if !version.starts_with("HTTP/") {
        return Err(ParseError::MalformedStatusLine);
    }
    let code = parts
        .next()
        .ok_or(ParseError::MalformedStatusLine)?
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidStatusCode)?;
    let status = StatusCode::from_u16(code).ok_or(ParseError::InvalidStatusCode)?;

    let mut content_type = None;
    let mut content_length = None;
    for line in lines {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        match key {
            "Content-Type" => content_type = Some(value.to_string()),
            "Content-Length" => {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidContentLength)?;
                content_length = Some(n);
            }
            _ => {}
        }
    }

    let Some(content_type) = content_type else {
        return Ok(Response::new(status));
    };

    let len = content_length.unwrap_or(body_bytes.len());
    if body_bytes.len() < len {
        return Err(ParseError::Incomplete);
    }

    Ok(Response {
        status,
        content_type: Some(content_type),
        body: Bytes::copy_from_slice(&body_bytes[..len]),
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.header("Host").unwrap(), "example.com");
    }

    #[test]
    fn headers_end_is_first_blank_line() {
        assert_eq!(find_headers_end(b"HTTP/1.1 200 OK\r\n\r\nbody\r\n\r\n"), Some(15));
        assert_eq!(find_headers_end(b"HTTP/1.1 200 OK\r\n"), None);
    }
}
