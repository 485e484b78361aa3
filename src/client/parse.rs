//! Extracting status code, headers and body from a buffered response.

use http::{header, HeaderMap, HeaderName, HeaderValue};

use crate::response::HttpResponse;
use crate::Error;

use super::RawResponse;

/// Separates the header block from the body.
pub const HEADER_DELIMITER: &str = "\r\n\r\n";

/// Read the status code from the status line.
///
/// This is the second whitespace separated token of the response, so
/// `HTTP/1.1 404 Not Found` gives `404`.
pub fn parse_status_code(text: &str) -> Result<u16, Error> {
    let token = text
        .split_whitespace()
        .nth(1)
        .ok_or(Error::MissingStatusLine)?;

    token
        .parse()
        .map_err(|_| Error::BadStatusCode(token.to_string()))
}

/// Parse the header block into a map with lower-cased names.
///
/// Returns `None` if `text` holds no complete header block. Each line after the
/// status line is split on the first `": "`. Lines whose name is not made of ASCII
/// letters and `-` are skipped. A repeated name keeps the last value.
///
/// New names beyond what a [`HeaderMap`] can hold are skipped.
pub fn parse_headers(text: &str) -> Option<HeaderMap> {
    let (head, _) = text.split_once(HEADER_DELIMITER)?;

    let mut headers = HeaderMap::new();

    for line in head.split("\r\n").skip(1) {
        let Some((name, value)) = line.split_once(": ") else {
            continue;
        };

        if !is_header_name(name) {
            continue;
        }

        let parsed = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        );

        let (Ok(name), Ok(value)) = parsed else {
            trace!("Skipping unrepresentable header line: {:?}", line);
            continue;
        };

        if headers.try_insert(name, value).is_err() {
            trace!("Header map full, skipping: {:?}", line);
        }
    }

    Some(headers)
}

fn is_header_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
}

/// Everything after the header block, or `""` if there is no header block.
pub fn parse_body(text: &str) -> &str {
    text.split_once(HEADER_DELIMITER)
        .map(|(_, body)| body)
        .unwrap_or("")
}

/// Declared body length, if any.
///
/// A negative length declares that nothing more is to be read and counts as `0`.
pub fn content_length(headers: &HeaderMap) -> Result<Option<u64>, Error> {
    let Some(value) = headers.get(header::CONTENT_LENGTH) else {
        return Ok(None);
    };

    let len = value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or(Error::BadContentLengthHeader)?;

    Ok(Some(len.max(0) as u64))
}

/// Parse a complete buffered response.
///
/// Invalid UTF-8 in the buffer is replaced rather than rejected. A missing header
/// block gives empty headers and body; a missing status code is an error.
pub fn parse_response(raw: &RawResponse) -> Result<HttpResponse, Error> {
    let text = raw.text();

    let code = parse_status_code(&text)?;
    let headers = parse_headers(&text).unwrap_or_default();
    let body = parse_body(&text).to_string();

    Ok(HttpResponse::new(code, body, headers, raw.is_truncated()))
}
