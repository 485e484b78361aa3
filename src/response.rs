use std::fmt;

use http::HeaderMap;

/// Status code of [`HttpResponse::default()`].
pub const DEFAULT_CODE: u16 = 500;

/// Body of [`HttpResponse::default()`].
pub const DEFAULT_BODY: &str = "";

/// Result of a GET or POST.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    code: u16,
    body: String,
    headers: HeaderMap,
    truncated: bool,
}

impl HttpResponse {
    pub(crate) fn new(code: u16, body: String, headers: HeaderMap, truncated: bool) -> Self {
        HttpResponse {
            code,
            body,
            headers,
            truncated,
        }
    }

    /// Status code from the status line.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Everything after the header block.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Response headers. Empty if the response had no complete header block.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The connection closed before the declared `content-length` was received.
    ///
    /// The body is then shorter than declared.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Take the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        HttpResponse::new(
            DEFAULT_CODE,
            DEFAULT_BODY.to_string(),
            HeaderMap::new(),
            false,
        )
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;

        if !self.body.is_empty() {
            write!(f, "\n\n{}", self.body)?;
        }

        Ok(())
    }
}
