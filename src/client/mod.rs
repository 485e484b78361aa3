//! HTTP/1.1 GET and POST over a single use connection
//!
//! The [`Client`] runs one exchange per call:
//!
//! * **Resolve** - the URL becomes an [`Endpoint`] (host, port, path)
//! * **Build** - the request is composed as raw bytes
//! * **Connect** - a fresh connection is opened, never reused
//! * **Send** - the request bytes are written in full
//! * **Read** - a [`ResponseReader`] accumulates the response
//! * **Disconnect** - the connection is shut down, also when sending or reading failed
//! * **Parse** - status code, headers and body are extracted
//!
//! The reader decides when the response is complete:
//!
//! ```text
//!                    ┌──────────────────┐
//!          ┌─────────│ AwaitingHeaders  │─────────┐
//!          │         └──────────────────┘         │
//!          │ content-length                       │ no content-length
//!          ▼                                      ▼
//! ┌──────────────────┐                  ┌──────────────────┐
//! │   KnownLength    │                  │  UnknownLength   │
//! └──────────────────┘                  └──────────────────┘
//!          │ length reached                       │ peer closed
//!          │ or peer closed                       │
//!          │         ┌──────────────────┐         │
//!          └────────▶│     Complete     │◀────────┘
//!                    └──────────────────┘
//! ```
//!
//! A peer closing while still in `AwaitingHeaders` also completes the response,
//! with whatever was received.
//!
//! # In scope:
//!
//! * `content-length` and close delimited response bodies
//! * Header parsing with case-insensitive lookup
//! * `application/x-www-form-urlencoded` POST bodies
//!
//! # Out of scope:
//!
//! * transfer-encoding: chunked
//! * Keep-alive and connection pooling
//! * TLS (https)
//! * Redirects, cookies, compression

use http::Method;

use crate::endpoint::Endpoint;
use crate::framing::Framing;
use crate::request::{build_request, FormFields};
use crate::response::HttpResponse;
use crate::transport::{Connect, TcpConnector, Transport};
use crate::Error;

mod parse;
mod reader;

pub use parse::{
    content_length, parse_body, parse_headers, parse_response, parse_status_code,
    HEADER_DELIMITER,
};
pub use reader::{read_response, RawResponse, ResponseReader, DEFAULT_CHUNK_SIZE};

#[cfg(test)]
pub(crate) mod test;

/// Client doing one connection per request.
///
/// The connector decides how connections are opened. [`Client::new()`] uses plain
/// TCP.
#[derive(Debug)]
pub struct Client<C = TcpConnector> {
    connector: C,
    chunk_size: usize,
    fail_on_truncation: bool,
}

impl Client<TcpConnector> {
    /// Client over plain TCP.
    pub fn new() -> Self {
        Client::with_connector(TcpConnector)
    }
}

impl Default for Client<TcpConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Connect> Client<C> {
    /// Client opening connections with `connector`.
    pub fn with_connector(connector: C) -> Self {
        Client {
            connector,
            chunk_size: DEFAULT_CHUNK_SIZE,
            fail_on_truncation: false,
        }
    }

    /// Set how many bytes are requested per read from the connection.
    ///
    /// Defaults to [`DEFAULT_CHUNK_SIZE`]. Zero is treated as one.
    pub fn chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set whether a body shorter than its `content-length` is an error.
    ///
    /// If `false`, such a response is returned with
    /// [`HttpResponse::is_truncated()`] set. If `true`, the call fails with
    /// [`Error::IncompleteBody`].
    ///
    /// Defaults to `false`.
    pub fn fail_on_truncation(&mut self, enabled: bool) {
        self.fail_on_truncation = enabled;
    }

    /// Send a GET to `url`.
    pub fn get(&mut self, url: &str) -> Result<HttpResponse, Error> {
        self.execute(&Method::GET, url, None)
    }

    /// Send a POST to `url` with `fields` as form-encoded body.
    pub fn post(&mut self, url: &str, fields: &FormFields) -> Result<HttpResponse, Error> {
        self.execute(&Method::POST, url, Some(fields))
    }

    /// Dispatch on a method name.
    ///
    /// `"POST"` sends a POST. Anything else, including `"post"`, sends a GET and
    /// ignores `fields`.
    pub fn command(
        &mut self,
        url: &str,
        method: &str,
        fields: Option<&FormFields>,
    ) -> Result<HttpResponse, Error> {
        if method == "POST" {
            self.execute(&Method::POST, url, fields)
        } else {
            self.execute(&Method::GET, url, None)
        }
    }

    fn execute(
        &mut self,
        method: &Method,
        url: &str,
        fields: Option<&FormFields>,
    ) -> Result<HttpResponse, Error> {
        let endpoint = Endpoint::parse(url)?;
        let request = build_request(method, &endpoint, fields)?;

        debug!(
            "{} {} to {}:{}",
            method,
            endpoint.path(),
            endpoint.host(),
            endpoint.port()
        );

        let mut transport = self.connector.connect(endpoint.host(), endpoint.port())?;

        let result = transport
            .send_all(&request)
            .and_then(|_| read_response(&mut transport, self.chunk_size));

        transport.disconnect();

        let raw = result?;

        if let (true, Framing::ContentLength(expected)) = (raw.is_truncated(), raw.framing()) {
            let received = expected - raw.missing();

            if self.fail_on_truncation {
                return Err(Error::IncompleteBody { expected, received });
            }

            warn!(
                "Connection closed after {} of {} body bytes",
                received, expected
            );
        }

        parse_response(&raw)
    }
}
