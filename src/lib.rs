//! HTTP/1.1 client written directly against TCP sockets.
//!
//! The request is composed byte by byte, and the response is read and framed by
//! hand: bytes are accumulated until the header block is complete, then
//! `content-length` decides how much more to read. Without it, the body is
//! everything until the server closes the connection.
//!
//! # Example
//!
//! ```no_run
//! use rawhttp::client::Client;
//! use rawhttp::request::FormFields;
//!
//! let mut client = Client::new();
//!
//! let response = client.get("http://example.com/").unwrap();
//! println!("{} {}", response.code(), response.body());
//!
//! let mut fields = FormFields::new();
//! fields.insert("a", "1");
//! fields.insert("b", "2");
//!
//! // Sends the body a=1&b=2
//! let response = client.post("http://example.com/form", &fields).unwrap();
//! assert!(response.code() < 600);
//! ```
//!
//! The response reader is Sans-IO and can be driven without a socket:
//!
//! ```
//! use rawhttp::client::{parse_response, ResponseReader};
//! use rawhttp::Framing;
//!
//! let mut reader = ResponseReader::new();
//!
//! reader.push(b"HTTP/1.1 200 OK\r\nContent-Le").unwrap();
//! assert!(!reader.is_header_complete());
//!
//! reader.push(b"ngth: 5\r\n\r\nhel").unwrap();
//! assert!(reader.is_header_complete());
//! assert!(!reader.is_complete());
//!
//! reader.push(b"lo").unwrap();
//! assert!(reader.is_complete());
//!
//! let raw = reader.finish();
//! assert_eq!(raw.framing(), Framing::ContentLength(5));
//!
//! let response = parse_response(&raw).unwrap();
//! assert_eq!(response.code(), 200);
//! assert_eq!(response.body(), "hello");
//! assert_eq!(response.headers().get("content-length").unwrap(), "5");
//! ```
//!
//! # The http crate
//!
//! Methods, URIs and headers use the [http crate](https://crates.io/crates/http).

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod error;
mod framing;
mod response;
mod util;

pub mod client;
pub mod endpoint;
pub mod request;
pub mod transport;

pub use error::Error;
pub use framing::Framing;
pub use response::{HttpResponse, DEFAULT_BODY, DEFAULT_CODE};

pub use http;
