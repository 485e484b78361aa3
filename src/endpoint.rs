//! Resolving a URL into the (host, port, path) a request is sent to.

use http::Uri;

use crate::Error;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Host, port and path for one request.
///
/// Derived once from a URL. The host is lower-cased without IPv6 brackets,
/// the port defaults to [`DEFAULT_PORT`] and the path to `/`. Query and
/// fragment are not part of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    path: String,
}

impl Endpoint {
    /// Parse a URL such as `http://example.com:8080/form`.
    ///
    /// A URL without an authority (like `/just/a/path`) gives an empty host. That is
    /// not an error here; it fails later when connecting.
    ///
    /// Parsing follows [`http::Uri`], which is stricter than a plain split on `/`
    /// and `:`. Characters it rejects, such as a raw space in the path, are not
    /// escaped but fail with [`Error::BadUrl`].
    pub fn parse(url: &str) -> Result<Endpoint, Error> {
        let uri: Uri = url.parse()?;

        let host = uri
            .host()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']'))
            .unwrap_or_default()
            .to_ascii_lowercase();

        let port = uri.port_u16().unwrap_or(DEFAULT_PORT);

        let path = match uri.path() {
            "" => "/".to_string(),
            p => p.to_string(),
        };

        if uri.scheme_str().is_some_and(|s| s != "http") {
            debug!("Scheme of {} is not http, sending plain text anyway", url);
        }

        Ok(Endpoint { host, port, path })
    }

    /// Host as sent in the `Host` header.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port to connect to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path as sent in the request line.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let e = Endpoint::parse("http://example.com").unwrap();
        assert_eq!(e.host(), "example.com");
        assert_eq!(e.port(), 80);
        assert_eq!(e.path(), "/");
    }

    #[test]
    fn explicit_port_and_path() {
        let e = Endpoint::parse("http://127.0.0.1:8080/a/b").unwrap();
        assert_eq!(e.host(), "127.0.0.1");
        assert_eq!(e.port(), 8080);
        assert_eq!(e.path(), "/a/b");
    }

    #[test]
    fn host_is_lower_cased() {
        let e = Endpoint::parse("http://EXAMPLE.com/").unwrap();
        assert_eq!(e.host(), "example.com");
    }

    #[test]
    fn query_is_not_part_of_path() {
        let e = Endpoint::parse("http://example.com/search?q=rust#top").unwrap();
        assert_eq!(e.path(), "/search");
    }

    #[test]
    fn ipv6_brackets_stripped() {
        let e = Endpoint::parse("http://[::1]:8000/").unwrap();
        assert_eq!(e.host(), "::1");
        assert_eq!(e.port(), 8000);
    }

    #[test]
    fn no_authority_gives_empty_host() {
        let e = Endpoint::parse("/only/a/path").unwrap();
        assert_eq!(e.host(), "");
        assert_eq!(e.port(), 80);
        assert_eq!(e.path(), "/only/a/path");
    }

    #[test]
    fn https_keeps_port_80() {
        let e = Endpoint::parse("https://example.com/").unwrap();
        assert_eq!(e.port(), 80);
    }

    #[test]
    fn raw_space_in_path_is_rejected() {
        let err = Endpoint::parse("http://example.com/a b").unwrap_err();
        assert!(matches!(err, Error::BadUrl(_)));
    }
}
