//! Composing the raw bytes of a GET or POST request.

use std::io::Write;

use http::Method;

use crate::endpoint::Endpoint;
use crate::util::log_data;
use crate::Error;

/// Form fields for a POST body, in insertion order.
///
/// Inserting a name that already exists replaces its value and keeps the
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    /// An empty set of fields. Posting it sends an empty body.
    pub fn new() -> Self {
        FormFields::default()
    }

    /// Set `name` to `value`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some(existing) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Look up the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Tell if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields as `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as `k1=v1&k2=v2`.
    ///
    /// Names and values are used verbatim, nothing is percent-encoded. A value
    /// holding `&` or `=` will therefore change how the server splits the body.
    pub fn encode(&self) -> String {
        let mut out = String::new();

        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }

        out
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = FormFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// Build the exact bytes to send for `method` against `endpoint`.
///
/// Only `GET` and `POST` are supported. `fields` are ignored for `GET`; for `POST`
/// absent fields send an empty body with `Content-Length: 0`.
pub fn build_request(
    method: &Method,
    endpoint: &Endpoint,
    fields: Option<&FormFields>,
) -> Result<Vec<u8>, Error> {
    let mut w: Vec<u8> = Vec::with_capacity(128);

    // Writing to a Vec<u8> can't fail.
    if *method == Method::GET {
        let _ = write!(
            w,
            "GET {} HTTP/1.1\r\n\
            Host: {}\r\n\
            Content-Type: text/html\r\n\
            \r\n",
            endpoint.path(),
            endpoint.host()
        );
    } else if *method == Method::POST {
        let body = fields.map(FormFields::encode).unwrap_or_default();
        let _ = write!(
            w,
            "POST {} HTTP/1.1\r\n\
            Host: {}\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\
            Content-Length: {}\r\n\
            \r\n\
            {}\r\n",
            endpoint.path(),
            endpoint.host(),
            body.len(),
            body
        );
    } else {
        return Err(Error::UnsupportedMethod(method.clone()));
    }

    log_data(&w);

    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(url: &str) -> Endpoint {
        Endpoint::parse(url).unwrap()
    }

    #[test]
    fn get_request() {
        let req = build_request(&Method::GET, &endpoint("http://example.com/"), None).unwrap();
        assert_eq!(
            req,
            b"GET / HTTP/1.1\r\n\
            Host: example.com\r\n\
            Content-Type: text/html\r\n\
            \r\n"
        );
    }

    #[test]
    fn get_ignores_fields() {
        let fields: FormFields = [("a", "1")].into_iter().collect();
        let req = build_request(
            &Method::GET,
            &endpoint("http://example.com/x"),
            Some(&fields),
        )
        .unwrap();
        assert!(req.starts_with(b"GET /x HTTP/1.1\r\n"));
        assert!(req.ends_with(b"\r\n\r\n"));
    }

    #[test]
    fn post_request_with_fields() {
        let fields: FormFields = [("a", "1"), ("b", "2")].into_iter().collect();
        let req = build_request(
            &Method::POST,
            &endpoint("http://example.com/form"),
            Some(&fields),
        )
        .unwrap();

        assert_eq!(
            req,
            b"POST /form HTTP/1.1\r\n\
            Host: example.com\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\
            Content-Length: 7\r\n\
            \r\n\
            a=1&b=2\r\n"
        );
    }

    #[test]
    fn post_request_without_fields() {
        let req = build_request(&Method::POST, &endpoint("http://example.com/"), None).unwrap();
        assert_eq!(
            req,
            b"POST / HTTP/1.1\r\n\
            Host: example.com\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\
            Content-Length: 0\r\n\
            \r\n\
            \r\n"
        );

        let empty = FormFields::new();
        let req2 =
            build_request(&Method::POST, &endpoint("http://example.com/"), Some(&empty)).unwrap();
        assert_eq!(req, req2);
    }

    #[test]
    fn content_length_counts_bytes() {
        let fields: FormFields = [("name", "Jürgen")].into_iter().collect();
        let req = build_request(
            &Method::POST,
            &endpoint("http://example.com/"),
            Some(&fields),
        )
        .unwrap();
        let text = String::from_utf8(req).unwrap();
        assert!(text.contains("Content-Length: 12\r\n"));
    }

    #[test]
    fn empty_host_is_sent_as_is() {
        let req = build_request(&Method::GET, &endpoint("/path"), None).unwrap();
        assert!(req.starts_with(b"GET /path HTTP/1.1\r\nHost: \r\n"));
    }

    #[test]
    fn fields_keep_order_and_replace() {
        let mut fields = FormFields::new();
        fields.insert("b", "2");
        fields.insert("a", "1");
        fields.insert("b", "3");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("b"), Some("3"));
        assert_eq!(fields.encode(), "b=3&a=1");
    }

    #[test]
    fn values_are_not_encoded() {
        let fields: FormFields = [("q", "a b&c")].into_iter().collect();
        assert_eq!(fields.encode(), "q=a b&c");
    }
}
