/// How the end of a response was determined.
///
/// Every response read ends under exactly one of these rules. The framing is
/// available on [`RawResponse`](crate::client::RawResponse) after the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// The peer closed the connection before a complete header block arrived.
    ///
    /// Whatever was received (possibly nothing) is the response.
    EndedBeforeHeaders,

    /// Response body length was declared by a `content-length` header.
    ContentLength(u64),

    /// No `content-length` came with the headers, so the body is whatever
    /// arrived before the peer closed the connection.
    CloseDelimited,
}

impl Framing {
    pub(crate) fn explain(&self) -> &'static str {
        match self {
            Framing::EndedBeforeHeaders => "connection closed before end of headers",
            Framing::ContentLength(_) => "response body is length delimited",
            Framing::CloseDelimited => "response body is close delimited",
        }
    }
}
