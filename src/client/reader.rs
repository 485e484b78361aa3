use std::borrow::Cow;

use crate::framing::Framing;
use crate::transport::Transport;
use crate::util::find;
use crate::Error;

use super::parse::{content_length, parse_headers, HEADER_DELIMITER};

/// Read size used by [`read_response`] unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

const DELIMITER: &[u8] = HEADER_DELIMITER.as_bytes();

/// Accumulates a response until its end can be determined.
///
/// Sans-IO: bytes are handed over with [`push()`](ResponseReader::push) as they
/// arrive, and an empty input signals that the peer closed the connection.
///
/// ```text
///     AwaitingHeaders ──┬──▶ KnownLength ──┐
///           │           │                   ├──▶ Complete
///           │           └──▶ UnknownLength ─┘
///           └──────────────────────────────────▶ Complete
/// ```
///
/// Once the header block is in, a `content-length` header decides how many more
/// bytes are needed. Without one, the body runs until the connection closes.
#[derive(Debug, Default)]
pub struct ResponseReader {
    buffer: Vec<u8>,
    state: ReadState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ReadState {
    #[default]
    AwaitingHeaders,
    KnownLength {
        declared: u64,
        remaining: i64,
    },
    UnknownLength,
    Complete {
        framing: Framing,
        missing: u64,
    },
}

impl ResponseReader {
    /// Create a reader for one response.
    pub fn new() -> Self {
        ResponseReader::default()
    }

    /// Add input from the connection. An empty `input` means end of stream.
    ///
    /// A `content-length` that is not a number fails with
    /// [`Error::BadContentLengthHeader`] as soon as the header block is complete.
    /// A negative one completes the response right there.
    ///
    /// Input after the response is complete is ignored.
    pub fn push(&mut self, input: &[u8]) -> Result<(), Error> {
        if input.is_empty() {
            self.end_of_stream();
            return Ok(());
        }

        match self.state {
            ReadState::AwaitingHeaders => {
                // The delimiter might straddle the previous input.
                let from = self.buffer.len().saturating_sub(DELIMITER.len() - 1);
                self.buffer.extend_from_slice(input);

                if let Some(pos) = find(&self.buffer[from..], DELIMITER) {
                    let body_start = from + pos + DELIMITER.len();
                    let next = self.analyze_headers(body_start)?;
                    self.transition(next);
                }
            }
            ReadState::KnownLength {
                declared,
                remaining,
            } => {
                self.buffer.extend_from_slice(input);

                // Overshooting is fine, extra bytes stay in the buffer.
                let remaining = remaining.saturating_sub(as_i64(input.len() as u64));

                self.transition(if remaining <= 0 {
                    ReadState::Complete {
                        framing: Framing::ContentLength(declared),
                        missing: 0,
                    }
                } else {
                    ReadState::KnownLength {
                        declared,
                        remaining,
                    }
                });
            }
            ReadState::UnknownLength => {
                self.buffer.extend_from_slice(input);
            }
            ReadState::Complete { .. } => {
                trace!("Ignoring {} bytes after complete response", input.len());
            }
        }

        Ok(())
    }

    fn analyze_headers(&self, body_start: usize) -> Result<ReadState, Error> {
        let head = String::from_utf8_lossy(&self.buffer[..body_start]);

        let declared = match parse_headers(&head) {
            Some(headers) => content_length(&headers)?,
            None => None,
        };

        let Some(declared) = declared else {
            return Ok(ReadState::UnknownLength);
        };

        let after = (self.buffer.len() - body_start) as u64;
        let remaining = as_i64(declared).saturating_sub(as_i64(after));

        Ok(if remaining <= 0 {
            ReadState::Complete {
                framing: Framing::ContentLength(declared),
                missing: 0,
            }
        } else {
            ReadState::KnownLength {
                declared,
                remaining,
            }
        })
    }

    fn end_of_stream(&mut self) -> (Framing, u64) {
        let (framing, missing) = match self.state {
            ReadState::AwaitingHeaders => (Framing::EndedBeforeHeaders, 0),
            ReadState::KnownLength {
                declared,
                remaining,
            } => (Framing::ContentLength(declared), remaining.max(0) as u64),
            ReadState::UnknownLength => (Framing::CloseDelimited, 0),
            ReadState::Complete { framing, missing } => (framing, missing),
        };

        self.transition(ReadState::Complete { framing, missing });

        (framing, missing)
    }

    fn transition(&mut self, next: ReadState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            debug!("{:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    /// Tell if the response is complete and no more input is needed.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, ReadState::Complete { .. })
    }

    /// Tell if the complete header block has been received.
    pub fn is_header_complete(&self) -> bool {
        match self.state {
            ReadState::AwaitingHeaders => false,
            ReadState::Complete { framing, .. } => framing != Framing::EndedBeforeHeaders,
            _ => true,
        }
    }

    /// Bytes buffered so far.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// End reading and hand over the buffered response.
    ///
    /// Finishing an incomplete reader is the same as the peer closing the connection
    /// at this point.
    pub fn finish(mut self) -> RawResponse {
        let (framing, missing) = self.end_of_stream();

        if missing > 0 {
            debug!("Response ended {} bytes short: {}", missing, framing.explain());
        } else {
            debug!("Response ended: {}", framing.explain());
        }

        RawResponse {
            data: self.buffer,
            framing,
            missing,
        }
    }
}

fn as_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// A response exactly as buffered from the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    data: Vec<u8>,
    framing: Framing,
    missing: u64,
}

impl RawResponse {
    /// All buffered bytes, status line included.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The rule that ended the read.
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Declared body bytes that never arrived.
    pub fn missing(&self) -> u64 {
        self.missing
    }

    /// The connection closed before the declared `content-length` was received.
    pub fn is_truncated(&self) -> bool {
        self.missing > 0
    }

    /// The buffer as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Take the buffered bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Read one response from `transport` in reads of `chunk_size` bytes.
///
/// Returns once the declared `content-length` is reached, or when the peer closes
/// the connection. Blocks for as long as the transport does.
pub fn read_response<T>(transport: &mut T, chunk_size: usize) -> Result<RawResponse, Error>
where
    T: Transport + ?Sized,
{
    let mut reader = ResponseReader::new();
    let mut chunk = vec![0; chunk_size.max(1)];

    while !reader.is_complete() {
        let n = transport.recv(&mut chunk)?;
        reader.push(&chunk[..n])?;
    }

    Ok(reader.finish())
}
