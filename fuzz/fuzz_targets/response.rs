#![no_main]

use libfuzzer_sys::fuzz_target;
use rawhttp::client::{parse_body, parse_headers, parse_response, ResponseReader};
use rawhttp::Framing;

// Status lines to prepend, so that the input regularly gets past the status code.
const STATUS_LINES: &[&str] = &[
    "",
    "HTTP/1.1 200 OK\r\n",
    "HTTP/1.0 404 Not Found\r\n",
    "HTTP/1.1 204 No Content\r\n",
];

// Headers that drive the framing decision.
const FRAMING_HEADERS: &[&str] = &[
    "",
    "Content-Length: 0\r\n",
    "Content-Length: 5\r\n",
    "content-length: 100\r\n",
    "Content-Length: x\r\n",
    "Connection: close\r\n",
];

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let status = STATUS_LINES[data[0] as usize % STATUS_LINES.len()];
    let header = FRAMING_HEADERS[data[1] as usize % FRAMING_HEADERS.len()];

    // 1 to 64 bytes per push
    let chunk_size = (data[2] as usize % 64) + 1;

    let mut input = Vec::new();
    input.extend_from_slice(status.as_bytes());
    input.extend_from_slice(header.as_bytes());
    input.extend_from_slice(&data[3..]);

    let mut reader = ResponseReader::new();

    for chunk in input.chunks(chunk_size) {
        if reader.push(chunk).is_err() {
            return;
        }
        if reader.is_complete() {
            break;
        }
    }

    let buffered = reader.buffered().len();
    let raw = reader.finish();

    assert_eq!(raw.data().len(), buffered);
    assert!(input.starts_with(raw.data()));

    if let Framing::ContentLength(declared) = raw.framing() {
        assert!(raw.missing() <= declared);
    } else {
        assert_eq!(raw.missing(), 0);
    }

    let text = raw.text();
    let body = parse_body(&text);
    assert!(text.ends_with(body));

    if let Some(headers) = parse_headers(&text) {
        for name in headers.keys() {
            assert_eq!(name.as_str(), name.as_str().to_ascii_lowercase());
        }
    }

    let _ = parse_response(&raw);
});
