use crate::client::{parse_response, ResponseReader};
use crate::Framing;

use super::scenario::Scenario;

const HEAD: &[u8] = b"\
        HTTP/1.1 200 OK\r\n\
        Content-Length: 26\r\n\
        \r\n";

const BODY: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn full() -> Vec<u8> {
    let mut v = HEAD.to_vec();
    v.extend_from_slice(BODY);
    v
}

#[test]
fn body_in_same_read_as_headers() {
    let scenario = Scenario::builder().chunk(&full()).build();

    let raw = scenario.read(1024).unwrap();

    assert_eq!(raw.data(), full());
    assert_eq!(raw.framing(), Framing::ContentLength(26));
    assert!(!raw.is_truncated());

    // No read waiting for a close that may never come.
    assert_eq!(scenario.reads(), 1);
}

#[test]
fn chunk_boundary_independence() {
    let full = full();

    for chunk_size in [1, 2, 3, 7, 16, 64, 1024] {
        for first in 1..full.len() {
            let scenario = Scenario::builder()
                .chunk(&full[..first])
                .chunk(&full[first..])
                .build();

            let raw = scenario.read(chunk_size).unwrap();

            assert_eq!(raw.data().len(), HEAD.len() + BODY.len());
            assert_eq!(raw.data(), full);
            assert_eq!(raw.framing(), Framing::ContentLength(26));
        }
    }
}

#[test]
fn stops_reading_at_declared_length() {
    let scenario = Scenario::builder()
        .chunk(HEAD)
        .chunk(BODY)
        .chunk(b"never read")
        .build();

    let raw = scenario.read(1024).unwrap();

    assert_eq!(raw.data(), full());
    assert_eq!(scenario.unread(), 1);
}

#[test]
fn overshoot_is_kept() {
    let scenario = Scenario::builder()
        .chunk(HEAD)
        .chunk(b"abcdefghijklm")
        .chunk(b"nopqrstuvwxyz+extra")
        .build();

    let raw = scenario.read(1024).unwrap();

    assert!(raw.data().ends_with(b"xyz+extra"));
    assert_eq!(raw.framing(), Framing::ContentLength(26));
    assert!(!raw.is_truncated());

    let response = parse_response(&raw).unwrap();
    assert_eq!(response.body(), "abcdefghijklmnopqrstuvwxyz+extra");
}

#[test]
fn zero_content_length() {
    let scenario = Scenario::builder()
        .chunk(b"HTTP/1.1 204 No Content\r\nContent-Length: 0\r\n\r\n")
        .chunk(b"never read")
        .build();

    let raw = scenario.read(1024).unwrap();

    assert_eq!(raw.framing(), Framing::ContentLength(0));
    assert_eq!(scenario.reads(), 1);

    let response = parse_response(&raw).unwrap();
    assert_eq!(response.code(), 204);
    assert_eq!(response.body(), "");
}

#[test]
fn closed_before_declared_length() {
    let scenario = Scenario::builder()
        .chunk(HEAD)
        .chunk(b"abcdef")
        .build();

    let raw = scenario.read(1024).unwrap();

    assert_eq!(raw.framing(), Framing::ContentLength(26));
    assert!(raw.is_truncated());
    assert_eq!(raw.missing(), 20);

    let response = parse_response(&raw).unwrap();
    assert!(response.is_truncated());
    assert_eq!(response.body(), "abcdef");
}

#[test]
fn input_after_complete_is_ignored() {
    let mut reader = ResponseReader::new();
    reader.push(&full()).unwrap();
    assert!(reader.is_complete());

    reader.push(b"more").unwrap();
    assert_eq!(reader.buffered(), full());
}

#[test]
fn scenario_get_hello() {
    let scenario = Scenario::builder()
        .chunk(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello")
        .build();

    let response = scenario.client().get("http://example.com/").unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.body(), "hello");
}

#[test]
fn negative_content_length_completes_at_headers() {
    let mut reader = ResponseReader::new();

    reader
        .push(b"HTTP/1.1 200 OK\r\nContent-Length: -1\r\n\r\nhi")
        .unwrap();

    assert!(reader.is_complete());

    let raw = reader.finish();
    assert_eq!(raw.framing(), Framing::ContentLength(0));
    assert!(!raw.is_truncated());
    assert_eq!(parse_response(&raw).unwrap().body(), "hi");
}
