/// Log raw protocol bytes, one trace line per CRLF-terminated line.
pub(crate) fn log_data(data: &[u8]) {
    if !log_enabled!(log::Level::Trace) {
        return;
    }

    for line in data.split_inclusive(|b| *b == b'\n') {
        trace!("{:?}", String::from_utf8_lossy(line));
    }
}

/// Find the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
