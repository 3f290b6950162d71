// LogMonitor - core/tail.rs
//
// Tail-and-filter: scan a whole text stream line by line, keep the lines
// containing a case-insensitive substring, and retain the last
// `TAIL_LINE_CAPACITY` of them in arrival order.
//
// Core layer: operates on any `BufRead`; opening the file is the caller's job.
//
// Encoding: bytes are decoded as lossy UTF-8 per line, so a stray invalid
// byte never aborts the scan. Both `\n` and `\r\n` terminators are accepted.

use crate::util::constants::TAIL_LINE_CAPACITY;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Compiled substring filter plus the trailing window size.
#[derive(Debug, Clone)]
pub struct TailFilter {
    /// Lowercased, trimmed needle. Empty = every line passes.
    needle: String,
    /// Maximum number of kept lines.
    capacity: usize,
}

impl TailFilter {
    /// Build a filter from raw input-field text with the standard capacity.
    ///
    /// Surrounding whitespace is ignored, so a whitespace-only filter is the
    /// empty filter.
    pub fn new(filter: &str) -> Self {
        Self::with_capacity(filter, TAIL_LINE_CAPACITY)
    }

    /// Build a filter with an explicit trailing window size.
    pub fn with_capacity(filter: &str, capacity: usize) -> Self {
        Self {
            needle: filter.trim().to_lowercase(),
            capacity,
        }
    }

    /// True if this filter lets every line through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Trailing window size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Case-insensitive substring test for a single line.
    pub fn matches(&self, line: &str) -> bool {
        self.needle.is_empty() || line.to_lowercase().contains(&self.needle)
    }
}

/// Scan `reader` to EOF and return the last matching lines, oldest first.
///
/// Line terminators are stripped. A final line without a terminator still
/// counts as a line; an empty stream yields no lines.
pub fn tail_lines<R: BufRead>(mut reader: R, filter: &TailFilter) -> io::Result<Vec<String>> {
    let mut window: VecDeque<String> = VecDeque::with_capacity(filter.capacity);
    if filter.capacity == 0 {
        return Ok(Vec::new());
    }

    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }

        let mut line = buf.as_slice();
        if let Some(stripped) = line.strip_suffix(b"\n") {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }

        let text = String::from_utf8_lossy(line);
        if !filter.matches(&text) {
            continue;
        }

        if window.len() == filter.capacity {
            window.pop_front();
        }
        window.push_back(text.into_owned());
    }

    Ok(window.into())
}

/// Scan `reader` and return the retained lines joined with `\n`.
pub fn tail_and_filter<R: BufRead>(reader: R, filter: &TailFilter) -> io::Result<String> {
    Ok(tail_lines(reader, filter)?.join("\n"))
}
