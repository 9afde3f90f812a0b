//! Byte-range request evaluation.
//!
//! Single-range `bytes=` headers per RFC 7233. Anything this module cannot
//! parse is treated as "no range" and the client gets the whole file.

/// Inclusive byte range within a file of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes the range covers.
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of evaluating a `Range` header against a file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable range; serve the whole file.
    Full,
    /// Serve the given range as 206 Partial Content.
    Partial(ByteRange),
    /// Range lies outside the file; answer 416.
    Unsatisfiable,
}

/// Evaluate a `Range` header value against the size of the file being served.
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
/// Multi-range requests and non-`bytes` units are ignored rather than
/// rejected. A syntactically valid range that cannot be satisfied (start at
/// or past EOF, inverted bounds, any range of an empty file) is
/// `Unsatisfiable`.
pub fn evaluate(header: Option<&str>, size: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };
    // Only single ranges are served.
    if spec.contains(',') {
        return RangeOutcome::Full;
    }
    let Some((start, end)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start, end) = (start.trim(), end.trim());

    if start.is_empty() {
        suffix_range(end, size)
    } else {
        bounded_range(start, end, size)
    }
}

/// `bytes=-N`: the last N bytes of the file.
fn suffix_range(count: &str, size: usize) -> RangeOutcome {
    let Ok(count) = count.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if count == 0 || size == 0 {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange {
        start: size.saturating_sub(count),
        end: size - 1,
    })
}

/// `bytes=N-` and `bytes=N-M`.
fn bounded_range(start: &str, end: &str, size: usize) -> RangeOutcome {
    let Ok(start) = start.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= size {
        return RangeOutcome::Unsatisfiable;
    }
    let end = if end.is_empty() {
        size - 1
    } else {
        match end.parse::<usize>() {
            // An end past EOF is clamped, not rejected.
            Ok(e) => e.min(size - 1),
            Err(_) => return RangeOutcome::Full,
        }
    };
    if start > end {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange { start, end })
}
