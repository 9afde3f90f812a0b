//! Response builders.
//!
//! One constructor per status the server can send. Builders never panic:
//! header assembly failures are logged and degrade to an empty response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http::range::ByteRange;
use crate::logger;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// 200 OK carrying a whole file.
pub fn ok(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", length)
        .header("Accept-Ranges", "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("200", &e))
}

/// 206 Partial Content carrying one byte range of a file.
pub fn partial(
    data: Bytes,
    content_type: &str,
    range: ByteRange,
    total: usize,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", range.len())
        .header(
            "Content-Range",
            format!("bytes {}-{}/{total}", range.start, range.end),
        )
        .header("Accept-Ranges", "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("206", &e))
}

/// 301 Moved Permanently, for directory requests missing their trailing slash.
pub fn moved_permanently(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from("Moved Permanently\n")))
        .unwrap_or_else(|e| fallback("301", &e))
}

/// 403 Forbidden, when the filesystem denies the read.
pub fn forbidden() -> Response<Full<Bytes>> {
    plain_text(403, "403 Forbidden\n")
}

/// 404 Not Found.
pub fn not_found() -> Response<Full<Bytes>> {
    plain_text(404, "404 page not found\n")
}

/// 405 Method Not Allowed; the server is read-only.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Allow", "GET, HEAD")
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from("405 Method Not Allowed\n")))
        .unwrap_or_else(|e| fallback("405", &e))
}

/// 416 Range Not Satisfiable, advertising the actual file size.
pub fn range_not_satisfiable(size: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Range", format!("bytes */{size}"))
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from("416 Range Not Satisfiable\n")))
        .unwrap_or_else(|e| fallback("416", &e))
}

/// 500 Internal Server Error, for read failures that are neither missing
/// files nor permission problems.
pub fn internal_error() -> Response<Full<Bytes>> {
    plain_text(500, "500 Internal Server Error\n")
}

fn plain_text(status: u16, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| fallback(&status.to_string(), &e))
}

/// Last resort when a builder rejects its own input.
fn fallback(status: &str, error: &hyper::http::Error) -> Response<Full<Bytes>> {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
    Response::new(Full::new(Bytes::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_carries_length_and_range_support() {
        let resp = ok(Bytes::from("hello"), "text/plain; charset=utf-8", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["Accept-Ranges"], "bytes");
    }

    #[test]
    fn head_keeps_the_get_headers() {
        let resp = ok(Bytes::from("hello"), "text/html; charset=utf-8", true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
    }

    #[test]
    fn partial_reports_the_served_slice() {
        let resp = partial(
            Bytes::from("hel"),
            "text/plain; charset=utf-8",
            ByteRange { start: 0, end: 2 },
            5,
            false,
        );
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 0-2/5");
        assert_eq!(resp.headers()["Content-Length"], "3");
    }

    #[test]
    fn redirect_sets_location() {
        let resp = moved_permanently("/assets/");
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/assets/");
    }

    #[test]
    fn method_not_allowed_advertises_read_methods() {
        let resp = method_not_allowed();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }

    #[test]
    fn unsatisfiable_range_reports_file_size() {
        let resp = range_not_satisfiable(1234);
        assert_eq!(resp.status(), 416);
        assert_eq!(resp.headers()["Content-Range"], "bytes */1234");
    }

    #[test]
    fn error_statuses() {
        assert_eq!(not_found().status(), 404);
        assert_eq!(forbidden().status(), 403);
        assert_eq!(internal_error().status(), 500);
    }
}
