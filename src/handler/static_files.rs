//! Static file responder.
//!
//! Resolves a request path inside the web root and answers with the file's
//! bytes, a directory redirect, or the matching error status. Requests are
//! independent of each other; the only shared resource is the read-only
//! filesystem.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::SiteConfig;
use crate::handler::router::RequestContext;
use crate::http::range::{self, RangeOutcome};
use crate::http::{mime, response};
use crate::logger;

/// Where a request path landed inside the root.
enum Resolved {
    /// A regular file to serve.
    File(PathBuf),
    /// A directory requested without its trailing slash.
    Redirect(String),
    /// Nothing servable at this path.
    NotFound,
}

/// Answer a GET/HEAD request from the site's web root.
pub async fn serve(ctx: &RequestContext<'_>, site: &SiteConfig) -> Response<Full<Bytes>> {
    match resolve(ctx.path, site).await {
        Resolved::Redirect(location) => response::moved_permanently(&location),
        Resolved::NotFound => response::not_found(),
        Resolved::File(path) => match fs::read(&path).await {
            Ok(content) => file_response(ctx, &path, content),
            Err(err) => read_error_response(&path, &err),
        },
    }
}

/// Resolve a request path to a file inside the root.
async fn resolve(request_path: &str, site: &SiteConfig) -> Resolved {
    let Some(relative) = sanitize(request_path) else {
        logger::log_warning(&format!("Rejected path traversal attempt: {request_path}"));
        return Resolved::NotFound;
    };

    let root = match fs::canonicalize(&site.root).await {
        Ok(root) => root,
        Err(err) => {
            logger::log_warning(&format!("Web root '{}' not accessible: {err}", site.root));
            return Resolved::NotFound;
        }
    };

    let mut target = root.join(relative);

    if fs::metadata(&target).await.is_ok_and(|m| m.is_dir()) {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        match index_file(&target, &site.index_files).await {
            Some(index) => target = index,
            None => return Resolved::NotFound,
        }
    }

    // A symlink under the root may still point outside it; the canonical
    // path is what must stay contained.
    let Ok(canonical) = fs::canonicalize(&target).await else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Rejected path escaping the web root: {request_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    Resolved::File(canonical)
}

/// Strip the leading slash and reduce the path to plain child segments.
///
/// Returns `None` when a `..` segment would climb toward the root.
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => relative.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(relative)
}

/// First configured index file that exists inside `dir`.
async fn index_file(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    for name in index_files {
        let candidate = dir.join(name);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Some(candidate);
        }
    }
    None
}

/// Build the success response for a file's content, honoring Range and HEAD.
fn file_response(
    ctx: &RequestContext<'_>,
    path: &Path,
    content: Vec<u8>,
) -> Response<Full<Bytes>> {
    let content_type = mime::content_type_for(path);
    let total = content.len();

    match range::evaluate(ctx.range.as_deref(), total) {
        RangeOutcome::Full => response::ok(Bytes::from(content), content_type, ctx.is_head),
        RangeOutcome::Partial(r) => {
            let slice = Bytes::from(content[r.start..=r.end].to_vec());
            response::partial(slice, content_type, r, total, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => response::range_not_satisfiable(total),
    }
}

/// Map a file read failure to the response the client sees.
fn read_error_response(path: &Path, err: &std::io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        // Lost a race with a delete; same answer as never having existed.
        ErrorKind::NotFound => response::not_found(),
        ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied reading '{}'", path.display()));
            response::forbidden()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {err}", path.display()));
            response::internal_error()
        }
    }
}
