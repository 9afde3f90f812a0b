//! Request dispatch.
//!
//! Validates the method, captures what the responder needs from the
//! request, and hands off to the static file responder. There is a single
//! route: everything maps into the web root.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::Config;
use crate::handler::static_files;
use crate::http::response;
use crate::logger;

/// Per-request data the responder works from.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub range: Option<String>,
}

/// Entry point for every request on a connection.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if let Some(rejection) = check_method(req.method()) {
        return Ok(rejection);
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *req.method() == Method::HEAD,
        range: req
            .headers()
            .get("range")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    Ok(static_files::serve(&ctx, &config.site).await)
}

/// Reject anything that is not a read: the server serves GET and HEAD only.
fn check_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(response::method_not_allowed())
        }
    }
}
