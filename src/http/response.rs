//! HTTP response building module
//!
//! Every response is fully buffered and built in one pass. Builders fall
//! back to an empty response with an error log line if header assembly
//! fails, so the request path never panics.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response carrying the embedded HTML document
///
/// The document is a `&'static str`, so the body is handed to hyper
/// without copying. HEAD requests get the same status and headers with an
/// empty body; Content-Length still reflects the full entity.
pub fn build_html_response(document: &'static str, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(document.as_bytes())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", document.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 health response: `{"status":"ok","uptime":<seconds>}`
pub fn build_health_response(uptime_secs: u64, is_head: bool) -> Response<Full<Bytes>> {
    let json = serde_json::json!({
        "status": "ok",
        "uptime": uptime_secs,
    })
    .to_string();

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
