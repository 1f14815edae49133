//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is on exact path
//! match only; the request method never causes a rejection. HEAD requests
//! receive the matched response with an empty body. Request bodies,
//! headers and query strings are never inspected for routing.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *req.method() == Method::HEAD,
    };
    let response = route_request(&ctx, &state);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = http_version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on exact path match
///
/// Three fixed routes: health probe, embedded document, 404 for
/// everything else. Each request is stateless and independent.
fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match ctx.path {
        "/health" => http::build_health_response(state.uptime_secs(), ctx.is_head),
        "/" | "/index.html" => http::build_html_response(state.document, ctx.is_head),
        _ => http::build_404_response(),
    }
}

/// Exact size of the fully buffered response body
fn body_size(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

/// Version label for access log entries
fn http_version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else if version == hyper::Version::HTTP_3 {
        "3"
    } else if version == hyper::Version::HTTP_09 {
        "0.9"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{test_config, AppState, PageVariant};
    use http_body_util::BodyExt;

    fn test_state() -> AppState {
        AppState::new(&test_config())
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let collected = response.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_and_index_serve_identical_document() {
        let state = test_state();

        let root = route_request(
            &RequestContext {
                path: "/",
                is_head: false,
            },
            &state,
        );
        let index = route_request(
            &RequestContext {
                path: "/index.html",
                is_head: false,
            },
            &state,
        );

        assert_eq!(root.status(), 200);
        assert_eq!(index.status(), 200);
        assert_eq!(root.headers()["Content-Type"], "text/html; charset=utf-8");

        let root_body = body_string(root).await;
        let index_body = body_string(index).await;
        assert_eq!(root_body, state.document);
        assert_eq!(root_body, index_body);
    }

    #[tokio::test]
    async fn test_face_detect_variant_is_served() {
        let mut config = test_config();
        config.page.variant = PageVariant::FaceDetect;
        let state = AppState::new(&config);

        let response = route_request(
            &RequestContext {
                path: "/",
                is_head: false,
            },
            &state,
        );
        assert!(body_string(response).await.contains("face-api.min.js"));
    }

    #[tokio::test]
    async fn test_health_returns_ok_with_uptime() {
        let state = test_state();
        let response = route_request(
            &RequestContext {
                path: "/health",
                is_head: false,
            },
            &state,
        );

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "application/json");

        let parsed: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert!(parsed["uptime"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_unknown_paths_return_404() {
        let state = test_state();
        for path in ["/nonexistent", "/health/", "/Index.html", "/favicon.ico", "/../"] {
            let response = route_request(
                &RequestContext {
                    path,
                    is_head: false,
                },
                &state,
            );
            assert_eq!(response.status(), 404, "path {path} should be 404");
            assert!(!body_string(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_head_gets_empty_body_with_full_length() {
        let state = test_state();
        let response = route_request(
            &RequestContext {
                path: "/",
                is_head: true,
            },
            &state,
        );

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Length"],
            state.document.len().to_string().as_str()
        );
        assert!(body_string(response).await.is_empty());
    }
}
