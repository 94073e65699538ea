//! Middleware for logging requests and responses.

use axum::{
    Router,
    body::Body,
    extract::{MatchedPath, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::trace::TraceLayer;

/// The number of bytes of a request or response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The form fields whose values are never written to the logs.
const REDACTED_FIELDS: [&str; 1] = ["email"];

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body_text) = read_body_text(body).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    if parts.method == axum::http::Method::POST
        && parts
            .headers
            .get(CONTENT_TYPE)
            .is_some_and(|content_type| content_type == "application/x-www-form-urlencoded")
    {
        let display_text = REDACTED_FIELDS
            .iter()
            .fold(body_text.clone(), |text, field| redact_field(&text, field));
        log_request(&parts, &display_text);
    } else {
        log_request(&parts, &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let Some(body_text) = read_body_text(body).await else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

/// Add a tracing span with the method, URI and matched path to each request.
///
/// Failures are not logged by the layer since handlers log errors where they occur.
pub fn add_tracing_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                let method = request.method();
                let uri = request.uri();

                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                tracing::debug_span!("request", %method, %uri, matched_path)
            })
            .on_failure(()),
    )
}

fn redact_field(form_text: &str, field_name: &str) -> String {
    let key = format!("{field_name}=");

    form_text
        .split('&')
        .map(|pair| {
            if pair.starts_with(&key) {
                format!("{key}********")
            } else {
                pair.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn read_body_text(body: Body) -> Option<String> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).to_string())
}

/// The longest prefix of `text` that is at most [LOG_BODY_LENGTH_LIMIT] bytes
/// and ends on a character boundary.
fn truncate(text: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod logging_tests {
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;

    use crate::logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware, redact_field, truncate};

    #[test]
    fn redacts_email() {
        let text = redact_field("username=alice&email=alice%40example.com", "email");

        assert_eq!(text, "username=alice&email=********");
    }

    #[test]
    fn redacts_only_exact_field() {
        let text = redact_field("email_hint=a&email=b&x=1", "email");

        assert_eq!(text, "email_hint=a&email=********&x=1");
    }

    #[test]
    fn leaves_text_without_field() {
        assert_eq!(redact_field("name=Rent", "email"), "name=Rent");
    }

    #[test]
    fn truncates_on_char_boundary() {
        let text = "é".repeat(LOG_BODY_LENGTH_LIMIT);

        let truncated = truncate(&text);

        assert!(truncated.len() <= LOG_BODY_LENGTH_LIMIT);
        assert!(text.starts_with(truncated));
    }

    #[tokio::test]
    async fn passes_body_through() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app);

        let response = server
            .post("/echo")
            .content_type("application/x-www-form-urlencoded")
            .text("username=alice&email=alice%40example.com")
            .await;

        response.assert_status_ok();
        response.assert_text("username=alice&email=alice%40example.com");
    }
}
