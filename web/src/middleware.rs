//! Axum middleware for request tracking.
//!
//! [`correlation_id`] gives every request a correlation ID:
//!
//! 1. **Extract** it from the `X-Correlation-ID` header (or generate a UUID v4)
//! 2. **Store** it in request extensions for handler access
//! 3. **Run** the rest of the stack inside an `http_request` span
//! 4. **Echo** it in the response's `X-Correlation-ID` header
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, Router};
//! use listkeeper_web::middleware::correlation_id;
//!
//! let app = Router::new()
//!     .route("/lists", get(list_index))
//!     .layer(middleware::from_fn(correlation_id));
//! ```

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Correlation ID middleware, for use with `axum::middleware::from_fn`.
pub async fn correlation_id(mut req: Request, next: Next) -> Response {
    let correlation_id = req
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    req.extensions_mut().insert(correlation_id);

    let span = tracing::info_span!(
        "http_request",
        correlation_id = %correlation_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response
            .headers_mut()
            .insert(CORRELATION_ID_HEADER, header_value);
    }

    response
}
