//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Creates a fully open CORS layer.
///
/// Any origin, method and header is accepted and credentials are allowed;
/// the request origin is mirrored back in `Access-Control-Allow-Origin`.
pub fn layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
