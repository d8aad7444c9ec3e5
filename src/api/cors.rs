use axum::http::Method;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::any())
        .allow_origin(AllowOrigin::any())
}
