mod claims;
mod permissions;

use crate::StateTrait;
use axum::{http::header::AUTHORIZATION, Router};
pub use claims::*;
pub use permissions::*;
use std::iter;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::TraceLayer,
    ServiceBuilderExt,
};

/// The admin interface is called from arbitrary tooling, so any origin may use
/// it as long as it carries a staff token.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wraps every route of the service and attaches the shared state.
pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let layers = ServiceBuilder::new()
        .catch_panic()
        .sensitive_headers(iter::once(AUTHORIZATION))
        .set_x_request_id(MakeRequestUuid)
        .layer(TraceLayer::new_for_http())
        .propagate_x_request_id()
        .layer(GetClaimsLayer::new(state.clone()))
        .decompression()
        .compression()
        .layer(cors());

    router.layer(layers).with_state(state)
}
