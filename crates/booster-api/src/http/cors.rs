//! CORS policy for browser clients.
//!
//! Origins are an exact-match allow-list. Methods and headers are wildcard,
//! but `*` cannot be sent alongside `Access-Control-Allow-Credentials: true`,
//! so the wildcard is expressed by mirroring what the preflight asks for.
//!
//! Requests from other origins are still served; they just get no
//! `Access-Control-Allow-Origin`, and the browser refuses to expose the
//! response.
//!
//! `CorsLayer` answers every `OPTIONS` request itself. Only real preflights
//! (`Origin` + `Access-Control-Request-Method`) should be answered there;
//! [`route_bare_options`] sends the rest to the router so they get the usual
//! 404/405.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use booster_types::config::CorsConfig;

/// Build the CORS layer from a [`CorsConfig`].
///
/// Matching goes through [`CorsConfig::allows`], so entries that can never
/// equal a browser origin (such as `*`) simply match nothing.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let policy = config.clone();
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts| {
        origin.to_str().is_ok_and(|o| policy.allows(o))
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
}

/// Whether the request is a CORS preflight.
pub fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// State for [`route_bare_options`]: the router without the CORS layer.
#[derive(Clone)]
pub struct BareOptions {
    pub routes: Router,
    pub cors: Arc<CorsConfig>,
}

/// Middleware placed outside `CorsLayer`.
///
/// A non-preflight `OPTIONS` skips the CORS short-circuit and is dispatched to
/// the routes directly. Allowed origins still get their allow headers.
pub async fn route_bare_options(
    State(bare): State<BareOptions>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::OPTIONS || is_preflight(req.method(), req.headers()) {
        return next.run(req).await;
    }

    let origin = req.headers().get(header::ORIGIN).cloned();
    let mut resp = match bare.routes.oneshot(req).await {
        Ok(resp) => resp,
        Err(never) => match never {},
    };

    let headers = resp.headers_mut();
    headers.append(header::VARY, HeaderValue::from_static("origin"));
    if let Some(origin) = origin {
        if origin.to_str().is_ok_and(|o| bare.cors.allows(o)) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            if bare.cors.allow_credentials {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
        }
    }
    resp
}
