//! Per-client request limiting for the `/api` routes

use crate::api::error::ErrorBody;
use crate::config::RateLimitConfig;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Body returned with every rejected request
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, slow down.";

/// Request budget keyed by client address
///
/// A client may spend `max-requests` at once; each spent request comes
/// back one full `window-secs` later. No span of `window-secs` ever
/// admits more than `max-requests`.
pub struct RateLimit {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
}

impl RateLimit {
    pub fn new(config: &RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(Duration::from_secs(config.window_secs))
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Spends one request from `client`'s budget, false when it is exhausted
    pub fn check(&self, client: IpAddr) -> bool {
        self.limiter.check_key(&client).is_ok()
    }

    /// Drops bookkeeping for clients whose budget has fully refilled
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}

/// Middleware rejecting requests over the client's budget with 429
pub async fn limit_requests(
    State(limit): State<Arc<RateLimit>>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !limit.check(client) {
        tracing::warn!("Rate limit exceeded for {} on {}", client, request.uri().path());
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorBody::new(RATE_LIMIT_MESSAGE)),
        )
            .into_response();
    }

    next.run(request).await
}
