// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::{sync::OnceLock, time::Duration};
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::SmartIpKeyExtractor,
};

pub type ThrottleLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Seconds for one spent request slot to come back. After the burst a
/// client IP is held to one request per this many seconds.
pub const REPLENISH_SECS: u64 = 10;
pub const BURST_SIZE: u32 = 20;

fn throttle_config() -> Option<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>> {
    GovernorConfigBuilder::default()
        .period(Duration::from_secs(REPLENISH_SECS))
        .burst_size(BURST_SIZE)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
}

/// Per-IP limiter shared by the unauthenticated write routes (login and
/// public lead submission). `None` when the governor rejects the quota, in
/// which case the routes are served unthrottled.
pub fn rate_limit_layer() -> Option<ThrottleLayer> {
    static RATE_LIMITER: OnceLock<Option<ThrottleLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| match throttle_config() {
            Some(config) => Some(GovernorLayer::new(config)),
            None => {
                tracing::error!(
                    replenish_secs = REPLENISH_SECS,
                    burst = BURST_SIZE,
                    "invalid rate limit quota; throttling disabled"
                );
                None
            }
        })
        .clone()
}
