//! Mock Backend API
//!
//! Stand-ins for the future backend endpoints, organized by domain.
//! Each call waits for a configurable latency to behave like a round-trip.

mod ids;
mod items;

use std::time::Duration;

pub use ids::*;
pub use items::*;

/// Wait like a network call would. Zero latency completes immediately.
async fn simulate_latency(latency: Duration) {
    if latency.is_zero() {
        return;
    }
    gloo_timers::future::sleep(latency).await;
}
