use std::time::Duration;

/// Wait `delay` on whichever timer the platform has.
pub(crate) async fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
