//! Periodic backend connectivity probe.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::Fetcher;

pub const DEFAULT_HEALTH_INTERVAL: Duration = Duration::from_secs(30);

/// Connectivity flag refreshed by a background probe.
pub struct HealthMonitor {
    connected: Arc<AtomicBool>,
    checking: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl HealthMonitor {
    /// Probe now and then every `every`.
    pub fn start(probe: Fetcher<()>, every: Duration) -> Self {
        let connected = Arc::new(AtomicBool::new(false));
        let checking = Arc::new(AtomicBool::new(true));
        let cancel = CancellationToken::new();

        tokio::spawn(run_health_loop(
            probe,
            every,
            connected.clone(),
            checking.clone(),
            cancel.clone(),
        ));

        Self {
            connected,
            checking,
            cancel,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// True until the first probe has finished.
    pub fn is_checking(&self) -> bool {
        self.checking.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_health_loop(
    probe: Fetcher<()>,
    every: Duration,
    connected: Arc<AtomicBool>,
    checking: Arc<AtomicBool>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let ok = match probe().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Health check failed");
                false
            }
        };

        if cancel.is_cancelled() {
            break;
        }

        let was = connected.swap(ok, Ordering::SeqCst);
        if was != ok {
            debug!(connected = ok, "Backend connectivity changed");
        }
        checking.store(false, Ordering::SeqCst);
    }
}
