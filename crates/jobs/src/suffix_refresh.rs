use pdns_backend_application::services::PublicSuffixTable;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 86400;

/// Periodically re-downloads the public suffix list.
///
/// The first refresh happens one interval after start; the table is loaded
/// lazily on first use before that. A failed download keeps the current
/// table in service.
pub struct SuffixRefreshJob {
    table: Arc<PublicSuffixTable>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SuffixRefreshJob {
    pub fn new(table: Arc<PublicSuffixTable>) -> Self {
        Self {
            table,
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting public suffix refresh job"
        );

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SuffixRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.table.refresh().await {
                            Ok(entries) => {
                                info!(entries, "Public suffix list refreshed");
                            }
                            Err(e) => {
                                error!(error = %e, "Public suffix refresh failed, keeping current table");
                            }
                        }
                    }
                }
            }
        });
    }
}
