use crate::config::MonitorConfig;
use crate::probe_executor::ProbeExecutor;
use crate::result_logger;

/// The polling loop: probes the router and the external server in sequence
/// every tick, forever.
pub struct Monitor {
    config: MonitorConfig,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Polls until the process is terminated externally. There is no
    /// internal shutdown path.
    pub async fn run(&self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.config.interval).await;
        }
    }

    /// One tick: probe the router, then the external server, recording each
    /// outcome. Sequential on purpose, so sink lines interleave
    /// deterministically and no append lock is needed.
    pub async fn run_cycle(&self) {
        self.probe_and_record(&self.config.router).await;
        self.probe_and_record(&self.config.external_server).await;
    }

    async fn probe_and_record(&self, address: &str) {
        let outcome = ProbeExecutor::probe(address, self.config.timeout).await;
        log::debug!(
            "probed {}: {} (roundtrip {:?} ms)",
            outcome.address,
            outcome.status,
            outcome.roundtrip_ms
        );

        // A missed log write must not end the monitoring process.
        if let Err(e) = result_logger::record(
            &outcome,
            &self.config.success_file,
            &self.config.failure_file,
        ) {
            log::warn!("failed to append record for {}: {e}", outcome.address);
        }
    }
}
