use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{DiskMetrics, LoadAverage, MemoryMetrics, NetworkMetrics};

use super::SourceResult;

/// Port for fetching host resource counters
#[async_trait]
pub trait SystemSource: Send + Sync {
    /// CPU utilization over `window`. Waits for the whole window before returning.
    async fn cpu_percent(&self, window: Duration) -> SourceResult<f64>;

    /// Get memory metrics for the host
    async fn memory(&self) -> SourceResult<MemoryMetrics>;

    /// Usage of the filesystem mounted at `path`
    async fn disk_usage(&self, path: &Path) -> SourceResult<DiskMetrics>;

    /// Cumulative bytes over all network interfaces
    async fn network_totals(&self) -> SourceResult<NetworkMetrics>;

    /// Get system load average
    async fn load_average(&self) -> SourceResult<LoadAverage>;
}
