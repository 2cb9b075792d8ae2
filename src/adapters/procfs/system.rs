use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{DiskMetrics, LoadAverage, MemoryMetrics, NetworkMetrics};
use crate::ports::{SourceResult, SourceUnavailable, SystemSource};

use super::parser::{self, CpuStat};
use super::ProcfsConfig;

/// System source implementation using procfs
pub struct ProcfsSystemSource {
    config: ProcfsConfig,
}

impl ProcfsSystemSource {
    pub fn new(config: ProcfsConfig) -> Self {
        Self { config }
    }

    fn read_proc(&self, origin: &'static str, file: &str) -> SourceResult<String> {
        let path = self.config.proc_path.join(file);
        fs::read_to_string(&path)
            .map_err(|e| SourceUnavailable::new(origin, format!("{}: {}", path.display(), e)))
    }

    fn read_cpu_stat(&self) -> SourceResult<CpuStat> {
        let content = self.read_proc("cpu", "stat")?;
        parser::parse_cpu_stat(&content).map_err(|e| SourceUnavailable::new("cpu", e))
    }
}

/// Used memory the way `free` reports it: neither free nor buffer/page cache.
fn used_memory(meminfo: &HashMap<String, u64>) -> u64 {
    let field = |key: &str| meminfo.get(key).copied().unwrap_or(0);

    let total = field("MemTotal");
    let free = field("MemFree");
    let cached = field("Cached") + field("SReclaimable");
    let buffers = field("Buffers");

    match total.checked_sub(free + cached + buffers) {
        Some(used) => used,
        None => total.saturating_sub(free),
    }
}

#[async_trait]
impl SystemSource for ProcfsSystemSource {
    async fn cpu_percent(&self, window: Duration) -> SourceResult<f64> {
        let before = self.read_cpu_stat()?;
        tokio::time::sleep(window).await;
        let after = self.read_cpu_stat()?;

        Ok(after.busy_percent_since(&before))
    }

    async fn memory(&self) -> SourceResult<MemoryMetrics> {
        let content = self.read_proc("memory", "meminfo")?;
        let meminfo = parser::parse_meminfo(&content).map_err(|e| SourceUnavailable::new("memory", e))?;

        let total = *meminfo.get("MemTotal").unwrap_or(&0);
        // Kernels before 3.14 have no MemAvailable
        let available = meminfo.get("MemAvailable").copied().unwrap_or_else(|| {
            meminfo.get("MemFree").copied().unwrap_or(0)
                + meminfo.get("Cached").copied().unwrap_or(0)
                + meminfo.get("Buffers").copied().unwrap_or(0)
        });

        Ok(MemoryMetrics::new(total, used_memory(&meminfo), available))
    }

    async fn disk_usage(&self, path: &Path) -> SourceResult<DiskMetrics> {
        let stat = nix::sys::statvfs::statvfs(path)
            .map_err(|e| SourceUnavailable::new("disk", format!("{}: {}", path.display(), e)))?;

        let fragment_size = stat.fragment_size() as u64;
        let total_bytes = stat.blocks() as u64 * fragment_size;
        let free_bytes = stat.blocks_free() as u64 * fragment_size;
        let available_bytes = stat.blocks_available() as u64 * fragment_size;
        let used_bytes = total_bytes.saturating_sub(free_bytes);

        Ok(DiskMetrics::new(total_bytes, used_bytes, available_bytes))
    }

    async fn network_totals(&self) -> SourceResult<NetworkMetrics> {
        let net_class_path = self.config.sys_path.join("class/net");
        let entries = fs::read_dir(&net_class_path)
            .map_err(|e| SourceUnavailable::new("network", format!("{}: {}", net_class_path.display(), e)))?;

        let mut totals = NetworkMetrics::zero();

        for entry in entries.flatten() {
            let stats_dir = entry.path().join("statistics");

            if let Ok((rx_bytes, tx_bytes)) = parser::parse_net_stats(&stats_dir) {
                totals.rx_bytes += rx_bytes;
                totals.tx_bytes += tx_bytes;
            }
        }

        Ok(totals)
    }

    async fn load_average(&self) -> SourceResult<LoadAverage> {
        let content = self.read_proc("load average", "loadavg")?;
        let (one, five, fifteen) =
            parser::parse_loadavg(&content).map_err(|e| SourceUnavailable::new("load average", e))?;

        Ok(LoadAverage::new(one, five, fifteen))
    }
}
