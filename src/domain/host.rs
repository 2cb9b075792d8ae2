use serde::Serialize;

use super::metrics::{bytes_to_gib, bytes_to_mib, DiskMetrics, LoadAverage, MemoryMetrics, NetworkMetrics};

/// Total/used/percentage triple as shown for memory and disk
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageSummary {
    #[serde(rename = "Total")]
    pub total_gib: f64,
    #[serde(rename = "Used")]
    pub used_gib: f64,
    #[serde(rename = "Percentage")]
    pub percent: f64,
}

impl From<&MemoryMetrics> for UsageSummary {
    fn from(mem: &MemoryMetrics) -> Self {
        Self {
            total_gib: bytes_to_gib(mem.total_bytes),
            used_gib: bytes_to_gib(mem.used_bytes),
            percent: mem.usage_percent(),
        }
    }
}

impl From<&DiskMetrics> for UsageSummary {
    fn from(disk: &DiskMetrics) -> Self {
        Self {
            total_gib: bytes_to_gib(disk.total_bytes),
            used_gib: bytes_to_gib(disk.used_bytes),
            percent: disk.usage_percent(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkSummary {
    #[serde(rename = "Bytes Sent")]
    pub sent_mib: f64,
    #[serde(rename = "Bytes Received")]
    pub received_mib: f64,
}

impl From<&NetworkMetrics> for NetworkSummary {
    fn from(net: &NetworkMetrics) -> Self {
        Self {
            sent_mib: bytes_to_mib(net.tx_bytes),
            received_mib: bytes_to_mib(net.rx_bytes),
        }
    }
}

/// Operating system descriptors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsInfo {
    #[serde(rename = "Uptime")]
    pub uptime: String,
    #[serde(rename = "Average Load")]
    pub load_average: LoadAverage,
    #[serde(rename = "Kernel Version")]
    pub kernel_version: String,
    #[serde(rename = "Architecture")]
    pub architecture: Architecture,
}

/// Pointer width and executable linkage format of this build, e.g. `["64bit", "ELF"]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Architecture(pub String, pub String);

impl Architecture {
    pub fn current() -> Self {
        let bits = format!("{}bit", usize::BITS);
        let linkage = if cfg!(target_os = "windows") {
            "WindowsPE"
        } else if cfg!(target_vendor = "apple") {
            ""
        } else {
            "ELF"
        };
        Self(bits, linkage.to_string())
    }
}

/// Point-in-time resource usage of the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostMetrics {
    pub cpu_percent: f64,
    pub memory: UsageSummary,
    pub disk: UsageSummary,
    pub net: NetworkSummary,
    pub os: OsInfo,
}
