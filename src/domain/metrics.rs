use serde::Serialize;

/// Raw memory counters for the host, in bytes
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryMetrics {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

impl MemoryMetrics {
    pub fn new(total_bytes: u64, used_bytes: u64, available_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            available_bytes,
        }
    }

    /// Share of memory not available to new allocations.
    pub fn usage_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        let in_use = self.total_bytes.saturating_sub(self.available_bytes);
        round_to(in_use as f64 / self.total_bytes as f64 * 100.0, 1)
    }
}

/// Raw filesystem counters for one mount point, in bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DiskMetrics {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

impl DiskMetrics {
    pub fn new(total_bytes: u64, used_bytes: u64, available_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            available_bytes,
        }
    }

    /// Usage relative to what an unprivileged user can reach (reserved blocks excluded).
    pub fn usage_percent(&self) -> f64 {
        let reachable = self.used_bytes + self.available_bytes;
        if reachable == 0 {
            return 0.0;
        }
        round_to(self.used_bytes as f64 / reachable as f64 * 100.0, 1)
    }
}

/// Cumulative network counters summed over all interfaces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkMetrics {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl NetworkMetrics {
    pub fn new(rx_bytes: u64, tx_bytes: u64) -> Self {
        Self { rx_bytes, tx_bytes }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// System load average (1, 5, 15 minutes), serialized as a 3-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadAverage {
    pub fn new(one: f64, five: f64, fifteen: f64) -> Self {
        Self { one, five, fifteen }
    }

    /// Placeholder reported when the host offers no load average.
    pub fn unavailable() -> Self {
        Self::new(-1.0, -1.0, -1.0)
    }
}

impl From<LoadAverage> for [f64; 3] {
    fn from(load: LoadAverage) -> Self {
        [load.one, load.five, load.fifteen]
    }
}

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Bytes to GiB, rounded to 2 decimal places
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round_to(bytes as f64 / GIB, 2)
}

/// Bytes to MiB, rounded to 2 decimal places
pub fn bytes_to_mib(bytes: u64) -> f64 {
    round_to(bytes as f64 / MIB, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_gib_boundary() {
        assert_eq!(bytes_to_gib(1024 * 1024 * 1024), 1.0);
        assert_eq!(bytes_to_gib(0), 0.0);
    }

    #[test]
    fn test_gib_rounds_to_two_decimals() {
        // 1.5 GiB + a few bytes
        assert_eq!(bytes_to_gib(1_610_612_736 + 10), 1.5);
        // 7.7549... GiB
        assert_eq!(bytes_to_gib(8_327_000_000), 7.76);
    }

    #[test]
    fn test_mib_conversion() {
        assert_eq!(bytes_to_mib(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mib(5_000_000), 4.77);
    }

    #[test]
    fn test_memory_percent_uses_available() {
        let mem = MemoryMetrics::new(1000, 300, 600);
        assert_eq!(mem.usage_percent(), 40.0);
        assert_eq!(MemoryMetrics::new(0, 0, 0).usage_percent(), 0.0);
    }

    #[test]
    fn test_disk_percent_excludes_reserved() {
        let disk = DiskMetrics::new(1000, 450, 450);
        assert_eq!(disk.usage_percent(), 50.0);
    }

    #[test]
    fn test_load_average_serializes_as_array() {
        let json = serde_json::to_string(&LoadAverage::unavailable()).unwrap();
        assert_eq!(json, "[-1.0,-1.0,-1.0]");
    }
}
