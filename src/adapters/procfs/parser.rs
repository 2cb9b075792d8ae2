use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse /proc/loadavg
pub fn parse_loadavg(content: &str) -> ParseResult<(f64, f64, f64)> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ParseError::Parse("Invalid loadavg format".to_string()));
    }

    let one = parts[0]
        .parse::<f64>()
        .map_err(|e| ParseError::Parse(format!("Invalid load 1min: {}", e)))?;
    let five = parts[1]
        .parse::<f64>()
        .map_err(|e| ParseError::Parse(format!("Invalid load 5min: {}", e)))?;
    let fifteen = parts[2]
        .parse::<f64>()
        .map_err(|e| ParseError::Parse(format!("Invalid load 15min: {}", e)))?;

    Ok((one, five, fifteen))
}

/// CPU stats from /proc/stat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuStat {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuStat {
    pub fn total(&self) -> u64 {
        self.user + self.nice + self.system + self.idle + self.iowait + self.irq + self.softirq + self.steal
    }

    pub fn busy(&self) -> u64 {
        self.total() - self.idle - self.iowait
    }

    /// Busy share of the jiffies elapsed since `earlier`, rounded to 1 decimal.
    pub fn busy_percent_since(&self, earlier: &CpuStat) -> f64 {
        let total_delta = self.total().saturating_sub(earlier.total());
        if total_delta == 0 {
            return 0.0;
        }
        let busy_delta = self.busy().saturating_sub(earlier.busy());
        let percent = (busy_delta as f64 / total_delta as f64) * 100.0;
        (percent * 10.0).round() / 10.0
    }
}

/// Parse /proc/stat (first line only for aggregate CPU)
pub fn parse_cpu_stat(content: &str) -> ParseResult<CpuStat> {
    let first_line = content
        .lines()
        .next()
        .ok_or_else(|| ParseError::Parse("Empty stat file".to_string()))?;

    if !first_line.starts_with("cpu ") {
        return Err(ParseError::Parse("Missing cpu line".to_string()));
    }

    let parts: Vec<&str> = first_line.split_whitespace().skip(1).collect();
    if parts.len() < 8 {
        return Err(ParseError::Parse("Incomplete cpu stat".to_string()));
    }

    Ok(CpuStat {
        user: parts[0].parse().map_err(|e| ParseError::Parse(format!("user: {}", e)))?,
        nice: parts[1].parse().map_err(|e| ParseError::Parse(format!("nice: {}", e)))?,
        system: parts[2].parse().map_err(|e| ParseError::Parse(format!("system: {}", e)))?,
        idle: parts[3].parse().map_err(|e| ParseError::Parse(format!("idle: {}", e)))?,
        iowait: parts[4].parse().map_err(|e| ParseError::Parse(format!("iowait: {}", e)))?,
        irq: parts[5].parse().map_err(|e| ParseError::Parse(format!("irq: {}", e)))?,
        softirq: parts[6].parse().map_err(|e| ParseError::Parse(format!("softirq: {}", e)))?,
        steal: parts[7].parse().map_err(|e| ParseError::Parse(format!("steal: {}", e)))?,
    })
}

/// Parse /proc/meminfo into a map of bytes
pub fn parse_meminfo(content: &str) -> ParseResult<HashMap<String, u64>> {
    let mut map = HashMap::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            continue;
        }

        let key = parts[0].trim().to_string();
        let value_str = parts[1].trim().trim_end_matches(" kB");

        if let Ok(value) = value_str.parse::<u64>() {
            map.insert(key, value * 1024); // Convert kB to bytes
        }
    }

    if !map.contains_key("MemTotal") {
        return Err(ParseError::MissingField("MemTotal".to_string()));
    }

    Ok(map)
}

/// Read rx/tx byte counters from /sys/class/net/{interface}/statistics
pub fn parse_net_stats(stats_dir: &Path) -> ParseResult<(u64, u64)> {
    let rx_bytes = fs::read_to_string(stats_dir.join("rx_bytes"))?
        .trim()
        .parse::<u64>()
        .map_err(|e| ParseError::Parse(format!("rx_bytes: {}", e)))?;

    let tx_bytes = fs::read_to_string(stats_dir.join("tx_bytes"))?
        .trim()
        .parse::<u64>()
        .map_err(|e| ParseError::Parse(format!("tx_bytes: {}", e)))?;

    Ok((rx_bytes, tx_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loadavg() {
        let content = "0.52 0.78 1.21 2/456 12345\n";
        let (one, five, fifteen) = parse_loadavg(content).unwrap();
        assert_eq!(one, 0.52);
        assert_eq!(five, 0.78);
        assert_eq!(fifteen, 1.21);
    }

    #[test]
    fn test_parse_loadavg_rejects_garbage() {
        assert!(parse_loadavg("").is_err());
        assert!(parse_loadavg("a b c").is_err());
    }

    #[test]
    fn test_parse_cpu_stat() {
        let content = "cpu  1000 100 500 10000 200 50 30 0\ncpu0 500 50 250 5000 100 25 15 0\n";
        let stat = parse_cpu_stat(content).unwrap();
        assert_eq!(stat.user, 1000);
        assert_eq!(stat.system, 500);
        assert_eq!(stat.idle, 10000);
        assert_eq!(stat.iowait, 200);
    }

    #[test]
    fn test_busy_percent_between_samples() {
        let before = CpuStat {
            user: 100,
            idle: 900,
            ..Default::default()
        };
        let after = CpuStat {
            user: 125,
            system: 5,
            idle: 970,
            ..Default::default()
        };
        // 30 busy out of 100 elapsed
        assert_eq!(after.busy_percent_since(&before), 30.0);
        assert_eq!(before.busy_percent_since(&before), 0.0);
    }

    #[test]
    fn test_parse_meminfo() {
        let content = "MemTotal:       16384 kB\nMemFree:         4096 kB\nMemAvailable:    8192 kB\nHugePages_Total:       0\n";
        let map = parse_meminfo(content).unwrap();
        assert_eq!(map["MemTotal"], 16384 * 1024);
        assert_eq!(map["MemAvailable"], 8192 * 1024);
        assert_eq!(map["HugePages_Total"], 0);
    }

    #[test]
    fn test_parse_meminfo_requires_total() {
        assert!(matches!(
            parse_meminfo("MemFree: 10 kB\n"),
            Err(ParseError::MissingField(_))
        ));
    }
}
