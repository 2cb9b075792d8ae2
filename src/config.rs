use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub port: u16,
    pub container_name: String,
    pub docker_host: String,
    pub aws_region: String,
    pub log_files: Vec<PathBuf>,
    pub tail_lines: usize,
    pub tail_binary: String,
    pub cpu_sample_ms: u64,
    pub proc_path: PathBuf,
    pub sys_path: PathBuf,
    pub disk_path: PathBuf,
    pub route_prefix: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            container_name: "express_api".to_string(),
            docker_host: "unix:///var/run/docker.sock".to_string(),
            aws_region: "us-east-1".to_string(),
            log_files: vec![
                PathBuf::from("/var/log/syslog"),
                PathBuf::from("/var/log/auth.log"),
            ],
            tail_lines: 100,
            tail_binary: "/usr/bin/tail".to_string(),
            cpu_sample_ms: 1000,
            proc_path: PathBuf::from("/proc"),
            sys_path: PathBuf::from("/sys"),
            disk_path: PathBuf::from("/"),
            route_prefix: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file named by `ADMINWATCH_CONFIG`, then environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("ADMINWATCH_CONFIG") {
            Ok(path) => Self::from_file(PathBuf::from(path))?,
            Err(_) => Self::default(),
        };

        Ok(base.with_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Apply `ADMINWATCH_*` overrides; unparsable values are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(port) = lookup("ADMINWATCH_PORT").and_then(|s| s.parse().ok()) {
            self.port = port;
        }
        if let Some(name) = lookup("ADMINWATCH_CONTAINER") {
            self.container_name = name;
        }
        if let Some(host) = lookup("DOCKER_HOST") {
            self.docker_host = host;
        }
        if let Some(region) = lookup("ADMINWATCH_AWS_REGION") {
            self.aws_region = region;
        }
        if let Some(files) = lookup("ADMINWATCH_LOG_FILES") {
            self.log_files = files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(PathBuf::from)
                .collect();
        }
        if let Some(lines) = lookup("ADMINWATCH_TAIL_LINES").and_then(|s| s.parse().ok()) {
            self.tail_lines = lines;
        }
        if let Some(tail) = lookup("ADMINWATCH_TAIL_BIN") {
            self.tail_binary = tail;
        }
        if let Some(ms) = lookup("ADMINWATCH_CPU_SAMPLE_MS").and_then(|s| s.parse().ok()) {
            self.cpu_sample_ms = ms;
        }
        if let Some(path) = lookup("ADMINWATCH_PROC_PATH") {
            self.proc_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ADMINWATCH_SYS_PATH") {
            self.sys_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ADMINWATCH_DISK_PATH") {
            self.disk_path = PathBuf::from(path);
        }
        if let Some(prefix) = lookup("ADMINWATCH_ROUTE_PREFIX") {
            self.route_prefix = Some(prefix).filter(|p| !p.is_empty());
        }
        if let Some(level) = lookup("ADMINWATCH_LOG_LEVEL") {
            self.log_level = level;
        }
        self
    }

    pub fn cpu_sample_window(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.container_name, "express_api");
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.tail_lines, 100);
        assert_eq!(config.cpu_sample_window(), Duration::from_secs(1));
        assert_eq!(
            config.log_files,
            vec![PathBuf::from("/var/log/syslog"), PathBuf::from("/var/log/auth.log")]
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ADMINWATCH_PORT", "8080"),
            ("ADMINWATCH_CONTAINER", "api"),
            ("ADMINWATCH_LOG_FILES", "/var/log/messages, /var/log/secure"),
            ("ADMINWATCH_TAIL_LINES", "not-a-number"),
            ("ADMINWATCH_ROUTE_PREFIX", "/flask"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.container_name, "api");
        assert_eq!(
            config.log_files,
            vec![PathBuf::from("/var/log/messages"), PathBuf::from("/var/log/secure")]
        );
        assert_eq!(config.tail_lines, 100);
        assert_eq!(config.route_prefix.as_deref(), Some("/flask"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000\naws_region = \"eu-west-1\"").unwrap();

        let config = Config::from_file(file.path().to_path_buf()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.aws_region, "eu-west-1");
        assert_eq!(config.container_name, "express_api");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a port\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path().to_path_buf()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::from_file(PathBuf::from("/nonexistent/adminwatch.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "container = \"api\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path().to_path_buf()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
