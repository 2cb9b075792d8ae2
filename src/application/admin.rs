use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::domain::{
    summarize_reservations, Architecture, CloudInstanceSnapshot, ContainerLogText, ContainerReport,
    HostLogText, HostMetrics, LoadAverage, LogBundle, NetworkSummary, OsInfo, StatusSnapshot,
    UsageSummary,
};
use crate::ports::{CommandRunner, ContainerSource, InstanceSource, SourceResult, SystemSource};

use super::fallback::{or_fallback, Fallback};

/// What the admin endpoints look at
#[derive(Debug, Clone)]
pub struct AdminSettings {
    pub container_name: String,
    pub log_files: Vec<PathBuf>,
    pub tail_lines: usize,
    pub tail_binary: String,
    pub cpu_sample: Duration,
    pub disk_path: PathBuf,
    /// Load averages are only read where the host offers them
    pub load_average_supported: bool,
}

impl From<&Config> for AdminSettings {
    fn from(config: &Config) -> Self {
        Self {
            container_name: config.container_name.clone(),
            log_files: config.log_files.clone(),
            tail_lines: config.tail_lines,
            tail_binary: config.tail_binary.clone(),
            cpu_sample: config.cpu_sample_window(),
            disk_path: config.disk_path.clone(),
            load_average_supported: cfg!(target_os = "linux"),
        }
    }
}

/// Aggregates the container, cloud and host readers into the admin payloads.
///
/// Every leaf read is independent and best-effort: a failing source is logged and
/// replaced by its placeholder, so both payloads always have the same shape.
pub struct AdminService {
    container_source: Arc<dyn ContainerSource>,
    instance_source: Arc<dyn InstanceSource>,
    system_source: Arc<dyn SystemSource>,
    commands: Arc<dyn CommandRunner>,
    settings: AdminSettings,
}

impl AdminService {
    pub fn new(
        container_source: Arc<dyn ContainerSource>,
        instance_source: Arc<dyn InstanceSource>,
        system_source: Arc<dyn SystemSource>,
        commands: Arc<dyn CommandRunner>,
        settings: AdminSettings,
    ) -> Self {
        Self {
            container_source,
            instance_source,
            system_source,
            commands,
            settings,
        }
    }

    /// Container metadata, cloud inventory and host metrics.
    ///
    /// Takes at least the CPU sample window (1 s by default); every other read
    /// runs concurrently with it.
    pub async fn status_snapshot(&self) -> StatusSnapshot {
        let (docker, ec2, system_info) = tokio::join!(
            self.container_report(),
            self.cloud_instances(),
            self.system_info(),
        );

        StatusSnapshot {
            docker,
            ec2,
            system_info,
        }
    }

    /// Container output and the tail of the host's system logs
    pub async fn log_snapshot(&self) -> LogBundle {
        let (ec2, docker) = tokio::join!(self.host_logs(), self.container_logs());
        LogBundle { ec2, docker }
    }

    pub async fn container_report(&self) -> ContainerReport {
        let reading = self
            .container_source
            .inspect(&self.settings.container_name)
            .await
            .map(ContainerReport::Found);
        or_fallback(reading)
    }

    pub async fn cloud_instances(&self) -> Vec<CloudInstanceSnapshot> {
        let reading = self
            .instance_source
            .describe_reservations()
            .await
            .map(|reservations| summarize_reservations(&reservations));
        or_fallback(reading)
    }

    pub async fn system_info(&self) -> HostMetrics {
        let system = &self.system_source;

        let (cpu_percent, memory, disk, net, load_average, uptime, kernel_version) = tokio::join!(
            system.cpu_percent(self.settings.cpu_sample),
            async { system.memory().await.map(|m| UsageSummary::from(&m)) },
            async {
                system
                    .disk_usage(&self.settings.disk_path)
                    .await
                    .map(|d| UsageSummary::from(&d))
            },
            async { system.network_totals().await.map(|n| NetworkSummary::from(&n)) },
            self.load_average(),
            self.host_utility("uptime", &["-p"]),
            self.host_utility("uname", &["-r"]),
        );

        HostMetrics {
            cpu_percent: or_fallback(cpu_percent),
            memory: or_fallback(memory),
            disk: or_fallback(disk),
            net: or_fallback(net),
            os: OsInfo {
                uptime: or_fallback(uptime),
                load_average: or_fallback(load_average),
                kernel_version: or_fallback(kernel_version),
                architecture: Architecture::current(),
            },
        }
    }

    pub async fn container_logs(&self) -> ContainerLogText {
        let reading = self
            .container_source
            .logs(&self.settings.container_name)
            .await
            .map(|raw| ContainerLogText::from_raw(&raw));
        or_fallback(reading)
    }

    pub async fn host_logs(&self) -> HostLogText {
        let lines = self.settings.tail_lines.to_string();
        let files: Vec<String> = self
            .settings
            .log_files
            .iter()
            .map(|f| f.to_string_lossy().into_owned())
            .collect();

        let mut args = vec!["-n", lines.as_str()];
        args.extend(files.iter().map(String::as_str));

        let reading = self
            .commands
            .run(&self.settings.tail_binary, &args)
            .await
            .map(HostLogText);
        or_fallback(reading)
    }

    async fn load_average(&self) -> SourceResult<LoadAverage> {
        if !self.settings.load_average_supported {
            debug!("load average not offered on this platform");
            return Ok(LoadAverage::fallback());
        }
        self.system_source.load_average().await
    }

    async fn host_utility(&self, program: &str, args: &[&str]) -> SourceResult<String> {
        self.commands
            .run(program, args)
            .await
            .map(|out| out.trim().to_string())
    }
}
