use serde::Serialize;

use super::{CloudInstanceSnapshot, ContainerReport, HostMetrics};

/// Payload of the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub docker: ContainerReport,
    pub ec2: Vec<CloudInstanceSnapshot>,
    pub system_info: HostMetrics,
}
