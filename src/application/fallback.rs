use tracing::warn;

use crate::domain::{
    CloudInstanceSnapshot, ContainerLogText, ContainerReport, HostLogText, LoadAverage, NetworkSummary,
    UsageSummary,
};
use crate::ports::SourceResult;

pub const CONTAINER_LOGS_UNAVAILABLE: &str = "Error retrieving docker logs";
pub const HOST_LOGS_UNAVAILABLE: &str = "Error retrieving ec2 logs";

/// A payload piece with a documented placeholder for when its source fails
pub trait Fallback {
    fn fallback() -> Self;
}

impl Fallback for ContainerReport {
    fn fallback() -> Self {
        ContainerReport::unavailable()
    }
}

impl Fallback for Vec<CloudInstanceSnapshot> {
    fn fallback() -> Self {
        Vec::new()
    }
}

impl Fallback for ContainerLogText {
    fn fallback() -> Self {
        ContainerLogText(CONTAINER_LOGS_UNAVAILABLE.to_string())
    }
}

impl Fallback for HostLogText {
    fn fallback() -> Self {
        HostLogText(HOST_LOGS_UNAVAILABLE.to_string())
    }
}

impl Fallback for LoadAverage {
    fn fallback() -> Self {
        LoadAverage::unavailable()
    }
}

impl Fallback for UsageSummary {
    fn fallback() -> Self {
        UsageSummary::default()
    }
}

impl Fallback for NetworkSummary {
    fn fallback() -> Self {
        NetworkSummary::default()
    }
}

impl Fallback for String {
    fn fallback() -> Self {
        String::new()
    }
}

impl Fallback for f64 {
    fn fallback() -> Self {
        0.0
    }
}

/// Unwrap a source reading, logging the failure and substituting the placeholder
pub fn or_fallback<T: Fallback>(reading: SourceResult<T>) -> T {
    match reading {
        Ok(value) => value,
        Err(e) => {
            warn!(origin = e.origin, reason = %e.reason, "source unavailable, using placeholder");
            T::fallback()
        }
    }
}
