pub mod container;
pub mod host;
pub mod instance;
pub mod logs;
pub mod metrics;
pub mod snapshot;

pub use container::{ContainerReport, ContainerSnapshot};
pub use host::{Architecture, HostMetrics, NetworkSummary, OsInfo, UsageSummary};
pub use instance::{summarize_reservations, CloudInstanceSnapshot, InstanceRecord, Reservation};
pub use logs::{ContainerLogText, HostLogText, LogBundle};
pub use metrics::{DiskMetrics, LoadAverage, MemoryMetrics, NetworkMetrics};
pub use snapshot::StatusSnapshot;
