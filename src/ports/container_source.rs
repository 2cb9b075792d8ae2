use async_trait::async_trait;

use crate::domain::ContainerSnapshot;

use super::SourceResult;

/// Port for reading one named container from the container runtime
#[async_trait]
pub trait ContainerSource: Send + Sync {
    /// Inspect the container's metadata
    async fn inspect(&self, name: &str) -> SourceResult<ContainerSnapshot>;

    /// Full buffered stdout/stderr of the container, as raw text
    async fn logs(&self, name: &str) -> SourceResult<String>;
}
