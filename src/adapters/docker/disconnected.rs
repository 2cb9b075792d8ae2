use async_trait::async_trait;

use crate::domain::ContainerSnapshot;
use crate::ports::{ContainerSource, SourceResult, SourceUnavailable};

/// Stands in for the Docker client when the daemon could not be reached at startup
#[derive(Debug, Clone)]
pub struct DisconnectedDocker {
    reason: String,
}

impl DisconnectedDocker {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ContainerSource for DisconnectedDocker {
    async fn inspect(&self, _name: &str) -> SourceResult<ContainerSnapshot> {
        Err(SourceUnavailable::new("docker inspect", &self.reason))
    }

    async fn logs(&self, _name: &str) -> SourceResult<String> {
        Err(SourceUnavailable::new("docker logs", &self.reason))
    }
}
