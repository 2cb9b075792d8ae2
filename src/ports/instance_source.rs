use async_trait::async_trait;

use crate::domain::Reservation;

use super::SourceResult;

/// Port for the cloud provider's instance inventory
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// All reservations visible to the configured credentials
    async fn describe_reservations(&self) -> SourceResult<Vec<Reservation>>;
}
