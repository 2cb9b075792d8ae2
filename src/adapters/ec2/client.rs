use async_trait::async_trait;
use aws_sdk_ec2::config::Region;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::Instance;
use aws_sdk_ec2::Client;
use chrono::{DateTime, Utc};

use crate::domain::{InstanceRecord, Reservation};
use crate::ports::{InstanceSource, SourceResult, SourceUnavailable};

/// EC2 inventory adapter using the AWS SDK
pub struct Ec2Adapter {
    client: Client,
}

impl Ec2Adapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolve credentials through the default provider chain and pin the region
    pub async fn from_env(region: impl Into<String>) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .load()
            .await;

        Self::new(Client::new(&sdk_config))
    }

    fn record_from_instance(instance: &Instance) -> InstanceRecord {
        InstanceRecord {
            instance_id: instance.instance_id().map(str::to_string),
            key_name: instance.key_name().map(str::to_string),
            instance_type: instance.instance_type().map(|t| t.as_str().to_string()),
            state: instance
                .state()
                .and_then(|s| s.name())
                .map(|n| n.as_str().to_string()),
            public_ip: instance.public_ip_address().map(str::to_string),
            public_dns: instance.public_dns_name().map(str::to_string),
            private_ip: instance.private_ip_address().map(str::to_string),
            launch_time: instance
                .launch_time()
                .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())),
        }
    }
}

#[async_trait]
impl InstanceSource for Ec2Adapter {
    async fn describe_reservations(&self) -> SourceResult<Vec<Reservation>> {
        let mut pages = self.client.describe_instances().into_paginator().send();
        let mut reservations = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| SourceUnavailable::new("ec2", DisplayErrorContext(e)))?;

            for reservation in page.reservations() {
                let instances = reservation
                    .instances()
                    .iter()
                    .map(Self::record_from_instance)
                    .collect();
                reservations.push(Reservation::new(instances));
            }
        }

        Ok(reservations)
    }
}
