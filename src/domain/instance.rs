use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LAUNCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const UNKNOWN_STATE: &str = "Unknown";

/// Instance fields as returned by the cloud inventory, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceRecord {
    pub instance_id: Option<String>,
    pub key_name: Option<String>,
    pub instance_type: Option<String>,
    pub state: Option<String>,
    pub public_ip: Option<String>,
    pub public_dns: Option<String>,
    pub private_ip: Option<String>,
    pub launch_time: Option<DateTime<Utc>>,
}

/// A group of instances launched together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reservation {
    pub instances: Vec<InstanceRecord>,
}

impl Reservation {
    pub fn new(instances: Vec<InstanceRecord>) -> Self {
        Self { instances }
    }
}

/// One entry of the `ec2` list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudInstanceSnapshot {
    #[serde(rename = "Instance ID")]
    pub instance_id: String,
    #[serde(rename = "Instance Name")]
    pub key_name: String,
    #[serde(rename = "Instance Type")]
    pub instance_type: String,
    #[serde(rename = "Status")]
    pub state: String,
    #[serde(rename = "Public IP")]
    pub public_ip: String,
    #[serde(rename = "Public DNS")]
    pub public_dns: String,
    #[serde(rename = "Private IP")]
    pub private_ip: String,
    #[serde(rename = "LaunchTime")]
    pub launch_time: String,
}

impl From<&InstanceRecord> for CloudInstanceSnapshot {
    fn from(record: &InstanceRecord) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        Self {
            instance_id: text(&record.instance_id),
            key_name: text(&record.key_name),
            instance_type: text(&record.instance_type),
            state: record
                .state
                .clone()
                .unwrap_or_else(|| UNKNOWN_STATE.to_string()),
            public_ip: text(&record.public_ip),
            public_dns: text(&record.public_dns),
            private_ip: text(&record.private_ip),
            launch_time: record
                .launch_time
                .as_ref()
                .map(format_launch_time)
                .unwrap_or_default(),
        }
    }
}

pub fn format_launch_time(time: &DateTime<Utc>) -> String {
    time.format(LAUNCH_TIME_FORMAT).to_string()
}

/// Only the first instance of each reservation is reported; empty reservations are skipped.
pub fn summarize_reservations(reservations: &[Reservation]) -> Vec<CloudInstanceSnapshot> {
    reservations
        .iter()
        .filter_map(|r| r.instances.first())
        .map(CloudInstanceSnapshot::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> InstanceRecord {
        InstanceRecord {
            instance_id: Some(id.to_string()),
            state: Some("running".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_launch_time() {
        let time = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_launch_time(&time), "2024-01-02 03:04:05");
    }

    #[test]
    fn test_missing_state_is_unknown() {
        let snapshot = CloudInstanceSnapshot::from(&InstanceRecord {
            instance_id: Some("i-0abc".to_string()),
            ..Default::default()
        });
        assert_eq!(snapshot.state, "Unknown");
        assert_eq!(snapshot.key_name, "");
        assert_eq!(snapshot.public_ip, "");
        assert_eq!(snapshot.launch_time, "");
    }

    #[test]
    fn test_first_instance_per_reservation() {
        let reservations = vec![
            Reservation::new(vec![record("i-1"), record("i-2")]),
            Reservation::new(vec![]),
            Reservation::new(vec![record("i-3")]),
        ];

        let ids: Vec<String> = summarize_reservations(&reservations)
            .into_iter()
            .map(|s| s.instance_id)
            .collect();
        assert_eq!(ids, vec!["i-1", "i-3"]);
    }

    #[test]
    fn test_snapshot_wire_keys() {
        let value = serde_json::to_value(CloudInstanceSnapshot::from(&record("i-1"))).unwrap();
        assert_eq!(value["Instance ID"], "i-1");
        assert_eq!(value["Status"], "running");
        assert!(value.get("LaunchTime").is_some());
        assert!(value.get("Public DNS").is_some());
    }
}
