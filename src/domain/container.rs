use serde::Serialize;

/// Length of the short container id shown by the Docker CLI
pub const SHORT_ID_LEN: usize = 12;

/// Metadata of the monitored container
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerSnapshot {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Started At")]
    pub started_at: String,
    #[serde(rename = "App Armor")]
    pub apparmor_profile: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "IP")]
    pub ip_address: String,
    #[serde(rename = "Exposed Ports")]
    pub exposed_ports: Vec<String>,
}

impl ContainerSnapshot {
    pub fn short_id(id: &str) -> String {
        id.chars().take(SHORT_ID_LEN).collect()
    }

    /// Docker reports names with a leading `/`
    pub fn display_name(name: &str) -> String {
        name.strip_prefix('/').unwrap_or(name).to_string()
    }
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmptyObject {}

/// The `docker` section of a status snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContainerReport {
    Found(ContainerSnapshot),
    Unavailable(EmptyObject),
}

impl ContainerReport {
    pub fn unavailable() -> Self {
        Self::Unavailable(EmptyObject {})
    }
}
