use async_trait::async_trait;
use bollard::container::{InspectContainerOptions, LogOutput, LogsOptions};
use bollard::models::ContainerInspectResponse;
use bollard::Docker;
use futures::stream::StreamExt;

use crate::domain::ContainerSnapshot;
use crate::ports::{ContainerSource, SourceResult, SourceUnavailable};

/// Docker adapter using bollard client
pub struct DockerAdapter {
    client: Docker,
}

impl DockerAdapter {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Docker::connect_with_local_defaults()?;
        Ok(Self { client })
    }

    pub fn with_socket(socket_path: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Docker::connect_with_socket(socket_path, 120, bollard::API_DEFAULT_VERSION)?;
        Ok(Self { client })
    }

    pub fn with_http(addr: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Docker::connect_with_http(addr, 120, bollard::API_DEFAULT_VERSION)?;
        Ok(Self { client })
    }

    /// Connect to a `unix://`, `tcp://` or `http://` Docker host
    pub fn from_host(docker_host: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(socket_path) = docker_host.strip_prefix("unix://") {
            return Self::with_socket(socket_path);
        }
        if docker_host.starts_with("tcp://") || docker_host.starts_with("http://") {
            return Self::with_http(docker_host);
        }
        Err(format!("unsupported Docker host scheme: {}", docker_host).into())
    }

    fn snapshot_from_inspect(inspect: ContainerInspectResponse) -> ContainerSnapshot {
        let state = inspect.state.unwrap_or_default();

        let mut exposed_ports: Vec<String> = inspect
            .host_config
            .and_then(|h| h.port_bindings)
            .map(|bindings| bindings.into_keys().collect())
            .unwrap_or_default();
        exposed_ports.sort();

        ContainerSnapshot {
            id: ContainerSnapshot::short_id(inspect.id.as_deref().unwrap_or_default()),
            name: ContainerSnapshot::display_name(inspect.name.as_deref().unwrap_or_default()),
            status: state.status.map(|s| s.to_string()).unwrap_or_default(),
            started_at: state.started_at.unwrap_or_default(),
            apparmor_profile: inspect.app_armor_profile.unwrap_or_default(),
            image: inspect.config.and_then(|c| c.image).unwrap_or_default(),
            ip_address: inspect
                .network_settings
                .and_then(|n| n.ip_address)
                .unwrap_or_default(),
            exposed_ports,
        }
    }
}

#[async_trait]
impl ContainerSource for DockerAdapter {
    async fn inspect(&self, name: &str) -> SourceResult<ContainerSnapshot> {
        let inspect = self
            .client
            .inspect_container(name, None::<InspectContainerOptions>)
            .await
            .map_err(|e| SourceUnavailable::new("docker inspect", e))?;

        Ok(Self::snapshot_from_inspect(inspect))
    }

    async fn logs(&self, name: &str) -> SourceResult<String> {
        let options = Some(LogsOptions::<String> {
            stdout: true,
            stderr: true,
            ..Default::default()
        });

        let mut stream = self.client.logs(name, options);
        let mut buffer = Vec::new();

        while let Some(entry) = stream.next().await {
            match entry.map_err(|e| SourceUnavailable::new("docker logs", e))? {
                LogOutput::StdOut { message }
                | LogOutput::StdErr { message }
                | LogOutput::StdIn { message }
                | LogOutput::Console { message } => buffer.extend_from_slice(&message),
            }
        }

        Ok(decode_log(&buffer))
    }
}

/// Invalid UTF-8 becomes U+FFFD, the same way host log output is decoded
fn decode_log(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollard::models::{
        ContainerConfig, ContainerState, ContainerStateStatusEnum, HostConfig, NetworkSettings,
        PortBinding,
    };
    use std::collections::HashMap;

    #[test]
    fn test_snapshot_from_full_inspect() {
        let mut bindings = HashMap::new();
        bindings.insert(
            "3000/tcp".to_string(),
            Some(vec![PortBinding {
                host_ip: Some("0.0.0.0".to_string()),
                host_port: Some("3000".to_string()),
            }]),
        );
        bindings.insert("443/tcp".to_string(), None);

        let inspect = ContainerInspectResponse {
            id: Some("4f1c2d3e4a5b6c7d8e9f0a1b2c3d4e5f".to_string()),
            name: Some("/express_api".to_string()),
            app_armor_profile: Some("docker-default".to_string()),
            state: Some(ContainerState {
                status: Some(ContainerStateStatusEnum::RUNNING),
                started_at: Some("2024-05-01T12:00:00.123456789Z".to_string()),
                ..Default::default()
            }),
            config: Some(ContainerConfig {
                image: Some("express_api:latest".to_string()),
                ..Default::default()
            }),
            network_settings: Some(NetworkSettings {
                ip_address: Some("172.17.0.2".to_string()),
                ..Default::default()
            }),
            host_config: Some(HostConfig {
                port_bindings: Some(bindings),
                ..Default::default()
            }),
            ..Default::default()
        };

        let snapshot = DockerAdapter::snapshot_from_inspect(inspect);
        assert_eq!(snapshot.id, "4f1c2d3e4a5b");
        assert_eq!(snapshot.name, "express_api");
        assert_eq!(snapshot.status, "running");
        assert_eq!(snapshot.started_at, "2024-05-01T12:00:00.123456789Z");
        assert_eq!(snapshot.apparmor_profile, "docker-default");
        assert_eq!(snapshot.image, "express_api:latest");
        assert_eq!(snapshot.ip_address, "172.17.0.2");
        assert_eq!(snapshot.exposed_ports, vec!["3000/tcp", "443/tcp"]);
    }

    #[test]
    fn test_snapshot_from_sparse_inspect() {
        let snapshot = DockerAdapter::snapshot_from_inspect(ContainerInspectResponse::default());
        assert_eq!(snapshot, ContainerSnapshot::default());
    }

    #[test]
    fn test_decode_log_replaces_invalid_bytes() {
        let raw = b"ok line\n\xff\xfe bad bytes\n";
        assert_eq!(decode_log(raw), "ok line\n\u{fffd}\u{fffd} bad bytes\n");
    }

    #[tokio::test]
    async fn test_from_host_uses_tcp_address() {
        let adapter = DockerAdapter::from_host("tcp://127.0.0.1:1").unwrap();
        let err = adapter.inspect("express_api").await.unwrap_err();
        assert!(!err.reason.contains("docker.sock"), "{}", err.reason);
    }

    #[tokio::test]
    async fn test_from_host_scheme_dispatch() {
        assert!(DockerAdapter::from_host("http://127.0.0.1:2375").is_ok());
        assert!(DockerAdapter::from_host("unix:///var/run/docker.sock").is_ok());

        let err = DockerAdapter::from_host("ssh://admin@10.0.0.5").err().unwrap();
        assert!(err.to_string().contains("unsupported Docker host scheme"));
    }
}
