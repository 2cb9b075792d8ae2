mod adapters;
mod application;
mod config;
mod domain;
mod interface;
mod ports;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{DisconnectedDocker, DockerAdapter, Ec2Adapter, ProcessRunner, ProcfsConfig, ProcfsSystemSource};
use application::{AdminService, AdminSettings};
use config::Config;
use interface::http::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("adminwatch={},tower_http=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting adminwatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Initialize adapters
    let container_source = match DockerAdapter::from_host(&config.docker_host) {
        Ok(adapter) => {
            info!("✓ Docker client ready ({})", config.docker_host);
            Arc::new(adapter) as Arc<dyn ports::ContainerSource>
        }
        Err(e) => {
            warn!("⚠ Failed to connect to Docker: {}. Container section will be empty.", e);
            Arc::new(DisconnectedDocker::new(e.to_string())) as Arc<dyn ports::ContainerSource>
        }
    };

    let instance_source = Arc::new(Ec2Adapter::from_env(config.aws_region.clone()).await);
    info!("✓ EC2 inventory client ready (region {})", config.aws_region);

    let procfs_config = ProcfsConfig::new(config.proc_path.clone(), config.sys_path.clone());
    let system_source = Arc::new(ProcfsSystemSource::new(procfs_config));

    let admin_service = Arc::new(AdminService::new(
        container_source,
        instance_source,
        system_source,
        Arc::new(ProcessRunner::new()),
        AdminSettings::from(&config),
    ));

    // Create HTTP server
    let app = create_router(admin_service, config.route_prefix.as_deref());
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ adminwatch listening on {}", addr);
    info!("  → Status: http://localhost:{}/admin_info", config.port);
    info!("  → Logs: http://localhost:{}/logs", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
