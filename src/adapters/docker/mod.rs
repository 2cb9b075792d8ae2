mod client;
mod disconnected;

pub use client::DockerAdapter;
pub use disconnected::DisconnectedDocker;
