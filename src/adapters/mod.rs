pub mod docker;
pub mod ec2;
pub mod process;
pub mod procfs;

pub use docker::{DisconnectedDocker, DockerAdapter};
pub use ec2::Ec2Adapter;
pub use process::ProcessRunner;
pub use procfs::{ProcfsConfig, ProcfsSystemSource};
