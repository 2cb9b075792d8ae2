pub mod command_runner;
pub mod container_source;
pub mod instance_source;
pub mod source_error;
pub mod system_source;

pub use command_runner::CommandRunner;
pub use container_source::ContainerSource;
pub use instance_source::InstanceSource;
pub use source_error::{SourceResult, SourceUnavailable};
pub use system_source::SystemSource;
