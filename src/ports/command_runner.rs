use async_trait::async_trait;

use super::SourceResult;

/// Port for running a host utility and capturing what it prints
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`; stdout on a zero exit status, failure otherwise.
    async fn run(&self, program: &str, args: &[&str]) -> SourceResult<String>;
}
