mod run;

use crate::logger::Logger;
use std::path::PathBuf;

/// Action enum representing each possible command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start { config: PathBuf },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self, logger: &Logger) -> anyhow::Result<()> {
        run::execute(self, logger).await
    }
}
