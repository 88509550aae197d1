use super::Action;
use crate::{app, logger::Logger};

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action, logger: &Logger) -> anyhow::Result<()> {
    match action {
        Action::Start { config } => Ok(app::bootstrap(&config, logger).await?),
    }
}
