use std::path::Path;

use crate::{
    config::Config,
    db::Database,
    error::BootstrapError,
    http::HttpClient,
    logger::Logger,
};

/// Resources shared by the revision work, built by [`bootstrap`]
#[derive(Debug)]
pub struct App {
    config: Config,
    db: Database,
    client: HttpClient,
}

impl App {
    /// Configuration the resources were built from
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Open database handle, owned until [`App::shutdown`]
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    /// HTTP client bound to the configured base URL
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Database structure revision; no revision tasks exist yet
    ///
    /// # Errors
    ///
    /// Never fails today, the signature leaves room for revision errors
    pub fn revise(&self, logger: &Logger) -> Result<(), BootstrapError> {
        logger.debugf(format_args!(
            "revision target: {} (client base url: {})",
            self.config().database,
            self.client().base_url().map_or("none", |url| url.as_str())
        ));
        logger.info(format_args!(
            "{} ready, no revision tasks scheduled",
            self.db().driver()
        ));
        Ok(())
    }

    /// Release the database handle
    pub async fn shutdown(self, logger: &Logger) {
        self.db.close().await;
        logger.debugf(format_args!("{} connection closed", self.db.driver()));
    }
}

/// Run the bootstrap sequence: config, database, http client, revision
///
/// Each stage needs the output of the previous one, and the database is
/// closed before returning whether or not the later stages succeed.
///
/// # Errors
///
/// Returns the first stage failure, tagged with its stage
pub async fn bootstrap(config_path: &Path, logger: &Logger) -> Result<(), BootstrapError> {
    logger.debugf(format_args!("loading config from {}", config_path.display()));
    let config = Config::load(config_path)?;

    let db = Database::open(&config.database, logger).await?;

    let client = match HttpClient::new(&config.client_url, logger) {
        Ok(client) => client,
        Err(err) => {
            db.close().await;
            logger.debugf(format_args!("{} connection closed", db.driver()));
            return Err(err.into());
        }
    };

    let app = App { config, db, client };
    let result = app.revise(logger);
    app.shutdown(logger).await;

    result
}
