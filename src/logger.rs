//! Debug-gated logger facade
//!
//! The facade owns its own `tracing` dispatcher instead of installing a
//! global subscriber, so it is built once by the CLI and handed to every
//! component that logs.

use std::{
    fmt,
    io::{self, IsTerminal},
};
use tracing::{Dispatch, Level, dispatcher};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
pub struct Logger {
    debug: bool,
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stderr
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self::build(debug, io::stderr, io::stderr().is_terminal())
    }

    /// Logger writing to any sink, without ANSI colors
    #[must_use]
    pub fn with_writer<W>(debug: bool, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(debug, writer, false)
    }

    fn build<W>(debug: bool, writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let level = if debug { Level::DEBUG } else { Level::INFO };

        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_max_level(level)
            .with_ansi(ansi)
            .with_target(false)
            .finish();

        Self {
            debug,
            dispatch: Dispatch::new(subscriber),
        }
    }

    #[must_use]
    pub const fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Write one diagnostic line, only when debug is enabled
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if !self.debug {
            return;
        }

        dispatcher::with_default(&self.dispatch, || tracing::debug!("{args}"));
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        dispatcher::with_default(&self.dispatch, || tracing::info!("{args}"));
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        dispatcher::with_default(&self.dispatch, || tracing::error!("{args}"));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
