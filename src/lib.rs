//! Bootstrap for the database structure revision agent
//!
//! `start` loads the YAML config, builds the logger facade, opens the
//! database and builds the HTTP client, in that order, then releases the
//! database on the way out.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod logger;
