//! # Index Seeder
//!
//! Entry points for provisioning search indices from a configuration file and
//! seeding them with synthetic documents.
//!
//! The commands return `Result`s; the binary maps them to exit codes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use config::Dependencies;

use index_seeder_pipeline::PipelineError;
use index_seeder_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum SeederError {
    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] PipelineError),

    /// Search index error.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] SearchIndexError),
}
