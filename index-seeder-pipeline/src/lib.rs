//! # Index Seeder Pipeline
//!
//! This crate provides the two operations of the index seeder:
//!
//! 1. **Reconciler**: creates, recreates or leaves alone each configured index
//! 2. **Seeder**: fills indices with generated documents through bulk writes
//!
//! Both work against the `SearchIndexProvider` trait and run strictly
//! sequentially, awaiting each request before issuing the next.

pub mod config;
pub mod errors;
pub mod generator;
pub mod reconciler;
pub mod seeder;

pub use config::{load_index_configs, DEFAULT_CONFIG_PATH};
pub use errors::PipelineError;
pub use generator::{DocumentGenerator, RandomDocumentGenerator};
pub use reconciler::{reconcile, ReconcileAction, ReconcileSummary};
pub use seeder::{seed, SeedOptions, SeedSummary};
