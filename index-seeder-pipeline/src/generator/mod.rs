//! Synthetic document generation.
//!
//! The seeder only depends on the `DocumentGenerator` capability, so tests can
//! substitute deterministic fixtures for the random generator.

mod random;
mod words;

pub use random::{RandomDocumentGenerator, MAX_COMMENTS};

use index_seeder_shared::Document;

/// Source of documents to seed.
pub trait DocumentGenerator: Send + Sync {
    /// Produce one document.
    fn generate_document(&self) -> Document;

    /// Produce `count` documents.
    fn generate_documents(&self, count: usize) -> Vec<Document> {
        (0..count).map(|_| self.generate_document()).collect()
    }
}
