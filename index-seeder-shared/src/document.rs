//! Synthetic document types written into seeded indices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Category of a seeded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drug,
    Lab,
    Test,
    Procedure,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Drug,
        Category::Lab,
        Category::Test,
        Category::Procedure,
    ];
}

/// Severity of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    Info,
    Warning,
    Error,
    Success,
}

impl CommentType {
    /// All comment types, in declaration order.
    pub const ALL: [CommentType; 4] = [
        CommentType::Info,
        CommentType::Warning,
        CommentType::Error,
        CommentType::Success,
    ];
}

/// A comment attached to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A synthetic document.
///
/// `published_at` is kept as the ISO-8601 string that is sent on the wire so
/// that generators control its exact formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub published_at: String,
    pub category: Category,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
