//! Random document generator.
//!
//! Produces lorem-style text, plausible usernames and timestamps from the
//! last day. Nothing is seeded, so every run writes different documents.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

use super::words::{FIRST_NAMES, LAST_NAMES, LOREM_WORDS};
use super::DocumentGenerator;
use index_seeder_shared::{Category, Comment, CommentType, Document, ExtraFields};

/// Upper bound (inclusive) on the number of comments per document.
pub const MAX_COMMENTS: usize = 5;

const RECENT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDocumentGenerator;

impl RandomDocumentGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentGenerator for RandomDocumentGenerator {
    fn generate_document(&self) -> Document {
        let mut rng = rand::thread_rng();
        let comment_count = rng.gen_range(0..=MAX_COMMENTS);

        Document {
            title: random_sentence(&mut rng, 3, 10),
            comments: (0..comment_count)
                .map(|_| generate_comment(&mut rng))
                .collect(),
            published_at: recent_timestamp(&mut rng).to_rfc3339_opts(SecondsFormat::Millis, true),
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            extra: ExtraFields::new(),
        }
    }
}

fn generate_comment<R: Rng>(rng: &mut R) -> Comment {
    Comment {
        kind: CommentType::ALL[rng.gen_range(0..CommentType::ALL.len())],
        content: Some(random_paragraph(rng)),
        user: Some(random_username(rng)),
        timestamp: Some(recent_timestamp(rng)),
        extra: ExtraFields::new(),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.gen_range(0..words.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A capitalized, period-terminated sentence of `min_words..=max_words` words.
pub(crate) fn random_sentence<R: Rng>(rng: &mut R, min_words: usize, max_words: usize) -> String {
    let word_count = rng.gen_range(min_words..=max_words);
    let words: Vec<&str> = (0..word_count).map(|_| pick(rng, LOREM_WORDS)).collect();

    format!("{}.", capitalize(&words.join(" ")))
}

/// Three to six sentences.
pub(crate) fn random_paragraph<R: Rng>(rng: &mut R) -> String {
    let sentences = rng.gen_range(3..=6);
    (0..sentences)
        .map(|_| random_sentence(rng, 4, 12))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn random_username<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);

    match rng.gen_range(0..3) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}{}", first, last, rng.gen_range(0..100)),
        _ => format!("{}{}", first, rng.gen_range(0..1000)),
    }
}

/// A timestamp within the last day.
pub(crate) fn recent_timestamp<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    Utc::now() - Duration::milliseconds(rng.gen_range(0..RECENT_WINDOW_MS))
}
