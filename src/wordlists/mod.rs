//! Built-in word lists
//!
//! Topic vocabularies compiled into the binary, plus helpers for loading word
//! files.

mod embedded;
pub mod loader;

pub use embedded::{ANIMALS, MATH, SPACE, TOPICS};

/// Word list for a topic name (case-insensitive)
#[must_use]
pub fn topic_words(topic: &str) -> Option<&'static [&'static str]> {
    TOPICS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(topic.trim()))
        .map(|&(_, words)| words)
}
