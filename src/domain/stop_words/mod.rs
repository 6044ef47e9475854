// src/domain/stop_words/mod.rs
pub mod filter;
pub mod value_objects;

pub use filter::{MIN_SLUG_WORDS, SLUG_DELIMITER, remove_stop_words};
pub use value_objects::StopWordSet;

/// Name of the setting holding the comma-separated stop words.
pub const STOP_WORDS_OPTION: &str = "permalink_unwanted_slug_words";
