// src/application/stop_words/mod.rs
mod integration;
mod sanitize;
mod service;

pub use integration::{StopWordsOnSave, StopWordsQuickEditCorrection, StopWordsSamplePermalink};
pub use sanitize::sanitize_text_field;
pub use service::StopWordsService;

/// Action string the quick-edit token is bound to.
pub const NONCE_ACTION: &str = "permalink-stop-words";

/// Form field carrying the quick-edit token.
pub const NONCE_FIELD: &str = "permalink-stop-words-nonce";

/// Form field carrying the status the row had when quick edit opened.
pub const PREVIOUS_STATUS_FIELD: &str = "hidden_post_status";
