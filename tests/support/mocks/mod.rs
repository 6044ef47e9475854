// tests/support/mocks/mod.rs
pub mod article_repo;
pub mod settings;
pub mod time;

pub use article_repo::InMemoryArticles;
pub use settings::{FailingSettingsStore, InMemorySettingsStore};
pub use time::{DummyClock, fixed_now};
