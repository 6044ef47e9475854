// src/application/dto/mod.rs
pub mod articles;
pub mod settings;

pub use articles::{ArticleDto, SamplePermalinkDto};
pub use settings::StopWordsSettingsDto;
