// src/application/queries/articles/mod.rs
mod get_by_id;
mod list;
mod sample_permalink;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use sample_permalink::SamplePermalinkQuery;
pub use service::ArticleQueryService;
