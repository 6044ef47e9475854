// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, StatusUpdate};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle, PostStatus};
