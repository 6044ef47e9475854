// src/application/dto/articles.rs
use crate::application::hooks::SamplePermalink;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[schema(example = "publish")]
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            status: article.status.as_str().to_string(),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SamplePermalinkDto {
    #[schema(example = "http://localhost:8080/%postname%/")]
    pub template: String,
    pub slug: String,
    pub permalink: String,
}

impl From<SamplePermalink> for SamplePermalinkDto {
    fn from(sample: SamplePermalink) -> Self {
        Self {
            permalink: sample.url(),
            template: sample.template,
            slug: sample.slug,
        }
    }
}
