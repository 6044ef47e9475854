// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleTitle, PostStatus,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Moves the article to `status`. The first transition into `publish`
    /// stamps `published_at`; leaving `publish` clears it.
    pub fn set_status(&mut self, status: PostStatus, now: DateTime<Utc>) {
        if status.is_published() {
            if !self.status.is_published() {
                self.published_at = Some(now);
            }
        } else {
            self.published_at = None;
        }
        self.status = status;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: ArticleSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_body(&mut self, body: ArticleBody, now: DateTime<Utc>) {
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body: Option<ArticleBody>,
    pub status: Option<StatusUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            status: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_status(
        mut self,
        status: PostStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = Some(StatusUpdate {
            status,
            published_at,
        });
        self
    }

    /// Copies every mutable field of `article` into the update.
    #[must_use]
    pub fn from_article(article: &Article) -> Self {
        Self::new(article.id, article.updated_at)
            .with_title(article.title.clone())
            .with_slug(article.slug.clone())
            .with_body(article.body.clone())
            .with_status(article.status, article.published_at)
    }
}
