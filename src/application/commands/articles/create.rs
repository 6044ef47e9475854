// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleBody, ArticleTitle, NewArticle, PostStatus},
};

/// Creates a draft. Drafts get a slug straight from the title; stop words are
/// only removed once the draft is published.
pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body);
        let now = self.clock.now();

        let candidate = self.slug_service.slugify(title.as_str());
        let slug = self.slug_service.unique_slug(&candidate, None).await?;

        let article = self
            .write_repo
            .insert(NewArticle {
                title,
                slug,
                body,
                status: PostStatus::Draft,
                published_at: None,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(article_id = %article.id, slug = %article.slug, "draft created");
        Ok(article.into())
    }
}
