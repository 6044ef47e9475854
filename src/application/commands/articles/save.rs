// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        hooks::{SaveAction, SaveRequest},
    },
    domain::article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate, PostStatus},
};

/// Full editor save (`editpost`).
pub struct SaveArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Hand-edited slug; blank means "derive from the title".
    pub slug: Option<String>,
    pub status: String,
    /// Status shown when the editor was opened (`hidden_post_status`).
    pub previous_status: Option<String>,
}

impl ArticleCommandService {
    /// Persist an editor save. The slug about to be stored passes through the
    /// registered slug-save filters before uniqueness is enforced.
    pub async fn save_article(&self, command: SaveArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let status: PostStatus = command.status.parse()?;
        let previous_status = command
            .previous_status
            .as_deref()
            .and_then(|value| value.parse().ok());
        let title = command.title.map(ArticleTitle::new).transpose()?;

        let mut article = self.load(id).await?;
        let now = self.clock.now();

        if let Some(title) = title {
            article.set_title(title, now);
        }
        if let Some(body) = command.body {
            article.set_body(ArticleBody::new(body), now);
        }

        let submitted = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(ToString::to_string);
        let request = SaveRequest::new(id, SaveAction::EditPost, status)
            .with_previous_status(previous_status)
            .with_slug(submitted.clone());

        let candidate = match submitted {
            Some(slug) => self.slug_service.slugify(&slug),
            None => self.slug_service.slugify(article.title.as_str()),
        };
        let candidate = self.hooks.apply_slug_save(candidate, &request).await;
        let slug = self.slug_service.unique_slug(&candidate, Some(id)).await?;
        article.set_slug(slug, now);
        article.set_status(status, now);

        let saved = self
            .write_repo
            .update(ArticleUpdate::from_article(&article))
            .await?;
        tracing::info!(article_id = %saved.id, slug = %saved.slug, status = %saved.status, "article saved");

        self.hooks.dispatch_after_save(&saved, &request, self).await;
        Ok(self.load(id).await?.into())
    }
}
