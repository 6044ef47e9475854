// src/application/commands/articles/quick_edit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        hooks::{SaveAction, SaveRequest},
    },
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate, PostStatus},
};

/// Inline quick-edit submission, one field per form input.
#[derive(Debug, Clone, Default)]
pub struct QuickEditCommand {
    pub id: i64,
    pub action: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub status: String,
    pub previous_status: Option<String>,
    pub nonce: Option<String>,
}

impl ArticleCommandService {
    /// Commit a quick edit as submitted, then run the after-save hooks.
    ///
    /// Slug-save filters are not applied on this path.
    pub async fn quick_edit(&self, command: QuickEditCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let status: PostStatus = command.status.parse()?;
        let previous_status = command
            .previous_status
            .as_deref()
            .and_then(|value| value.parse().ok());
        let title = command.title.map(ArticleTitle::new).transpose()?;
        let submitted = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(ToString::to_string);

        let mut article = self.load(id).await?;
        let now = self.clock.now();

        if let Some(title) = title {
            article.set_title(title, now);
        }
        if let Some(slug) = &submitted {
            let candidate = self.slug_service.slugify(slug);
            let slug = self.slug_service.unique_slug(&candidate, Some(id)).await?;
            article.set_slug(slug, now);
        }
        article.set_status(status, now);

        let saved = self
            .write_repo
            .update(ArticleUpdate::from_article(&article))
            .await?;
        tracing::info!(article_id = %saved.id, slug = %saved.slug, status = %saved.status, "quick edit saved");

        let request = SaveRequest::new(id, SaveAction::parse(&command.action), status)
            .with_previous_status(previous_status)
            .with_slug(submitted)
            .with_nonce(command.nonce);
        self.hooks.dispatch_after_save(&saved, &request, self).await;

        Ok(self.load(id).await?.into())
    }
}
