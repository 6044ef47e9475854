// src/application/commands/articles/host.rs
use async_trait::async_trait;

use super::ArticleCommandService;
use crate::{
    application::{
        error::ApplicationResult,
        hooks::{ArticleHost, SaveRequest},
    },
    domain::article::{Article, ArticleId, ArticleUpdate},
};

#[async_trait]
impl ArticleHost for ArticleCommandService {
    async fn update_slug(
        &self,
        id: ArticleId,
        slug: &str,
        request: &SaveRequest,
    ) -> ApplicationResult<Article> {
        let article = self.load(id).await?;
        let slug = self.slug_service.unique_slug(slug, Some(id)).await?;
        let now = self.clock.now();

        let updated = self
            .write_repo
            .update(ArticleUpdate::new(id, now).with_slug(slug))
            .await?;
        tracing::info!(
            article_id = %id,
            from = %article.slug,
            to = %updated.slug,
            "slug updated"
        );

        // The update counts as another save of the same request.
        self.hooks.dispatch_after_save(&updated, request, self).await;
        Ok(updated)
    }
}
