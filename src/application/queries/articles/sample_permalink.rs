// src/application/queries/articles/sample_permalink.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::SamplePermalinkDto,
        error::ApplicationResult,
        hooks::{SampleContext, SamplePermalink},
    },
    domain::article::ArticleId,
};

/// Preview of the permalink an item would get. `title` and `name` are the
/// unsaved values currently in the editor, if any.
#[derive(Debug, Clone, Default)]
pub struct SamplePermalinkQuery {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
}

impl ArticleQueryService {
    pub async fn sample_permalink(
        &self,
        query: SamplePermalinkQuery,
    ) -> ApplicationResult<SamplePermalinkDto> {
        let id = ArticleId::new(query.id)?;
        let article = self.load(id).await?;

        let title = query.title.as_deref().filter(|title| !title.trim().is_empty());
        let name = query.name.as_deref().filter(|name| !name.trim().is_empty());

        let slug = match (name, title) {
            (Some(name), _) => self.slugger.slugify(name),
            (None, Some(title)) => self.slugger.slugify(title),
            (None, None) if article.status.is_published() => article.slug.as_str().to_string(),
            (None, None) => self.slugger.slugify(article.title.as_str()),
        };

        let sample = SamplePermalink {
            template: self.permalink_template.clone(),
            slug,
        };
        let context = SampleContext {
            id,
            title: query.title.as_deref(),
            name: query.name.as_deref(),
        };

        Ok(self
            .hooks
            .apply_sample_permalink(sample, context)
            .await
            .into())
    }
}
