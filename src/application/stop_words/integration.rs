// src/application/stop_words/integration.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{NONCE_ACTION, StopWordsService};
use crate::{
    application::{
        hooks::{
            AfterSaveHook, ArticleHost, SampleContext, SamplePermalink, SamplePermalinkFilter,
            SaveAction, SaveRequest, SlugSaveFilter,
        },
        ports::{nonce::NonceManager, util::SlugGenerator},
    },
    domain::article::Article,
};

/// Filters the slug of an editor save that publishes a draft.
pub struct StopWordsOnSave {
    stop_words: Arc<StopWordsService>,
}

impl StopWordsOnSave {
    pub fn new(stop_words: Arc<StopWordsService>) -> Self {
        Self { stop_words }
    }
}

#[async_trait]
impl SlugSaveFilter for StopWordsOnSave {
    async fn filter_slug(&self, slug: String, request: &SaveRequest) -> String {
        if !request.is_draft_to_publish() {
            return slug;
        }
        self.stop_words.remove_words(&slug, request.id).await
    }
}

/// Filters the generated slug shown in the sample permalink preview.
pub struct StopWordsSamplePermalink {
    stop_words: Arc<StopWordsService>,
}

impl StopWordsSamplePermalink {
    pub fn new(stop_words: Arc<StopWordsService>) -> Self {
        Self { stop_words }
    }
}

#[async_trait]
impl SamplePermalinkFilter for StopWordsSamplePermalink {
    async fn filter_sample(
        &self,
        mut permalink: SamplePermalink,
        context: SampleContext<'_>,
    ) -> SamplePermalink {
        let explicit_name = context.name.is_some_and(|name| !name.is_empty());
        let has_title = context.title.is_some_and(|title| !title.is_empty());

        if !explicit_name && has_title {
            permalink.slug = self
                .stop_words
                .remove_words(&permalink.slug, context.id)
                .await;
        }
        permalink
    }
}

/// Quick edit commits the slug without passing through [`SlugSaveFilter`]s, so
/// the slug is corrected after the save with a follow-up update.
pub struct StopWordsQuickEditCorrection {
    stop_words: Arc<StopWordsService>,
    nonces: Arc<dyn NonceManager>,
    slugger: Arc<dyn SlugGenerator>,
}

impl StopWordsQuickEditCorrection {
    pub const HOOK_NAME: &'static str = "permalink_stop_words.quick_edit";

    pub fn new(
        stop_words: Arc<StopWordsService>,
        nonces: Arc<dyn NonceManager>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            stop_words,
            nonces,
            slugger,
        }
    }

    fn nonce_is_valid(&self, request: &SaveRequest) -> bool {
        request
            .nonce
            .as_deref()
            .is_some_and(|nonce| self.nonces.verify(nonce, NONCE_ACTION))
    }
}

#[async_trait]
impl AfterSaveHook for StopWordsQuickEditCorrection {
    fn name(&self) -> &'static str {
        Self::HOOK_NAME
    }

    async fn after_save(&self, article: &Article, request: &SaveRequest, host: &dyn ArticleHost) {
        if !self.nonce_is_valid(request) {
            if request.action == SaveAction::InlineSave {
                tracing::debug!(article_id = %article.id, "quick edit token missing or invalid; slug left as saved");
            }
            return;
        }

        if request.action != SaveAction::InlineSave || !request.is_draft_to_publish() {
            return;
        }

        let Some(_detached) = request.scope().detach(Self::HOOK_NAME) else {
            return;
        };

        // The submitted value is raw form text; normalize it the way the host did.
        let submitted = request
            .slug
            .as_deref()
            .map(|slug| self.slugger.slugify(slug))
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| article.slug.as_str().to_string());
        let slug = self.stop_words.remove_words(&submitted, article.id).await;

        if slug == article.slug.as_str() {
            return;
        }

        if let Err(err) = host.update_slug(article.id, &slug, request).await {
            tracing::warn!(article_id = %article.id, error = %err, "failed to store corrected slug");
        }
    }
}
