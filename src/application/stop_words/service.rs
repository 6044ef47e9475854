// src/application/stop_words/service.rs
use std::sync::Arc;

use super::sanitize::sanitize_text_field;
use crate::{
    application::{
        dto::StopWordsSettingsDto, error::ApplicationResult, hooks::StopWordsHook,
        ports::settings::SettingsStore,
    },
    domain::{
        article::ArticleId,
        stop_words::{STOP_WORDS_OPTION, StopWordSet, remove_stop_words},
    },
};

/// Reads the configured stop words and applies them to slugs.
pub struct StopWordsService {
    settings: Arc<dyn SettingsStore>,
    hooks: Vec<Arc<dyn StopWordsHook>>,
}

impl StopWordsService {
    pub fn new(settings: Arc<dyn SettingsStore>, hooks: Vec<Arc<dyn StopWordsHook>>) -> Self {
        Self { settings, hooks }
    }

    /// Effective stop words for `id`, read fresh from the settings store and
    /// passed through every registered [`StopWordsHook`].
    ///
    /// A failed read yields the empty set so the filter degrades to identity.
    pub async fn stop_words_for(&self, id: ArticleId) -> StopWordSet {
        let configured = match self.settings.get_option(STOP_WORDS_OPTION).await {
            Ok(raw) => StopWordSet::parse(raw.as_deref().unwrap_or_default()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stop words; leaving slug untouched");
                StopWordSet::empty()
            }
        };

        self.hooks
            .iter()
            .fold(configured, |words, hook| hook.filter_stop_words(words, id))
    }

    /// Remove the stop words configured for `id` from `slug`.
    pub async fn remove_words(&self, slug: &str, id: ArticleId) -> String {
        let words = self.stop_words_for(id).await;
        let filtered = remove_stop_words(slug, &words);
        if filtered != slug {
            tracing::debug!(article_id = %id, original = slug, filtered = %filtered, "removed stop words from slug");
        }
        filtered
    }

    pub async fn settings(&self) -> ApplicationResult<StopWordsSettingsDto> {
        let words = self
            .settings
            .get_option(STOP_WORDS_OPTION)
            .await?
            .unwrap_or_default();
        Ok(StopWordsSettingsDto { words })
    }

    /// Sanitize and store a new comma-separated list.
    pub async fn update_settings(&self, raw: &str) -> ApplicationResult<StopWordsSettingsDto> {
        let words = sanitize_text_field(raw);
        self.settings
            .update_option(STOP_WORDS_OPTION, &words)
            .await?;
        tracing::info!(words = %words, "stop words updated");
        Ok(StopWordsSettingsDto { words })
    }
}
