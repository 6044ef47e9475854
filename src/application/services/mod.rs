// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        hooks::{LifecycleHooks, StopWordsHook},
        ports::{
            nonce::NonceManager, settings::SettingsStore, time::Clock, util::SlugGenerator,
        },
        queries::articles::ArticleQueryService,
        stop_words::{
            NONCE_ACTION, StopWordsOnSave, StopWordsQuickEditCorrection, StopWordsSamplePermalink,
            StopWordsService,
        },
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub stop_words: Arc<StopWordsService>,
    nonce_manager: Arc<dyn NonceManager>,
}

impl ApplicationServices {
    /// Wire the host services with the stop-word integrations attached.
    /// `stop_word_hooks` customize the effective stop words per item.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        settings_store: Arc<dyn SettingsStore>,
        nonce_manager: Arc<dyn NonceManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        stop_word_hooks: Vec<Arc<dyn StopWordsHook>>,
        site_url: &str,
    ) -> Self {
        let stop_words = Arc::new(StopWordsService::new(
            Arc::clone(&settings_store),
            stop_word_hooks,
        ));

        let hooks = LifecycleHooks::default()
            .with_slug_save(Arc::new(StopWordsOnSave::new(Arc::clone(&stop_words))))
            .with_sample_permalink(Arc::new(StopWordsSamplePermalink::new(Arc::clone(
                &stop_words,
            ))))
            .with_after_save(Arc::new(StopWordsQuickEditCorrection::new(
                Arc::clone(&stop_words),
                Arc::clone(&nonce_manager),
                Arc::clone(&slugger),
            )));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            hooks.clone(),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            hooks,
            site_url,
        ));

        Self {
            article_commands,
            article_queries,
            stop_words,
            nonce_manager,
        }
    }

    /// Fresh token for the quick-edit form.
    pub fn quick_edit_nonce(&self) -> String {
        self.nonce_manager.create(NONCE_ACTION)
    }
}
