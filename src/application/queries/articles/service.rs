// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        hooks::LifecycleHooks,
        ports::util::SlugGenerator,
    },
    domain::article::{Article, ArticleId, ArticleReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) hooks: LifecycleHooks,
    pub(super) permalink_template: String,
}

impl ArticleQueryService {
    /// `site_url` is the public base URL; permalinks take the form
    /// `{site_url}/%postname%/`.
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        hooks: LifecycleHooks,
        site_url: &str,
    ) -> Self {
        Self {
            read_repo,
            slugger,
            hooks,
            permalink_template: format!("{}/%postname%/", site_url.trim_end_matches('/')),
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
    }
}
