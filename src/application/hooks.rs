// src/application/hooks.rs
//! Extension points the host exposes around the article save lifecycle.
//!
//! Collaborators are composed explicitly into [`LifecycleHooks`] when the
//! services are built; there is no global registry.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::application::ApplicationResult;
use crate::domain::article::{Article, ArticleId, PostStatus};
use crate::domain::stop_words::StopWordSet;

/// Which form committed the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// Full editor screen (`editpost`).
    EditPost,
    /// Inline quick-edit row (`inline-save`).
    InlineSave,
    /// Any other submitted action string.
    Other,
}

impl SaveAction {
    pub fn parse(value: &str) -> Self {
        match value {
            "editpost" => Self::EditPost,
            "inline-save" => Self::InlineSave,
            _ => Self::Other,
        }
    }
}

/// Typed view of the submitted form that triggered a save, built once at the
/// request boundary and shared with every hook that runs for that save.
#[derive(Debug)]
pub struct SaveRequest {
    pub id: ArticleId,
    pub action: SaveAction,
    pub status: PostStatus,
    /// Status the item had when the form was rendered (`hidden_post_status`).
    pub previous_status: Option<PostStatus>,
    pub slug: Option<String>,
    pub nonce: Option<String>,
    scope: HookScope,
}

impl SaveRequest {
    pub fn new(id: ArticleId, action: SaveAction, status: PostStatus) -> Self {
        Self {
            id,
            action,
            status,
            previous_status: None,
            slug: None,
            nonce: None,
            scope: HookScope::default(),
        }
    }

    #[must_use]
    pub fn with_previous_status(mut self, previous: Option<PostStatus>) -> Self {
        self.previous_status = previous;
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: Option<String>) -> Self {
        self.slug = slug;
        self
    }

    #[must_use]
    pub fn with_nonce(mut self, nonce: Option<String>) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn is_draft_to_publish(&self) -> bool {
        self.previous_status == Some(PostStatus::Draft) && self.status == PostStatus::Publish
    }

    pub fn scope(&self) -> &HookScope {
        &self.scope
    }
}

/// Hooks detached for the remainder of one logical save.
#[derive(Debug, Default)]
pub struct HookScope {
    detached: Mutex<HashSet<&'static str>>,
}

impl HookScope {
    fn lock(&self) -> MutexGuard<'_, HashSet<&'static str>> {
        self.detached.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Detach `hook` until the returned guard drops. `None` if it is already detached.
    pub fn detach(&self, hook: &'static str) -> Option<DetachGuard<'_>> {
        if self.lock().insert(hook) {
            Some(DetachGuard { scope: self, hook })
        } else {
            None
        }
    }

    pub fn is_detached(&self, hook: &str) -> bool {
        self.lock().contains(hook)
    }
}

/// Reattaches its hook on drop.
#[derive(Debug)]
pub struct DetachGuard<'a> {
    scope: &'a HookScope,
    hook: &'static str,
}

impl Drop for DetachGuard<'_> {
    fn drop(&mut self) {
        self.scope.lock().remove(self.hook);
    }
}

/// Rewrites the slug of an item right before it is persisted by an editor save.
#[async_trait]
pub trait SlugSaveFilter: Send + Sync {
    async fn filter_slug(&self, slug: String, request: &SaveRequest) -> String;
}

/// A sample permalink: the URL template holding `%postname%` and the slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePermalink {
    pub template: String,
    pub slug: String,
}

impl SamplePermalink {
    pub const PLACEHOLDER: &'static str = "%postname%";

    pub fn url(&self) -> String {
        self.template.replace(Self::PLACEHOLDER, &self.slug)
    }
}

/// Arguments the sample permalink was requested with.
#[derive(Debug, Clone, Copy)]
pub struct SampleContext<'a> {
    pub id: ArticleId,
    pub title: Option<&'a str>,
    pub name: Option<&'a str>,
}

#[async_trait]
pub trait SamplePermalinkFilter: Send + Sync {
    async fn filter_sample(
        &self,
        permalink: SamplePermalink,
        context: SampleContext<'_>,
    ) -> SamplePermalink;
}

/// Host operations an after-save hook may call back into.
#[async_trait]
pub trait ArticleHost: Send + Sync {
    /// Persist a new slug for `id`. Runs the after-save hooks again with `request`.
    async fn update_slug(
        &self,
        id: ArticleId,
        slug: &str,
        request: &SaveRequest,
    ) -> ApplicationResult<Article>;
}

#[async_trait]
pub trait AfterSaveHook: Send + Sync {
    /// Stable identifier used to detach the hook within a [`HookScope`].
    fn name(&self) -> &'static str;

    async fn after_save(&self, article: &Article, request: &SaveRequest, host: &dyn ArticleHost);
}

/// Customizes the effective stop words for one item, e.g. by category.
pub trait StopWordsHook: Send + Sync {
    fn filter_stop_words(&self, words: StopWordSet, id: ArticleId) -> StopWordSet;
}

#[derive(Clone, Default)]
pub struct LifecycleHooks {
    pub slug_save: Vec<Arc<dyn SlugSaveFilter>>,
    pub sample_permalink: Vec<Arc<dyn SamplePermalinkFilter>>,
    pub after_save: Vec<Arc<dyn AfterSaveHook>>,
}

impl LifecycleHooks {
    #[must_use]
    pub fn with_slug_save(mut self, filter: Arc<dyn SlugSaveFilter>) -> Self {
        self.slug_save.push(filter);
        self
    }

    #[must_use]
    pub fn with_sample_permalink(mut self, filter: Arc<dyn SamplePermalinkFilter>) -> Self {
        self.sample_permalink.push(filter);
        self
    }

    #[must_use]
    pub fn with_after_save(mut self, hook: Arc<dyn AfterSaveHook>) -> Self {
        self.after_save.push(hook);
        self
    }

    pub async fn apply_slug_save(&self, mut slug: String, request: &SaveRequest) -> String {
        for filter in &self.slug_save {
            slug = filter.filter_slug(slug, request).await;
        }
        slug
    }

    pub async fn apply_sample_permalink(
        &self,
        mut permalink: SamplePermalink,
        context: SampleContext<'_>,
    ) -> SamplePermalink {
        for filter in &self.sample_permalink {
            permalink = filter.filter_sample(permalink, context).await;
        }
        permalink
    }

    /// Runs every attached after-save hook in registration order.
    pub async fn dispatch_after_save(
        &self,
        article: &Article,
        request: &SaveRequest,
        host: &dyn ArticleHost,
    ) {
        for hook in &self.after_save {
            if request.scope().is_detached(hook.name()) {
                tracing::trace!(hook = hook.name(), "skipping detached after-save hook");
                continue;
            }
            hook.after_save(article, request, host).await;
        }
    }
}
