// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use permalink_stop_words::domain::{
    article::{
        Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
        ArticleUpdate, ArticleWriteRepository, NewArticle, PostStatus,
    },
    errors::{DomainError, DomainResult},
};
use std::sync::Mutex;

use super::time::fixed_now;

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    next_id: i64,
    updates: usize,
    slug_only_updates: usize,
}

/// Article store backing both repository ports, with update counters.
#[derive(Default)]
pub struct InMemoryArticles {
    state: Mutex<State>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an article directly, bypassing the services.
    pub fn seed(&self, title: &str, slug: &str, status: PostStatus) -> ArticleId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = ArticleId::new(state.next_id).unwrap();
        state.articles.push(Article {
            id,
            title: ArticleTitle::new(title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            body: ArticleBody::new(""),
            status,
            published_at: status.is_published().then(fixed_now),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        });
        id
    }

    pub fn get(&self, id: ArticleId) -> Article {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .expect("seeded article")
    }

    pub fn slug_of(&self, id: ArticleId) -> String {
        self.get(id).slug.as_str().to_string()
    }

    pub fn updates(&self) -> usize {
        self.state.lock().unwrap().updates
    }

    /// Updates that touched the slug and nothing else.
    pub fn slug_only_updates(&self) -> usize {
        self.state.lock().unwrap().slug_only_updates
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.articles.iter().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.next_id += 1;
        let article = Article {
            id: ArticleId::new(state.next_id)?,
            title: new.title,
            slug: new.slug,
            body: new.body,
            status: new.status,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let slug_only = update.slug.is_some()
            && update.title.is_none()
            && update.body.is_none()
            && update.status.is_none();

        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::article_not_found(update.id))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(status) = update.status {
            article.status = status.status;
            article.published_at = status.published_at;
        }
        article.updated_at = update.updated_at;
        let updated = article.clone();

        state.updates += 1;
        if slug_only {
            state.slug_only_updates += 1;
        }
        Ok(updated)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles = state.articles.clone();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(articles)
    }
}
