// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    /// Normalizes arbitrary input (a title or a hand-typed slug) into slug form.
    pub fn slugify(&self, input: &str) -> String {
        self.generator.slugify(input)
    }

    /// Returns `candidate` unless another article already owns it, in which case
    /// `-2`, `-3`, ... is appended until a free slug is found.
    pub async fn unique_slug(
        &self,
        candidate: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base_slug = if candidate.is_empty() {
            format!("article-{}", self.clock.now().timestamp())
        } else {
            candidate.to_string()
        };

        let mut candidate = base_slug.clone();
        let mut counter = 2u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
