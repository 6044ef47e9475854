// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
