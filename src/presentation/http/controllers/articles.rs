// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, SaveArticleCommand},
    dto::{ArticleDto, SamplePermalinkDto},
    queries::articles::{GetArticleByIdQuery, SamplePermalinkQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Editor save form. `hidden_post_status` is the status the editor was opened with.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveArticleRequest {
    pub post_title: Option<String>,
    pub content: Option<String>,
    pub post_name: Option<String>,
    #[schema(example = "publish")]
    pub post_status: String,
    #[schema(example = "draft")]
    pub hidden_post_status: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SamplePermalinkParams {
    /// Unsaved title currently in the editor.
    pub title: Option<String>,
    /// Explicit slug typed by the user.
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Draft created.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses((status = 200, description = "All articles, newest first.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/save",
    params(("id" = i64, Path, description = "Article id")),
    request_body = SaveArticleRequest,
    responses(
        (status = 200, description = "Saved article with its final slug.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn save_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaveArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SaveArticleCommand {
        id,
        title: payload.post_title,
        body: payload.content,
        slug: payload.post_name,
        status: payload.post_status,
        previous_status: payload.hidden_post_status,
    };

    state
        .services
        .article_commands
        .save_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/sample-permalink",
    params(("id" = i64, Path, description = "Article id"), SamplePermalinkParams),
    responses(
        (status = 200, description = "Permalink preview.", body = SamplePermalinkDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn sample_permalink(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<SamplePermalinkParams>,
) -> HttpResult<Json<SamplePermalinkDto>> {
    let query = SamplePermalinkQuery {
        id,
        title: params.title,
        name: params.name,
    };

    state
        .services
        .article_queries
        .sample_permalink(query)
        .await
        .into_http()
        .map(Json)
}
