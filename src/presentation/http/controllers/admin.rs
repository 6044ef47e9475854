// src/presentation/http/controllers/admin.rs
use crate::application::{commands::articles::QuickEditCommand, dto::ArticleDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension, Form, Json,
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

const QUICK_EDIT_SCRIPT: &str = include_str!("../../../../assets/js/quick-edit.js");

/// Fields posted by the quick-edit row. Names follow the form inputs.
#[derive(Debug, Deserialize)]
pub struct InlineSaveForm {
    pub action: String,
    pub post_id: i64,
    pub post_title: Option<String>,
    pub post_name: Option<String>,
    #[serde(rename = "_status")]
    pub status: String,
    pub hidden_post_status: Option<String>,
    #[serde(rename = "permalink-stop-words-nonce")]
    pub nonce: Option<String>,
}

impl From<InlineSaveForm> for QuickEditCommand {
    fn from(form: InlineSaveForm) -> Self {
        Self {
            id: form.post_id,
            action: form.action,
            title: form.post_title,
            slug: form.post_name,
            status: form.status,
            previous_status: form.hidden_post_status,
            nonce: form.nonce,
        }
    }
}

/// Post list screen with quick-edit support.
pub async fn list_screen(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    let nonce = state.services.quick_edit_nonce();
    Ok(Html(views::post_list_screen(&articles, &nonce)))
}

pub async fn inline_save(
    Extension(state): Extension<HttpState>,
    Form(form): Form<InlineSaveForm>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .quick_edit(form.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn quick_edit_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        QUICK_EDIT_SCRIPT,
    )
}
