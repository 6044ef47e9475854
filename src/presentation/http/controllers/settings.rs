// src/presentation/http/controllers/settings.rs
use crate::application::dto::StopWordsSettingsDto;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension, Form, Json,
    extract::Path,
    response::{Html, Redirect},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStopWordsRequest {
    /// Comma-separated words, e.g. `a,about,above`.
    pub words: String,
}

/// Settings page form; the field is named after the stored option.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub permalink_unwanted_slug_words: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/settings/stop-words",
    responses((status = 200, description = "Stored stop words.", body = StopWordsSettingsDto)),
    tag = "Settings"
)]
pub async fn get_stop_words(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<StopWordsSettingsDto>> {
    state.services.stop_words.settings().await.into_http().map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/settings/stop-words",
    request_body = UpdateStopWordsRequest,
    responses((status = 200, description = "Sanitized value as stored.", body = StopWordsSettingsDto)),
    tag = "Settings"
)]
pub async fn update_stop_words(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UpdateStopWordsRequest>,
) -> HttpResult<Json<StopWordsSettingsDto>> {
    state
        .services
        .stop_words
        .update_settings(&payload.words)
        .await
        .into_http()
        .map(Json)
}

fn ensure_settings_page(state: &HttpState, page: &str) -> HttpResult<()> {
    if page == state.settings_page {
        Ok(())
    } else {
        Err(HttpError::not_found(format!("settings page `{page}` not found")))
    }
}

pub async fn settings_page(
    Extension(state): Extension<HttpState>,
    Path(page): Path<String>,
) -> HttpResult<Html<String>> {
    ensure_settings_page(&state, &page)?;
    let settings = state.services.stop_words.settings().await.into_http()?;
    Ok(Html(views::settings_page(&page, &settings.words)))
}

pub async fn save_settings_page(
    Extension(state): Extension<HttpState>,
    Path(page): Path<String>,
    Form(form): Form<SettingsForm>,
) -> HttpResult<Redirect> {
    ensure_settings_page(&state, &page)?;
    state
        .services
        .stop_words
        .update_settings(&form.permalink_unwanted_slug_words)
        .await
        .into_http()?;
    Ok(Redirect::to(&format!("/admin/options/{page}?settings-updated=true")))
}
