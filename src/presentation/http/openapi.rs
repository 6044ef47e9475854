// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::save_article,
        crate::presentation::http::controllers::articles::sample_permalink,
        crate::presentation::http::controllers::settings::get_stop_words,
        crate::presentation::http::controllers::settings::update_stop_words,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::SaveArticleRequest,
            crate::presentation::http::controllers::settings::UpdateStopWordsRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::SamplePermalinkDto,
            crate::application::dto::StopWordsSettingsDto
        )
    ),
    tags(
        (name = "Articles", description = "Article editing and permalink preview"),
        (name = "Settings", description = "Permalink stop-word configuration"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Permalink Stop Words API",
        description = "Article host with stop-word filtering of generated permalinks",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let url = env::var("SITE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
