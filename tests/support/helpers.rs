// tests/support/helpers.rs
use super::mocks::{DummyClock, InMemoryArticles, InMemorySettingsStore};
use axum::body::{self, Body};
use axum::http::Response;
use chrono::Duration;
use permalink_stop_words::application::{
    hooks::StopWordsHook,
    ports::{nonce::NonceManager, settings::SettingsStore, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use permalink_stop_words::domain::stop_words::STOP_WORDS_OPTION;
use permalink_stop_words::infrastructure::{
    security::nonce::HmacNonceManager, util::DefaultSlugGenerator,
};
use permalink_stop_words::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret";
pub const TEST_SITE_URL: &str = "http://example.test";
pub const TEST_SETTINGS_PAGE: &str = "writing";

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            settings_page: TEST_SETTINGS_PAGE.to_string(),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }
}

/// Services over in-memory stores with `stop_words` already configured.
pub fn build_app(stop_words: &str) -> TestApp {
    build_app_with(stop_words, Vec::new())
}

pub fn build_app_with(stop_words: &str, hooks: Vec<Arc<dyn StopWordsHook>>) -> TestApp {
    let settings: Arc<dyn SettingsStore> =
        Arc::new(InMemorySettingsStore::with_option(STOP_WORDS_OPTION, stop_words));
    build_app_with_settings(settings, hooks)
}

pub fn build_app_with_settings(
    settings: Arc<dyn SettingsStore>,
    hooks: Vec<Arc<dyn StopWordsHook>>,
) -> TestApp {
    let articles = Arc::new(InMemoryArticles::new());
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let nonces: Arc<dyn NonceManager> = Arc::new(
        HmacNonceManager::new(TEST_SECRET, Duration::hours(24), Arc::clone(&clock))
            .expect("valid test secret"),
    );

    let services = Arc::new(ApplicationServices::new(
        articles.clone(),
        articles.clone(),
        settings,
        nonces,
        clock,
        slugger,
        hooks,
        TEST_SITE_URL,
    ));

    TestApp { services, articles }
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let text = body_text(resp).await;
    serde_json::from_str(&text).expect("json body")
}
