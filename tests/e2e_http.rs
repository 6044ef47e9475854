// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use permalink_stop_words::domain::article::PostStatus;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{body_json, body_text, build_app};

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_app("").router();

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn stop_words_settings_are_sanitized_and_read_back() {
    let app = build_app("").router();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/settings/stop-words",
            &json!({ "words": "  a,<b>the</b>,\n of  " }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["words"], "a,the, of");

    let resp = app
        .oneshot(get("/api/v1/settings/stop-words"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["words"], "a,the, of");
}

#[tokio::test]
async fn settings_page_renders_and_saves() {
    let app = build_app("a,about").router();

    let resp = app.clone().oneshot(get("/admin/options/writing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Permalink Stop Words"));
    assert!(html.contains("name=\"permalink_unwanted_slug_words\""));
    assert!(html.contains(">a,about</textarea>"));

    let resp = app
        .clone()
        .oneshot(form_request(
            "/admin/options/writing",
            &[("permalink_unwanted_slug_words", "the,of")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/admin/options/writing?settings-updated=true"
    );

    let resp = app
        .oneshot(get("/api/v1/settings/stop-words"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["words"], "the,of");
}

#[tokio::test]
async fn other_settings_pages_are_not_found() {
    let app = build_app("").router();

    let resp = app.oneshot(get("/admin/options/general")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_list_carries_marker_token_and_script() {
    let test_app = build_app("the");
    test_app
        .articles
        .seed("The Quick Brown Fox", "the-quick-brown-fox", PostStatus::Draft);
    let app = test_app.router();

    let resp = app.clone().oneshot(get("/admin/articles")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<tr id=\"post-1\">"));
    assert!(html.contains("<div class=\"hidden hidden_post_status\">draft</div>"));
    assert!(html.contains("name=\"permalink-stop-words-nonce\""));
    assert!(html.contains("<script src=\"/assets/js/quick-edit.js\"></script>"));

    let resp = app.oneshot(get("/assets/js/quick-edit.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/javascript")
    );
    let script = body_text(resp).await;
    assert!(script.contains("quick-edit:open"));
    assert!(script.contains("hidden_post_status"));
}

#[tokio::test]
async fn inline_save_corrects_slug_on_publish() {
    let test_app = build_app("the");
    let id = test_app
        .articles
        .seed("The Quick Brown Fox", "the-quick-brown-fox", PostStatus::Draft);
    let nonce = test_app.services.quick_edit_nonce();
    let app = test_app.router();
    let post_id = i64::from(id).to_string();

    let resp = app
        .oneshot(form_request(
            "/admin/inline-save",
            &[
                ("action", "inline-save"),
                ("post_id", post_id.as_str()),
                ("post_title", "The Quick Brown Fox"),
                ("post_name", "the-quick-brown-fox"),
                ("_status", "publish"),
                ("hidden_post_status", "draft"),
                ("permalink-stop-words-nonce", nonce.as_str()),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["slug"], "quick-brown-fox");
    assert_eq!(body["status"], "publish");
    assert_eq!(test_app.articles.slug_only_updates(), 1);
}

#[tokio::test]
async fn inline_save_with_bad_token_keeps_slug() {
    let test_app = build_app("the");
    let id = test_app
        .articles
        .seed("The Quick Brown Fox", "the-quick-brown-fox", PostStatus::Draft);
    let app = test_app.router();
    let post_id = i64::from(id).to_string();

    let resp = app
        .oneshot(form_request(
            "/admin/inline-save",
            &[
                ("action", "inline-save"),
                ("post_id", post_id.as_str()),
                ("post_name", "the-quick-brown-fox"),
                ("_status", "publish"),
                ("hidden_post_status", "draft"),
                ("permalink-stop-words-nonce", "not-a-token"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["slug"], "the-quick-brown-fox");
}

#[tokio::test]
async fn editor_save_filters_slug_over_http() {
    let app = build_app("the").router();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/articles",
            &json!({ "title": "The Quick Brown Fox Jumps" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    assert_eq!(created["slug"], "the-quick-brown-fox-jumps");
    assert_eq!(created["status"], "draft");
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/articles/{id}/save"),
            &json!({ "post_status": "publish", "hidden_post_status": "draft" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["slug"], "quick-brown-fox-jumps");

    let resp = app
        .oneshot(get(&format!("/api/v1/articles/{id}")))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["slug"], "quick-brown-fox-jumps");
}

#[tokio::test]
async fn sample_permalink_endpoint_previews_filtered_slug() {
    let test_app = build_app("the");
    let id = test_app
        .articles
        .seed("Untitled", "untitled", PostStatus::Draft);
    let app = test_app.router();

    let resp = app
        .oneshot(get(&format!(
            "/api/v1/articles/{}/sample-permalink?title=The%20Quick%20Brown%20Fox",
            i64::from(id)
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["slug"], "quick-brown-fox");
    assert_eq!(body["permalink"], "http://example.test/quick-brown-fox/");
}

#[tokio::test]
async fn unknown_article_is_404() {
    let app = build_app("").router();

    let resp = app.oneshot(get("/api/v1/articles/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Not Found");
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let test_app = build_app("");
    let id = test_app.articles.seed("Title", "title", PostStatus::Draft);
    let app = test_app.router();

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/articles/{}/save", i64::from(id)),
            &json!({ "post_status": "archived" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = build_app("").router();

    let resp = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/articles/{id}/save"));
    assert!(paths.contains_key("/api/v1/settings/stop-words"));
    assert!(paths.contains_key("/health"));
}
