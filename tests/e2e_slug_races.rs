// tests/e2e_slug_races.rs
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

mod support;

use support::{
    ADMIN_TOKEN, ArticleBuilder, assert_error_response, build_test_app_with_slug_races, read_json,
};

fn article_body(title: &str, category_id: i64) -> Value {
    json!({
        "title": title,
        "content": "<p>Le marais</p>",
        "categoryId": category_id,
        "blog": "Somme-photos",
    })
}

#[tokio::test]
async fn create_retries_after_losing_slug_races() {
    let app = build_test_app_with_slug_races(2);
    let category = app.create_category("Nature").await;

    let resp = app
        .json(
            Method::POST,
            "/api/articles",
            Some(ADMIN_TOKEN),
            Some(article_body("Les Hortillonnages", category)),
        )
        .await;
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["slug"], "les-hortillonnages-2");
    // two rivals plus ours
    assert_eq!(app.articles.len(), 3);
}

#[tokio::test]
async fn create_gives_up_with_conflict_after_five_lost_races() {
    let app = build_test_app_with_slug_races(5);
    let category = app.create_category("Nature").await;

    let resp = app
        .json(
            Method::POST,
            "/api/articles",
            Some(ADMIN_TOKEN),
            Some(article_body("Les Hortillonnages", category)),
        )
        .await;
    assert_error_response(resp, StatusCode::CONFLICT).await;
    assert_eq!(app.articles.len(), 5);
}

#[tokio::test]
async fn retitle_retries_after_losing_a_slug_race() {
    let app = build_test_app_with_slug_races(1);
    let category = app.create_category("Nature").await;
    app.articles
        .seed(ArticleBuilder::new().id(7).category(category).build());

    let resp = app
        .json(
            Method::PUT,
            "/api/articles/7",
            Some(ADMIN_TOKEN),
            Some(json!({ "title": "La Baie de Somme" })),
        )
        .await;
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["slug"], "la-baie-de-somme-1");
    assert_eq!(app.articles.get(7).unwrap().slug.as_str(), "la-baie-de-somme-1");
}

#[tokio::test]
async fn retitle_gives_up_with_conflict_after_five_lost_races() {
    let app = build_test_app_with_slug_races(5);
    let category = app.create_category("Nature").await;
    app.articles
        .seed(ArticleBuilder::new().id(7).category(category).build());

    let resp = app
        .json(
            Method::PUT,
            "/api/articles/7",
            Some(ADMIN_TOKEN),
            Some(json!({ "title": "La Baie de Somme" })),
        )
        .await;
    assert_error_response(resp, StatusCode::CONFLICT).await;

    let stored = app.articles.get(7).unwrap();
    assert_eq!(stored.slug.as_str(), "test-article");
    assert_eq!(stored.title.as_str(), "Test Article");
}
