// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    EventLog, FakeImageHost, FakeTokenManager, FixedClock, InMemoryArticleRepo,
    InMemoryCategoryRepo, InMemoryCommentRepo, InMemoryUserRepo, RacingArticleRepo,
    StrictPasswordHasher,
};
use aventures_core::domain::article::ArticleWriteRepository;
use aventures_core::application::services::{ApplicationServices, Collaborators, Repositories};
use aventures_core::infrastructure::util::DefaultSlugGenerator;
use aventures_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

/// Router wired to in-memory fakes, with handles on every fake so tests can
/// seed data and inspect side effects.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub comments: Arc<InMemoryCommentRepo>,
    pub image_host: Arc<FakeImageHost>,
    pub events: EventLog,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(RouterOptions::default())
}

pub fn build_test_app_with(options: RouterOptions) -> TestApp {
    assemble(options, |articles| articles as Arc<dyn ArticleWriteRepository>)
}

/// App whose article writes lose the next `collisions` slug races to a
/// concurrent writer.
pub fn build_test_app_with_slug_races(collisions: usize) -> TestApp {
    assemble(RouterOptions::default(), |articles| {
        Arc::new(RacingArticleRepo::new(articles, collisions)) as Arc<dyn ArticleWriteRepository>
    })
}

fn assemble<F>(options: RouterOptions, article_writes: F) -> TestApp
where
    F: FnOnce(Arc<InMemoryArticleRepo>) -> Arc<dyn ArticleWriteRepository>,
{
    let events = EventLog::default();
    let users = Arc::new(InMemoryUserRepo::default());
    let comments = Arc::new(InMemoryCommentRepo::with_events(events.clone()));
    let articles = Arc::new(InMemoryArticleRepo::with_comments(
        events.clone(),
        comments.clone(),
    ));
    let categories = Arc::new(InMemoryCategoryRepo::default());
    let image_host = Arc::new(FakeImageHost::with_events(events.clone()));

    let services = ApplicationServices::new(
        Repositories {
            users: users.clone(),
            article_writes: article_writes(articles.clone()),
            article_reads: articles.clone(),
            categories: categories.clone(),
            comments: comments.clone(),
        },
        Collaborators {
            password_hasher: Arc::new(StrictPasswordHasher),
            token_manager: Arc::new(FakeTokenManager),
            image_host: image_host.clone(),
            clock: Arc::new(FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
        },
    );

    let router = build_router(
        HttpState {
            services: Arc::new(services),
        },
        options,
    );

    TestApp {
        router,
        users,
        articles,
        categories,
        comments,
        image_host,
        events,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a JSON request, optionally with a bearer token.
    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.json(Method::GET, uri, None, None).await
    }

    /// Create a category as the admin and return its id.
    pub async fn create_category(&self, name: &str) -> i64 {
        let resp = self
            .json(
                Method::POST,
                "/api/categories",
                Some(super::mocks::ADMIN_TOKEN),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_i64().unwrap()
    }

    /// Create an article as the admin and return the response body.
    pub async fn create_article(&self, body: Value) -> Value {
        let resp = self
            .json(
                Method::POST,
                "/api/articles",
                Some(super::mocks::ADMIN_TOKEN),
                Some(body),
            )
            .await;
        let (status, json) = read_json(resp).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json
    }
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected JSON body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and returns its message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let (_, json) = read_json(resp).await;
    let error = json["error"].as_str().unwrap_or("");
    assert_eq!(
        error,
        expected_status.canonical_reason().unwrap(),
        "unexpected error field: {json}"
    );
    let message = json["message"].as_str().unwrap_or("").to_string();
    assert!(!message.is_empty(), "expected non-empty message in {json}");
    message
}
