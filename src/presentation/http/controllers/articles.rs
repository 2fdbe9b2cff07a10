// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, RemoveArticleImageCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleImageDto, ImageRemovalDto, MessageDto},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParams, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::required;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListParams {
    /// Only list articles of this blog.
    #[serde(default)]
    pub blog_slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub images: Vec<ArticleImageDto>,
    #[serde(alias = "category")]
    pub category_id: Option<i64>,
    pub blog: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<ArticleImageDto>>,
    #[serde(alias = "category")]
    pub category_id: Option<i64>,
    pub blog: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = [ArticleDto])
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            blog_slug: params.blog_slug,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
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
    path = "/api/articles/slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    PathParams(slug): PathParams<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, body = ArticleDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: required(payload.title, "title")?,
        content: required(payload.content, "content")?,
        images: payload.images,
        category_id: required(payload.category_id, "category")?,
        blog: required(payload.blog, "blog")?,
    };

    let created = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, body = ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParams(id): PathParams<i64>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        images: payload.images,
        category_id: payload.category_id,
        blog: payload.blog,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = MessageDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageDto::new("article deleted")))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}/images/{storage_id}",
    params(
        ("id" = i64, Path, description = "Article id"),
        ("storage_id" = String, Path, description = "Image host identifier; may contain '/'")
    ),
    responses(
        (status = 200, body = ImageRemovalDto),
        (status = 404, body = ErrorResponse),
        (status = 500, description = "The image host refused the deletion.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn remove_article_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParams((id, storage_id)): PathParams<(i64, String)>,
) -> HttpResult<Json<ImageRemovalDto>> {
    let command = RemoveArticleImageCommand {
        article_id: id,
        storage_id,
    };

    state
        .services
        .article_commands
        .remove_article_image(&user, command)
        .await
        .into_http()
        .map(Json)
}
