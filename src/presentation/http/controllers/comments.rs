use crate::application::{
    commands::comments::{ApproveCommentCommand, CreateCommentCommand, DeleteCommentCommand},
    dto::{CommentDto, MessageDto},
    queries::comments::ListArticleCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::required;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Id of the commented article.
    #[serde(alias = "articleId")]
    pub article: Option<i64>,
    pub name: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "Every comment, newest first.", body = [CommentDto]),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_all_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_all_comments(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 200, description = "Approved comments of the article.", body = [CommentDto])),
    security(()),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    PathParams(article_id): PathParams<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_article_comments(ListArticleCommentsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Stored as pending.", body = CommentDto),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        article_id: required(payload.article, "article")?,
        name: required(payload.name, "name")?,
        content: required(payload.content, "content")?,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/api/comments/{id}/approve",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, body = CommentDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn approve_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .approve_comment(&user, ApproveCommentCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, body = MessageDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageDto::new("comment deleted")))
}
