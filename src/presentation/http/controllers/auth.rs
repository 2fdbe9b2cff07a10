// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterInitialAdminCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/auth/register-initial-admin",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Administrator created.", body = RegisterResponse),
        (status = 400, description = "An administrator already exists or input is invalid.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register_initial_admin(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<(StatusCode, Json<RegisterResponse>)> {
    let command = RegisterInitialAdminCommand {
        email: required(payload.email, "email")?,
        password: required(payload.password, "password")?,
    };

    let user = state
        .services
        .user_commands
        .register_initial_admin(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "administrator created".into(),
            user,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signed bearer token.", body = LoginResponse),
        (status = 400, description = "Unknown email or wrong password.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: required(payload.email, "email")?,
        password: required(payload.password, "password")?,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}
