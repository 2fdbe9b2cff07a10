use crate::application::{dto::StoredImageDto, ports::media::UploadedImage};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, multipart::MultipartRejection},
};

const FILE_FIELD: &str = "file";

/// Multipart form with a single `file` part, as documented for the upload route.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored on the image host.", body = StoredImageDto),
        (status = 400, description = "No file in the request.", body = ErrorResponse),
        (status = 500, description = "Image host failure.", body = ErrorResponse)
    ),
    security(()),
    tag = "Media"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<Json<StoredImageDto>> {
    let mut multipart = multipart.map_err(|_| HttpError::bad_request("no file uploaded"))?;

    let image = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(format!("malformed upload: {}", err.body_text())))?
            .ok_or_else(|| HttpError::bad_request("no file uploaded"))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(format!("malformed upload: {}", err.body_text())))?;

        break UploadedImage {
            file_name,
            content_type,
            data,
        };
    };

    state
        .services
        .media_commands
        .upload_image(image)
        .await
        .into_http()
        .map(Json)
}
