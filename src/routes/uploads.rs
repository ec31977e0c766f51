use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::post,
};

use crate::app::AppContext;
use crate::domain::UploadSummary;
use crate::error::ApiError;
use crate::http::{JsonResponse, RouteModule};

/// File upload route
pub struct UploadsModule;

impl RouteModule for UploadsModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route("/post-image", post(post_image))
    }
}

/// `POST /post-image` - accept an uploaded file and report its metadata
///
/// Reads the `image` field from the multipart body, enforces the
/// context's upload limits, and reports name, content type, and size.
/// The file itself is discarded.
async fn post_image(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> JsonResponse<UploadSummary> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|f| f.to_string())
            .ok_or_else(|| ApiError::bad_request("Field `image` must be a file"))?;
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        ctx.upload
            .check(&filename, &content_type, data.len())
            .map_err(ApiError::bad_request)?;

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            size = data.len(),
            "File uploaded"
        );

        return Ok(Json(UploadSummary::new(filename, content_type, data.len())));
    }

    Err(ApiError::bad_request("Multipart field `image` is required"))
}
