//! Asset upload route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::services::assets::{BatchUploadReport, UploadRequest};
use crate::state::AppState;

/// Body for the batch endpoint.
#[derive(Debug, Deserialize)]
pub struct BatchUploadBody {
    #[serde(default)]
    pub files: Vec<UploadRequest>,
}

/// `POST /upload` - forward one file to the image CDN.
///
/// Returns the CDN-assigned public URL. Missing content or name is a 400;
/// a CDN failure surfaces as a generic upstream error.
pub async fn upload(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<Value>> {
    let asset = state
        .assets()
        .upload(&request.file, &request.file_name)
        .await?;

    Ok(Json(json!({ "url": asset.url })))
}

/// `POST /upload/batch` - forward several files, one CDN round-trip at a
/// time, and report which succeeded and which failed.
pub async fn upload_batch(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(body): Json<BatchUploadBody>,
) -> Json<BatchUploadReport> {
    Json(state.assets().upload_batch(&body.files).await)
}
