use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::export::docx::export_docx;
use crate::export::pdf::{export_pdf, Capture};
use crate::export::ExportError;
use crate::models::cv::CvModel;
use crate::state::AppState;

/// POST /api/v1/export/docx
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Json(cv): Json<CvModel>,
) -> Result<Response, AppError> {
    let labels = state.labels.clone();
    // Zip + XML encoding is CPU-bound; keep it off the async executor.
    let file = tokio::task::spawn_blocking(move || export_docx(&cv, &labels))
        .await
        .map_err(|e| ExportError::Task(format!("spawn_blocking failed in DOCX export: {e}")))??;

    info!("Exported DOCX {} ({} bytes)", file.file_name, file.bytes.len());
    Ok(file.into_response())
}

/// POST /api/v1/export/pdf
/// Multipart fields: `cv` (JSON model) and optional `capture` (PNG of the
/// `#cv-capture` element). Without a capture the request is a no-op: 204.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut cv: Option<CvModel> = None;
    let mut capture: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cv" => {
                let raw = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable cv field: {e}")))?;
                cv = Some(
                    serde_json::from_slice(&raw)
                        .map_err(|e| AppError::Validation(format!("Invalid cv JSON: {e}")))?,
                );
            }
            "capture" => {
                let raw = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable capture field: {e}")))?;
                if !raw.is_empty() {
                    capture = Some(raw);
                }
            }
            other => warn!("Ignoring unexpected multipart field {other:?}"),
        }
    }

    let cv = cv.ok_or_else(|| AppError::Validation("Missing cv field".to_string()))?;
    let labels = state.labels.clone();

    let file = tokio::task::spawn_blocking(move || {
        let capture = capture.as_deref().map(Capture::from_png).transpose()?;
        export_pdf(capture.as_ref(), &cv, &labels)
    })
    .await
    .map_err(|e| ExportError::Task(format!("spawn_blocking failed in PDF export: {e}")))??;

    match file {
        Some(file) => {
            info!("Exported PDF {} ({} bytes)", file.file_name, file.bytes.len());
            Ok(file.into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
