use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::editor::{CvForm, FormAction};
use crate::form::submit::{delete_cv, list_cvs, load_cv, submit_cv, SubmitOutcome};
use crate::form::validation::{check_required, RequiredFieldsReport};
use crate::models::cv::CvModel;
use crate::models::record::CvRecord;
use crate::preview::PreviewSurface;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ApplyRequest {
    pub draft: CvModel,
    pub action: FormAction,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub user_id: Uuid,
    pub cv: CvModel,
}

/// GET /api/v1/drafts/new
pub async fn handle_new_draft() -> Json<CvModel> {
    Json(CvForm::new().into_model())
}

/// POST /api/v1/drafts/apply
pub async fn handle_apply(Json(req): Json<ApplyRequest>) -> Result<Json<CvModel>, AppError> {
    let mut form = CvForm::from_model(req.draft);
    form.apply(req.action)?;
    Ok(Json(form.into_model()))
}

/// POST /api/v1/drafts/validate
pub async fn handle_validate(Json(cv): Json<CvModel>) -> Json<RequiredFieldsReport> {
    Json(check_required(&cv))
}

/// GET /api/v1/cvs
pub async fn handle_list_cvs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CvRecord>>, AppError> {
    let cvs = list_cvs(state.store.as_ref(), params.user_id).await?;
    Ok(Json(cvs))
}

/// POST /api/v1/cvs
pub async fn handle_submit_cv(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitOutcome>), AppError> {
    let outcome = submit_cv(state.store.as_ref(), req.user_id, &req.cv, &state.labels).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// DELETE /api/v1/cvs/:id
pub async fn handle_delete_cv(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    delete_cv(state.store.as_ref(), params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/cvs/:id/preview
pub async fn handle_saved_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Html<String>, AppError> {
    let cv = load_cv(state.store.as_ref(), params.user_id, id).await?;
    Ok(Html(PreviewSurface::mount(&cv, &state.labels).page_html()))
}
