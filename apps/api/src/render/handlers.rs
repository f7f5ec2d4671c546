use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::debug;

use crate::models::cv::{CvModel, TemplateId};
use crate::preview::PreviewSurface;
use crate::render::sample::sample_cv;
use crate::render::{template_catalog, TemplateInfo};
use crate::state::AppState;

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(template_catalog())
}

/// POST /api/v1/preview
/// Renders the posted draft with its selected template as a full HTML page.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(cv): Json<CvModel>,
) -> Html<String> {
    let surface = PreviewSurface::mount(&cv, &state.labels);
    debug!(
        "Rendered preview: template={} sections={:?}",
        cv.template,
        surface.document().sections
    );
    Html(surface.page_html())
}

/// GET /api/v1/templates/:id/preview
/// Renders the built-in sample CV with the given template. Unknown ids fall
/// back to modern.
pub async fn handle_template_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let cv = sample_cv().with_template(TemplateId::parse(&id));
    Html(PreviewSurface::mount(&cv, &state.labels).page_html())
}
