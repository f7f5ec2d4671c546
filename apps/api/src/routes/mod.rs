pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::render::handlers as render;
use crate::state::AppState;

/// A 2x capture of an A4 page is a few MB of PNG; axum's 2 MB default is too small.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates and preview
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route(
            "/api/v1/templates/:id/preview",
            get(render::handle_template_preview),
        )
        .route("/api/v1/preview", post(render::handle_preview))
        // Draft editing
        .route("/api/v1/drafts/new", get(form::handle_new_draft))
        .route("/api/v1/drafts/apply", post(form::handle_apply))
        .route("/api/v1/drafts/validate", post(form::handle_validate))
        // Exports
        .route("/api/v1/export/docx", post(export::handle_export_docx))
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        // Saved CVs
        .route(
            "/api/v1/cvs",
            get(form::handle_list_cvs).post(form::handle_submit_cv),
        )
        .route("/api/v1/cvs/:id", delete(form::handle_delete_cv))
        .route("/api/v1/cvs/:id/preview", get(form::handle_saved_preview))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::render::Labels;
    use crate::storage::memory::FailingInsertStore;
    use crate::storage::InMemoryCvStore;

    const BOUNDARY: &str = "cvstudio-test-boundary";

    fn app_with_credits(credits: i64) -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryCvStore::new(credits)),
            labels: Arc::new(Labels::default()),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn sample_cv() -> Value {
        json!({
            "personalInfo": {
                "fullName": "Ada Lovelace",
                "jobTitle": "Analyst",
                "email": "ada@example.com"
            },
            "experience": [{ "company": "Engines Ltd", "position": "Programmer",
                             "description": "Wrote note G." }],
            "skills": ["Maths", "Poetry"],
            "template": "classic"
        })
    }

    fn multipart_request(cv: &Value, capture: Option<&[u8]>) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cv\"\r\n\
                 Content-Type: application/json\r\n\r\n{cv}\r\n"
            )
            .as_bytes(),
        );
        if let Some(png) = capture {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"capture\"; \
                     filename=\"capture.png\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(png);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/export/pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn white_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_with_credits(3).oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["service"], "cvstudio");
    }

    #[tokio::test]
    async fn test_templates_lists_six() {
        let response = app_with_credits(3)
            .oneshot(get_request("/api/v1/templates"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(6));
        assert_eq!(body[5]["id"], "academic");
    }

    #[tokio::test]
    async fn test_preview_returns_html_for_selected_template() {
        let response = app_with_credits(3)
            .oneshot(json_request("POST", "/api/v1/preview", sample_cv()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("id=\"cv-capture\""));
        assert!(html.contains("data-template=\"classic\""));
    }

    #[tokio::test]
    async fn test_template_preview_uses_sample_data() {
        let response = app_with_credits(3)
            .oneshot(get_request("/api/v1/templates/tech/preview"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("data-template=\"tech\""));
        assert!(html.contains("Tuna Tunc"));
        assert!(html.contains("Tech Solutions Inc."));
    }

    #[tokio::test]
    async fn test_template_preview_unknown_id_falls_back_to_modern() {
        let response = app_with_credits(3)
            .oneshot(get_request("/api/v1/templates/baroque/preview"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("data-template=\"modern\""));
    }

    #[tokio::test]
    async fn test_apply_rejects_removing_last_entry() {
        let response = app_with_credits(3)
            .oneshot(json_request(
                "POST",
                "/api/v1/drafts/apply",
                json!({
                    "draft": { "skills": ["Rust"] },
                    "action": { "op": "remove", "section": "skills", "index": 0 }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_apply_appends_entry() {
        let response = app_with_credits(3)
            .oneshot(json_request(
                "POST",
                "/api/v1/drafts/apply",
                json!({
                    "draft": { "achievements": ["Won"] },
                    "action": { "op": "append", "section": "achievements" }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["achievements"], json!(["Won", ""]));
    }

    #[tokio::test]
    async fn test_validate_reports_missing_fields() {
        let response = app_with_credits(3)
            .oneshot(json_request(
                "POST",
                "/api/v1/drafts/validate",
                json!({ "personalInfo": { "fullName": "Ada" } }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["passed"], false);
        assert_eq!(body["missing"], json!(["jobTitle", "email"]));
    }

    #[tokio::test]
    async fn test_docx_export_is_an_attachment() {
        let response = app_with_credits(3)
            .oneshot(json_request("POST", "/api/v1/export/docx", sample_cv()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("filename=\"Ada Lovelace-classic.docx\""));
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"PK"), "DOCX is a zip archive");
    }

    #[tokio::test]
    async fn test_pdf_export_without_capture_is_no_content() {
        let response = app_with_credits(3)
            .oneshot(multipart_request(&sample_cv(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_pdf_export_with_capture() {
        let png = white_png(8, 12);
        let response = app_with_credits(3)
            .oneshot(multipart_request(&sample_cv(), Some(&png)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(String::from_utf8_lossy(&bytes).contains("/MediaBox [0 0 8 12]"));
    }

    #[tokio::test]
    async fn test_submit_list_and_delete_flow() {
        let app = app_with_credits(1);
        let user_id = Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/cvs",
                json!({ "user_id": user_id, "cv": sample_cv() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["credits_remaining"], 0);
        let cv_id = created["cv"]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/cvs",
                json!({ "user_id": user_id, "cv": sample_cv() }),
            ))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::PAYMENT_REQUIRED,
            "second submission has no credits left"
        );

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/cvs?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(1));

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/cvs/{cv_id}/preview?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/cvs/{cv_id}?user_id={user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request(&format!("/api/v1/cvs/{cv_id}/preview?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_storage_failure_is_bad_gateway() {
        let app = build_router(AppState {
            store: Arc::new(FailingInsertStore {
                inner: InMemoryCvStore::new(3),
            }),
            labels: Arc::new(Labels::default()),
        });
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/cvs",
                json!({ "user_id": Uuid::new_v4(), "cv": sample_cv() }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "STORAGE_ERROR");
    }
}
