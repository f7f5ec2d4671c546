//! Download exports: a bitmap-backed PDF and a text-preserving DOCX.

pub mod docx;
pub mod handlers;
pub mod pdf;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::cv::CvModel;
use crate::render::Labels;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Capture could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Capture has no pixels")]
    EmptyCapture,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Export task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A finished download.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(cv: &CvModel, labels: &Labels, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name(cv, labels, format),
            content_type: format.content_type(),
            bytes,
        }
    }
}

impl IntoResponse for ExportedFile {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    content_disposition(&self.file_name),
                ),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// `"{fullName}-{template}.{ext}"`, with the untitled label when the name is blank.
pub fn file_name(cv: &CvModel, labels: &Labels, format: ExportFormat) -> String {
    let name = cv.personal_info.full_name.trim();
    let name = if name.is_empty() {
        labels.untitled.as_str()
    } else {
        name
    };
    format!("{}-{}.{}", name, cv.template, format.extension())
}

/// Attachment header with an ASCII fallback and an RFC 5987 UTF-8 name.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    )
}
