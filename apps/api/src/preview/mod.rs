//! A4-sized container around a rendered template.
//!
//! The client displays `page_html()` and rasterizes the `#cv-capture` element
//! at `CAPTURE_SCALE` for the PDF export, so the container size here fixes
//! the page geometry of the exported PDF.

use crate::models::cv::CvModel;
use crate::render::html::{escape, Html};
use crate::render::{render_template, Labels, RenderedDocument};

pub const CAPTURE_ELEMENT_ID: &str = "cv-capture";
/// 210mm at 96 CSS px per inch.
pub const PREVIEW_WIDTH_PX: u32 = 794;
/// 297mm at 96 CSS px per inch.
pub const PREVIEW_MIN_HEIGHT_PX: u32 = 1123;
pub const CAPTURE_SCALE: u32 = 2;

const CONTAINER_STYLE: &str =
    "width:210mm;min-height:297mm;margin:0 auto;background:#ffffff;box-shadow:0 4px 24px rgba(0,0,0,0.15);overflow:hidden";

#[derive(Debug, Clone)]
pub struct PreviewSurface {
    document: RenderedDocument,
    title: String,
    html: String,
}

impl PreviewSurface {
    /// Renders the CV with its selected template inside the capture container.
    pub fn mount(cv: &CvModel, labels: &Labels) -> Self {
        let document = render_template(cv, labels);
        let scale = CAPTURE_SCALE.to_string();
        let capture_width = (PREVIEW_WIDTH_PX * CAPTURE_SCALE).to_string();
        let capture_min_height = (PREVIEW_MIN_HEIGHT_PX * CAPTURE_SCALE).to_string();

        let mut html = Html::new();
        html.open_attrs(
            "div",
            &[
                ("id", CAPTURE_ELEMENT_ID),
                ("data-capture-scale", scale.as_str()),
                ("data-capture-width", capture_width.as_str()),
                ("data-capture-min-height", capture_min_height.as_str()),
                ("style", CONTAINER_STYLE),
            ],
        );
        let mut html = html.finish();
        html.push_str(&document.html);
        html.push_str("</div>");

        let name = cv.personal_info.full_name.trim();
        let title = if name.is_empty() {
            labels.untitled.clone()
        } else {
            name.to_string()
        };

        Self {
            document,
            title,
            html,
        }
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    /// The capture container with the rendered template inside.
    pub fn fragment(&self) -> &str {
        &self.html
    }

    /// Standalone page for on-screen display.
    pub fn page_html(&self) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{}</title></head>\
             <body style=\"margin:0;padding:24px 0;background:#e5e7eb\">{}</body></html>",
            escape(&self.title),
            self.fragment()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::TemplateId;

    #[test]
    fn test_container_wraps_selected_template() {
        let cv = CvModel::blank().with_template(TemplateId::Classic);
        let surface = PreviewSurface::mount(&cv, &Labels::default());

        assert!(surface.fragment().starts_with("<div id=\"cv-capture\""));
        assert!(surface.fragment().contains("data-template=\"classic\""));
        assert!(surface.fragment().ends_with("</div>"));
        assert_eq!(surface.document().template, TemplateId::Classic);
    }

    #[test]
    fn test_container_is_a4_sized() {
        let surface = PreviewSurface::mount(&CvModel::blank(), &Labels::default());
        assert!(surface.fragment().contains("width:210mm;min-height:297mm"));
        assert!(surface.fragment().contains("data-capture-scale=\"2\""));
        assert!(surface.fragment().contains("data-capture-width=\"1588\""));
        assert!(surface.fragment().contains("data-capture-min-height=\"2246\""));
    }

    #[test]
    fn test_page_title_escapes_name_and_falls_back() {
        let mut cv = CvModel::blank();
        let page = PreviewSurface::mount(&cv, &Labels::default()).page_html();
        assert!(page.contains("<title>CV</title>"));

        cv.personal_info.full_name = "A&B".to_string();
        let page = PreviewSurface::mount(&cv, &Labels::default()).page_html();
        assert!(page.contains("<title>A&amp;B</title>"));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
