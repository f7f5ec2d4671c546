// Template renderers: pure functions from the CV model to an HTML layout.
// Section visibility and bullet splitting live in `content` and are shared
// with the DOCX exporter.

pub mod classify;
pub mod content;
pub mod handlers;
pub mod html;
pub mod labels;
pub mod sample;
pub mod templates;

use serde::Serialize;

use crate::models::cv::{CvModel, TemplateId};
use crate::render::html::Html;

pub use labels::Labels;

/// Logical sections a renderer can emit. The academic variant uses the
/// finer-grained research/publication kinds instead of the generic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Achievements,
    ResearchTeaching,
    Publications,
    GrantsAwards,
    OtherExperience,
    OtherAchievements,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Achievements => "achievements",
            SectionKind::ResearchTeaching => "research_teaching",
            SectionKind::Publications => "publications",
            SectionKind::GrantsAwards => "grants_awards",
            SectionKind::OtherExperience => "other_experience",
            SectionKind::OtherAchievements => "other_achievements",
        }
    }

    /// True for every section built from the experience list.
    #[cfg(test)]
    pub fn is_experience(&self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::ResearchTeaching | SectionKind::OtherExperience
        )
    }
}

/// Output of a renderer: the HTML fragment plus the sections it contains, in
/// display order.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub sections: Vec<SectionKind>,
    pub html: String,
}

impl RenderedDocument {
    #[cfg(test)]
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }
}

/// Accumulates markup and the list of emitted sections for one render.
pub(crate) struct Layout {
    template: TemplateId,
    sections: Vec<SectionKind>,
    pub html: Html,
}

impl Layout {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            sections: Vec::new(),
            html: Html::new(),
        }
    }

    /// Opens the template's root element, tagged with its id.
    pub fn open_root(&mut self, class: &str, style: &str) -> &mut Html {
        let template = self.template.as_str();
        self.html.open_attrs(
            "div",
            &[
                ("class", class),
                ("data-template", template),
                ("style", style),
            ],
        )
    }

    /// Opens `<section data-section=..>` and records the section as emitted.
    pub fn open_section(&mut self, kind: SectionKind, class: &str, style: &str) -> &mut Html {
        self.sections.push(kind);
        self.html.open_attrs(
            "section",
            &[
                ("class", class),
                ("data-section", kind.as_str()),
                ("style", style),
            ],
        )
    }

    pub fn finish(self) -> RenderedDocument {
        RenderedDocument {
            template: self.template,
            sections: self.sections,
            html: self.html.finish(),
        }
    }
}

pub type RenderFn = fn(&CvModel, &Labels) -> RenderedDocument;

pub fn renderer_for(template: TemplateId) -> RenderFn {
    match template {
        TemplateId::Modern => templates::modern::render,
        TemplateId::Classic => templates::classic::render,
        TemplateId::Creative => templates::creative::render,
        TemplateId::Minimal => templates::minimal::render,
        TemplateId::Tech => templates::tech::render,
        TemplateId::Academic => templates::academic::render,
    }
}

/// Renders the model with the template it names.
pub fn render_template(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    renderer_for(cv.template)(cv, labels)
}

/// Catalog entry shown in the template picker.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn template_catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL
        .iter()
        .map(|&id| {
            let (name, description) = match id {
                TemplateId::Modern => (
                    "Modern",
                    "Clean two-column layout with a blue accent and skill chips.",
                ),
                TemplateId::Classic => (
                    "Classic",
                    "Traditional single-column serif layout with ruled headings.",
                ),
                TemplateId::Creative => (
                    "Creative",
                    "Dark gradient canvas, monogram header and card sections.",
                ),
                TemplateId::Minimal => (
                    "Minimal",
                    "Compact, light typography with understated section titles.",
                ),
                TemplateId::Tech => (
                    "Tech",
                    "Monospace dark theme with a sidebar for contact and skills.",
                ),
                TemplateId::Academic => (
                    "Academic",
                    "Serif CV that groups research, publications and grants.",
                ),
            };
            TemplateInfo {
                id,
                name,
                description,
            }
        })
        .collect()
}
