//! Word export built from the CV model, independent of the visual template.
//!
//! `build_document` decides what goes in; `package::encode` turns the tree
//! into WordprocessingML parts and zips them.

pub mod package;

use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::cv::CvModel;
use crate::render::content::{
    contact_items, description_bullets, education_dates, entry_meta, experience_dates, is_filled, summary,
    visible_achievements, visible_education, visible_experience, visible_skills, ContactKind,
};
use crate::render::Labels;

const NAME_SIZE: u32 = 48;
const TITLE_SIZE: u32 = 28;
const CONTACT_SIZE: u32 = 20;
const ENTRY_TITLE_SIZE: u32 = 24;
const ENTRY_META_SIZE: u32 = 22;
const TITLE_COLOR: &str = "555555";
const META_COLOR: &str = "777777";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size in half-points (`w:sz`).
    pub size_half_points: Option<u32>,
    /// Hex RGB without `#`.
    pub color: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size_half_points = Some(half_points);
        self
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.color = Some(hex.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub centered: bool,
    pub bullet: bool,
}

impl Paragraph {
    pub fn new(run: Run) -> Self {
        Self {
            runs: vec![run],
            ..Default::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn bullet(text: &str) -> Self {
        Self {
            runs: vec![Run::new(text)],
            bullet: true,
            ..Default::default()
        }
    }

    /// Concatenated run text.
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Section heading, styled `Heading2`.
    Heading(String),
    Paragraph(Paragraph),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocxDocument {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl DocxDocument {
    fn push(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading(text.to_string()));
    }

    fn spacer(&mut self) {
        self.push(Paragraph::default());
    }

    /// Headings in document order.
    #[cfg(test)]
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(text) => Some(text.as_str()),
                Block::Paragraph(_) => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Heading(_) => None,
        })
    }
}

/// Lays the CV out as header, then Summary, Experience, Education, Skills and
/// Achievements. A section is skipped when it has nothing to show.
pub fn build_document(cv: &CvModel, labels: &Labels) -> DocxDocument {
    let info = &cv.personal_info;
    let mut doc = DocxDocument {
        title: if is_filled(&info.full_name) {
            info.full_name.trim().to_string()
        } else {
            labels.untitled.clone()
        },
        blocks: Vec::new(),
    };

    if is_filled(&info.full_name) {
        doc.push(Paragraph::new(Run::new(info.full_name.trim()).bold().size(NAME_SIZE)).centered());
    }
    if is_filled(&info.job_title) {
        doc.push(
            Paragraph::new(
                Run::new(info.job_title.trim())
                    .size(TITLE_SIZE)
                    .color(TITLE_COLOR),
            )
            .centered(),
        );
    }
    let contacts: Vec<String> = contact_items(info)
        .into_iter()
        .map(|(kind, value)| {
            let label = match kind {
                ContactKind::Email => &labels.email,
                ContactKind::Phone => &labels.phone,
                ContactKind::Location => &labels.location,
            };
            format!("{label}: {value}")
        })
        .collect();
    if !contacts.is_empty() {
        doc.push(Paragraph::new(Run::new(contacts.join("   ")).size(CONTACT_SIZE)).centered());
    }

    if let Some(text) = summary(cv) {
        doc.heading(&labels.summary);
        doc.push(Paragraph::new(Run::new(text)));
    }

    let experience = visible_experience(cv);
    if !experience.is_empty() {
        doc.heading(&labels.experience);
        for entry in experience {
            doc.push(Paragraph::new(
                Run::new(entry.position.trim()).bold().size(ENTRY_TITLE_SIZE),
            ));
            doc.push(Paragraph::new(
                Run::new(entry_meta(&entry.company, &experience_dates(entry, &labels.present)))
                    .italic()
                    .size(ENTRY_META_SIZE)
                    .color(META_COLOR),
            ));
            for line in description_bullets(&entry.description) {
                doc.push(Paragraph::bullet(line));
            }
            doc.spacer();
        }
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        doc.heading(&labels.education);
        for entry in education {
            doc.push(Paragraph::new(
                Run::new(entry.degree.trim()).bold().size(ENTRY_TITLE_SIZE),
            ));
            doc.push(Paragraph::new(
                Run::new(entry_meta(&entry.institution, &education_dates(entry)))
                    .italic()
                    .size(ENTRY_META_SIZE)
                    .color(META_COLOR),
            ));
            for line in description_bullets(&entry.description) {
                doc.push(Paragraph::bullet(line));
            }
            doc.spacer();
        }
    }

    let skills = visible_skills(cv);
    if !skills.is_empty() {
        doc.heading(&labels.skills);
        doc.push(Paragraph::new(Run::new(skills.join(", "))));
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        doc.heading(&labels.achievements);
        for text in achievements {
            doc.push(Paragraph::bullet(text));
        }
    }

    doc
}

pub fn export_docx(cv: &CvModel, labels: &Labels) -> Result<ExportedFile, ExportError> {
    let doc = build_document(cv, labels);
    let bytes = package::encode(&doc)?;
    Ok(ExportedFile::new(cv, labels, ExportFormat::Docx, bytes))
}
