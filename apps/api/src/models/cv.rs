//! The canonical CV model shared by the form editor, renderers and exporters.
//!
//! Wire format is camelCase JSON, matching what the browser client edits.
//! Every field defaults so partially-filled drafts deserialize cleanly.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text; each non-blank line renders as one bullet.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// The six fixed template variants.
///
/// Unknown or missing ids fall back to `Modern` instead of failing, so a stale
/// client or a hand-edited record always renders something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
    Tech,
    Academic,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimal,
        TemplateId::Tech,
        TemplateId::Academic,
    ];

    /// Parses a template id, falling back to `Modern` for anything unrecognised.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "modern" => TemplateId::Modern,
            "classic" => TemplateId::Classic,
            "creative" => TemplateId::Creative,
            "minimal" => TemplateId::Minimal,
            "tech" => TemplateId::Tech,
            "academic" => TemplateId::Academic,
            _ => TemplateId::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
            TemplateId::Tech => "tech",
            TemplateId::Academic => "academic",
        }
    }
}

impl From<Option<String>> for TemplateId {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(TemplateId::parse).unwrap_or_default()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory CV value object. Owned by whichever flow currently holds it and
/// copied freely between editor, preview and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvModel {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub template: TemplateId,
}

impl CvModel {
    /// A fresh draft as the form editor starts it: one blank entry per
    /// repeatable section.
    pub fn blank() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: vec![String::new()],
            achievements: vec![String::new()],
            template: TemplateId::default(),
        }
    }

    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template;
        self
    }
}
