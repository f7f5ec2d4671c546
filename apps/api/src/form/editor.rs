//! Structured edits on a draft CV.
//!
//! Each repeatable section always keeps at least one entry, so the form
//! never has to special-case an empty list.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::cv::{CvModel, EducationEntry, ExperienceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Achievements,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Index {index} is out of range for a section of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot remove the last {0} entry")]
    LastEntry(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    StartDate,
    EndDate,
    Description,
}

/// One field write. Values are stored exactly as typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldUpdate {
    Personal {
        field: PersonalField,
        value: String,
    },
    Experience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Education {
        index: usize,
        field: EducationField,
        value: String,
    },
    Skill {
        index: usize,
        value: String,
    },
    Achievement {
        index: usize,
        value: String,
    },
    Template {
        value: String,
    },
}

/// Wire form of an edit, as posted to `/api/v1/drafts/apply`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FormAction {
    Update { update: FieldUpdate },
    Append { section: Section },
    Remove { section: Section, index: usize },
}

fn slot<T>(items: &mut [T], index: usize) -> Result<&mut T, FormError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(FormError::IndexOutOfRange { index, len })
}

fn remove_at<T>(items: &mut Vec<T>, section: Section, index: usize) -> Result<(), FormError> {
    if index >= items.len() {
        return Err(FormError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    if items.len() == 1 {
        return Err(FormError::LastEntry(section));
    }
    items.remove(index);
    Ok(())
}

/// Draft CV under edit.
#[derive(Debug, Clone)]
pub struct CvForm {
    model: CvModel,
}

impl Default for CvForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CvForm {
    pub fn new() -> Self {
        Self {
            model: CvModel::blank(),
        }
    }

    /// Wraps an existing draft. Empty sections get one blank entry back.
    pub fn from_model(mut model: CvModel) -> Self {
        if model.experience.is_empty() {
            model.experience.push(ExperienceEntry::default());
        }
        if model.education.is_empty() {
            model.education.push(EducationEntry::default());
        }
        if model.skills.is_empty() {
            model.skills.push(String::new());
        }
        if model.achievements.is_empty() {
            model.achievements.push(String::new());
        }
        Self { model }
    }

    #[cfg(test)]
    pub fn model(&self) -> &CvModel {
        &self.model
    }

    pub fn into_model(self) -> CvModel {
        self.model
    }

    #[cfg(test)]
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.model.experience.len(),
            Section::Education => self.model.education.len(),
            Section::Skills => self.model.skills.len(),
            Section::Achievements => self.model.achievements.len(),
        }
    }

    pub fn update(&mut self, update: FieldUpdate) -> Result<(), FormError> {
        match update {
            FieldUpdate::Personal { field, value } => {
                let info = &mut self.model.personal_info;
                let target = match field {
                    PersonalField::FullName => &mut info.full_name,
                    PersonalField::JobTitle => &mut info.job_title,
                    PersonalField::Email => &mut info.email,
                    PersonalField::Phone => &mut info.phone,
                    PersonalField::Location => &mut info.location,
                    PersonalField::Summary => &mut info.summary,
                };
                *target = value;
            }
            FieldUpdate::Experience {
                index,
                field,
                value,
            } => {
                let entry = slot(&mut self.model.experience, index)?;
                let target = match field {
                    ExperienceField::Company => &mut entry.company,
                    ExperienceField::Position => &mut entry.position,
                    ExperienceField::StartDate => &mut entry.start_date,
                    ExperienceField::EndDate => &mut entry.end_date,
                    ExperienceField::Description => &mut entry.description,
                };
                *target = value;
            }
            FieldUpdate::Education {
                index,
                field,
                value,
            } => {
                let entry = slot(&mut self.model.education, index)?;
                let target = match field {
                    EducationField::Institution => &mut entry.institution,
                    EducationField::Degree => &mut entry.degree,
                    EducationField::StartDate => &mut entry.start_date,
                    EducationField::EndDate => &mut entry.end_date,
                    EducationField::Description => &mut entry.description,
                };
                *target = value;
            }
            FieldUpdate::Skill { index, value } => {
                *slot(&mut self.model.skills, index)? = value;
            }
            FieldUpdate::Achievement { index, value } => {
                *slot(&mut self.model.achievements, index)? = value;
            }
            FieldUpdate::Template { value } => {
                self.model.template = crate::models::cv::TemplateId::parse(&value);
            }
        }
        Ok(())
    }

    pub fn append(&mut self, section: Section) {
        match section {
            Section::Experience => self.model.experience.push(ExperienceEntry::default()),
            Section::Education => self.model.education.push(EducationEntry::default()),
            Section::Skills => self.model.skills.push(String::new()),
            Section::Achievements => self.model.achievements.push(String::new()),
        }
    }

    pub fn remove(&mut self, section: Section, index: usize) -> Result<(), FormError> {
        match section {
            Section::Experience => remove_at(&mut self.model.experience, section, index),
            Section::Education => remove_at(&mut self.model.education, section, index),
            Section::Skills => remove_at(&mut self.model.skills, section, index),
            Section::Achievements => remove_at(&mut self.model.achievements, section, index),
        }
    }

    pub fn apply(&mut self, action: FormAction) -> Result<(), FormError> {
        match action {
            FormAction::Update { update } => self.update(update),
            FormAction::Append { section } => {
                self.append(section);
                Ok(())
            }
            FormAction::Remove { section, index } => self.remove(section, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::TemplateId;

    #[test]
    fn test_new_form_has_one_entry_per_section() {
        let form = CvForm::new();
        for section in [
            Section::Experience,
            Section::Education,
            Section::Skills,
            Section::Achievements,
        ] {
            assert_eq!(form.len(section), 1, "{section} should start with one entry");
        }
    }

    #[test]
    fn test_default_form_matches_new() {
        let form = CvForm::default();
        assert_eq!(form.model(), CvForm::new().model());
        assert_eq!(form.len(Section::Skills), 1);
    }

    #[test]
    fn test_removing_last_entry_is_rejected() {
        let mut form = CvForm::new();
        assert_eq!(
            form.remove(Section::Skills, 0),
            Err(FormError::LastEntry(Section::Skills))
        );
        assert_eq!(form.len(Section::Skills), 1);
    }

    #[test]
    fn test_append_then_remove_keeps_remaining_entry() {
        let mut form = CvForm::new();
        form.append(Section::Experience);
        form.update(FieldUpdate::Experience {
            index: 1,
            field: ExperienceField::Company,
            value: "Keep me".to_string(),
        })
        .unwrap();
        form.remove(Section::Experience, 0).unwrap();
        assert_eq!(form.len(Section::Experience), 1);
        assert_eq!(form.model().experience[0].company, "Keep me");
    }

    #[test]
    fn test_update_out_of_range_index() {
        let mut form = CvForm::new();
        let err = form
            .update(FieldUpdate::Achievement {
                index: 3,
                value: "x".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, FormError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn test_remove_out_of_range_index() {
        let mut form = CvForm::new();
        form.append(Section::Education);
        assert_eq!(
            form.remove(Section::Education, 2),
            Err(FormError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_personal_update_stores_value_verbatim() {
        let mut form = CvForm::new();
        form.update(FieldUpdate::Personal {
            field: PersonalField::FullName,
            value: "  Ada  ".to_string(),
        })
        .unwrap();
        assert_eq!(form.model().personal_info.full_name, "  Ada  ");
    }

    #[test]
    fn test_action_deserializes_from_wire_json() {
        let action: FormAction = serde_json::from_value(serde_json::json!({
            "op": "update",
            "update": { "kind": "education", "index": 0, "field": "startDate", "value": "2019" }
        }))
        .unwrap();
        let mut form = CvForm::new();
        form.apply(action).unwrap();
        assert_eq!(form.model().education[0].start_date, "2019");
    }

    #[test]
    fn test_template_update_falls_back_to_modern() {
        let mut form = CvForm::new();
        form.update(FieldUpdate::Template {
            value: "academic".to_string(),
        })
        .unwrap();
        assert_eq!(form.model().template, TemplateId::Academic);
        form.update(FieldUpdate::Template {
            value: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(form.model().template, TemplateId::Modern);
    }

    #[test]
    fn test_from_model_restores_empty_sections() {
        let form = CvForm::from_model(CvModel::default());
        assert_eq!(form.len(Section::Achievements), 1);
    }
}
