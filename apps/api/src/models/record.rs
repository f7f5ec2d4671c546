use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::cv::{CvModel, EducationEntry, ExperienceEntry, PersonalInfo, TemplateId};

/// Row shape of the external `cvs` table.
///
/// The storage backend uses snake_case top-level columns while the nested
/// JSON columns keep the client's camelCase entry shape. `from_model` is the
/// only place the two naming schemes meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub template: TemplateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CvRecord {
    /// Builds the insert payload. `id` and `created_at` are assigned by storage.
    pub fn from_model(user_id: Uuid, cv: &CvModel) -> Self {
        Self {
            id: None,
            user_id,
            personal_info: cv.personal_info.clone(),
            experience: cv.experience.clone(),
            education: cv.education.clone(),
            skills: cv.skills.clone(),
            achievements: cv.achievements.clone(),
            template: cv.template,
            created_at: None,
        }
    }

    pub fn into_model(self) -> CvModel {
        CvModel {
            personal_info: self.personal_info,
            experience: self.experience,
            education: self.education,
            skills: self.skills,
            achievements: self.achievements,
            template: self.template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_snake_case_personal_info() {
        let mut cv = CvModel::blank();
        cv.personal_info.full_name = "Grace Hopper".to_string();
        let record = CvRecord::from_model(Uuid::new_v4(), &cv);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("personal_info").is_some());
        assert!(json.get("personalInfo").is_none());
        assert_eq!(json["personal_info"]["fullName"], "Grace Hopper");
        assert!(json.get("id").is_none(), "id is assigned by storage");
    }

    #[test]
    fn test_record_round_trips_back_to_model() {
        let mut cv = CvModel::blank().with_template(TemplateId::Tech);
        cv.skills = vec!["Rust".to_string(), "SQL".to_string()];
        let back = CvRecord::from_model(Uuid::new_v4(), &cv).into_model();
        assert_eq!(back, cv);
    }

    #[test]
    fn test_record_deserializes_storage_row() {
        let json = serde_json::json!({
            "id": "7b1c1f40-3a55-4c8e-9a3e-5f0d4f0f9d11",
            "user_id": "2f7d3b4e-9c1a-4f6b-8e2d-1a2b3c4d5e6f",
            "personal_info": { "fullName": "Linus" },
            "skills": ["C"],
            "template": "minimal",
            "created_at": "2024-03-01T10:00:00Z"
        });
        let record: CvRecord = serde_json::from_value(json).unwrap();
        assert!(record.id.is_some());
        assert_eq!(record.template, TemplateId::Minimal);
        assert!(record.experience.is_empty());
    }
}
