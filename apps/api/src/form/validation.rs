use serde::Serialize;

use crate::models::cv::CvModel;

/// Personal fields a CV must have before it can be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    FullName,
    JobTitle,
    Email,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::FullName => "fullName",
            RequiredField::JobTitle => "jobTitle",
            RequiredField::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequiredFieldsReport {
    pub passed: bool,
    pub missing: Vec<RequiredField>,
}

/// Reports required fields that are blank after trimming. Dates and other
/// fields are not checked.
pub fn check_required(cv: &CvModel) -> RequiredFieldsReport {
    let info = &cv.personal_info;
    let missing: Vec<RequiredField> = [
        (RequiredField::FullName, &info.full_name),
        (RequiredField::JobTitle, &info.job_title),
        (RequiredField::Email, &info.email),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    RequiredFieldsReport {
        passed: missing.is_empty(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_misses_all_required_fields() {
        let report = check_required(&CvModel::blank());
        assert!(!report.passed);
        assert_eq!(
            report.missing,
            vec![
                RequiredField::FullName,
                RequiredField::JobTitle,
                RequiredField::Email
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut cv = CvModel::blank();
        cv.personal_info.full_name = "Ada".to_string();
        cv.personal_info.job_title = "   ".to_string();
        cv.personal_info.email = "ada@example.com".to_string();
        let report = check_required(&cv);
        assert_eq!(report.missing, vec![RequiredField::JobTitle]);
    }

    #[test]
    fn test_filled_draft_passes_without_date_checks() {
        let mut cv = CvModel::blank();
        cv.personal_info.full_name = "Ada".to_string();
        cv.personal_info.job_title = "Engineer".to_string();
        cv.personal_info.email = "ada@example.com".to_string();
        cv.experience[0].start_date = "2024".to_string();
        cv.experience[0].end_date = "2001".to_string();
        assert!(check_required(&cv).passed);
    }
}
