//! Built-in CV shown when a template is previewed before the user has typed
//! anything.

use crate::models::cv::{CvModel, EducationEntry, ExperienceEntry, PersonalInfo, TemplateId};

pub fn sample_cv() -> CvModel {
    CvModel {
        personal_info: PersonalInfo {
            full_name: "Tuna Tunc".to_string(),
            job_title: "Software Engineer".to_string(),
            email: "tuna.tunc@example.com".to_string(),
            phone: "+90 555 123 4567".to_string(),
            location: "Istanbul, Turkey".to_string(),
            summary: "A passionate software engineer with 5 years of experience in developing \
                      innovative solutions. Proficient in multiple programming languages and \
                      frameworks. Eager to contribute to challenging projects."
                .to_string(),
        },
        experience: vec![
            ExperienceEntry {
                company: "Tech Solutions Inc.".to_string(),
                position: "Senior Developer".to_string(),
                start_date: "2020-01".to_string(),
                // Blank end renders as the `present` label.
                end_date: String::new(),
                description: "Led a team of 5 developers.\n\
                              Developed and maintained key product features.\n\
                              Improved application performance by 20%."
                    .to_string(),
            },
            ExperienceEntry {
                company: "Web Wizards LLC".to_string(),
                position: "Junior Developer".to_string(),
                start_date: "2018-06".to_string(),
                end_date: "2019-12".to_string(),
                description: "Assisted in developing client websites.\n\
                              Participated in code reviews and testing."
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            institution: "State University".to_string(),
            degree: "B.Sc. in Computer Science".to_string(),
            start_date: "2014-09".to_string(),
            end_date: "2018-05".to_string(),
            description: "Graduated with Honors.".to_string(),
        }],
        skills: [
            "JavaScript",
            "React",
            "Node.js",
            "Python",
            "SQL",
            "Agile Methodologies",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        achievements: vec![
            "Employee of the Month (Tech Solutions Inc.)".to_string(),
            "Published an open-source library with 1k+ stars on GitHub".to_string(),
        ],
        template: TemplateId::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::check_required;
    use crate::render::content::{description_bullets, visible_experience};

    #[test]
    fn test_sample_passes_required_fields() {
        assert!(check_required(&sample_cv()).passed);
    }

    #[test]
    fn test_sample_description_splits_into_bullets() {
        let cv = sample_cv();
        let current = visible_experience(&cv)[0];
        assert_eq!(description_bullets(&current.description).len(), 3);
        assert!(current.end_date.is_empty());
    }
}
