use serde::{Deserialize, Serialize};

/// Locale strings consumed by renderers and exporters.
///
/// Loading translations is the client's concern; the service renders with the
/// English set below. Fields missing from a serialized set keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub achievements: String,
    pub present: String,
    pub about_me: String,
    pub research_profile: String,
    pub research_teaching: String,
    pub publications: String,
    pub grants_awards: String,
    pub other_experience: String,
    pub other_achievements: String,
    pub researcher: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Used in download names when the CV has no full name.
    pub untitled: String,
    /// Summary filled in on save when the user left theirs blank.
    /// `{job_title}` is replaced with the CV's job title.
    pub generated_summary: String,
}

impl Labels {
    pub fn generated_summary(&self, job_title: &str) -> String {
        self.generated_summary.replace("{job_title}", job_title.trim())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            summary: "Summary".to_string(),
            experience: "Experience".to_string(),
            education: "Education".to_string(),
            skills: "Skills".to_string(),
            achievements: "Achievements".to_string(),
            present: "Present".to_string(),
            about_me: "About Me".to_string(),
            research_profile: "Research Statement / Profile".to_string(),
            research_teaching: "Research & Teaching Experience".to_string(),
            publications: "Publications & Presentations".to_string(),
            grants_awards: "Grants, Awards & Fellowships".to_string(),
            other_experience: "Other Professional Experience".to_string(),
            other_achievements: "Other Achievements".to_string(),
            researcher: "Researcher".to_string(),
            email: "Email".to_string(),
            phone: "Phone".to_string(),
            location: "Location".to_string(),
            untitled: "CV".to_string(),
            generated_summary: "Highly skilled and motivated {job_title} with a proven ability \
                                to deliver results. Seeking a challenging role at a dynamic company."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_keep_defaults() {
        let labels: Labels = serde_json::from_str(r#"{"summary":"Profil"}"#).unwrap();
        assert_eq!(labels.summary, "Profil");
        assert_eq!(labels.present, "Present");
    }

    #[test]
    fn test_generated_summary_fills_job_title() {
        let labels = Labels {
            generated_summary: "Experienced {job_title}.".to_string(),
            ..Labels::default()
        };
        assert_eq!(labels.generated_summary("  Chemist "), "Experienced Chemist.");
    }
}
