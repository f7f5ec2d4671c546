//! Section-visibility and text-normalization rules shared by every renderer
//! and by the DOCX exporter, so both paths agree on what "empty" means.

use crate::models::cv::{CvModel, EducationEntry, ExperienceEntry, PersonalInfo};

pub fn is_filled(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Splits free text into bullet lines: one per non-blank line, trimmed, in
/// original order. CRLF input is handled like LF.
pub fn description_bullets(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Experience entries that render, keyed on a non-empty company.
pub fn visible_experience(cv: &CvModel) -> Vec<&ExperienceEntry> {
    cv.experience.iter().filter(|e| is_filled(&e.company)).collect()
}

/// Education entries that render, keyed on a non-empty institution.
pub fn visible_education(cv: &CvModel) -> Vec<&EducationEntry> {
    cv.education
        .iter()
        .filter(|e| is_filled(&e.institution))
        .collect()
}

pub fn visible_skills(cv: &CvModel) -> Vec<&str> {
    non_blank(&cv.skills)
}

pub fn visible_achievements(cv: &CvModel) -> Vec<&str> {
    non_blank(&cv.achievements)
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn summary(cv: &CvModel) -> Option<&str> {
    let s = cv.personal_info.summary.trim();
    (!s.is_empty()).then_some(s)
}

/// `"{start} – {end}"`, dropping whichever side is blank. `open_end` stands in
/// for a blank end date (e.g. "Present" for a current job).
pub fn date_range(start: &str, end: &str, open_end: Option<&str>) -> String {
    let end = if is_filled(end) {
        Some(end.trim())
    } else {
        open_end
    };
    [Some(start.trim()).filter(|s| !s.is_empty()), end]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" – ")
}

pub fn experience_dates(entry: &ExperienceEntry, present: &str) -> String {
    date_range(&entry.start_date, &entry.end_date, Some(present))
}

pub fn education_dates(entry: &EducationEntry) -> String {
    date_range(&entry.start_date, &entry.end_date, None)
}

/// Organisation line under an entry title: `"{org} | {dates}"`, or just the
/// organisation when there are no dates.
pub fn entry_meta(org: &str, dates: &str) -> String {
    if dates.is_empty() {
        org.trim().to_string()
    } else {
        format!("{} | {}", org.trim(), dates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

/// Contact details in display order, blanks removed.
pub fn contact_items(info: &PersonalInfo) -> Vec<(ContactKind, &str)> {
    [
        (ContactKind::Email, info.email.trim()),
        (ContactKind::Phone, info.phone.trim()),
        (ContactKind::Location, info.location.trim()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

/// First letter of the name for monogram avatars.
pub fn monogram(name: &str, fallback: char) -> String {
    name.trim()
        .chars()
        .next()
        .unwrap_or(fallback)
        .to_uppercase()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_equal_non_blank_lines_in_order() {
        let text = "Led a team of 5\n\n   \nShipped v2\r\nCut costs 20%\n";
        assert_eq!(
            description_bullets(text),
            vec!["Led a team of 5", "Shipped v2", "Cut costs 20%"]
        );
    }

    #[test]
    fn test_bullets_of_blank_text_is_empty() {
        assert!(description_bullets("").is_empty());
        assert!(description_bullets("\n \n\t").is_empty());
    }

    #[test]
    fn test_visible_experience_filters_on_company() {
        let mut cv = CvModel::blank();
        cv.experience[0].position = "Engineer".to_string();
        assert!(visible_experience(&cv).is_empty(), "position alone is not enough");

        cv.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        });
        let visible = visible_experience(&cv);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].company, "Acme");
    }

    #[test]
    fn test_whitespace_only_company_counts_as_empty() {
        let mut cv = CvModel::blank();
        cv.experience[0].company = "   ".to_string();
        assert!(visible_experience(&cv).is_empty());
    }

    #[test]
    fn test_visible_skills_drop_blanks_keep_order() {
        let mut cv = CvModel::blank();
        cv.skills = vec!["Rust".into(), " ".into(), "Go".into(), "".into()];
        assert_eq!(visible_skills(&cv), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range("2020-01", "2021-02", None), "2020-01 – 2021-02");
        assert_eq!(date_range("2020-01", "", Some("Present")), "2020-01 – Present");
        assert_eq!(date_range("2020-01", "", None), "2020-01");
        assert_eq!(date_range("", "", None), "");
    }

    #[test]
    fn test_entry_meta_drops_separator_without_dates() {
        assert_eq!(entry_meta(" Uni ", ""), "Uni");
        assert_eq!(entry_meta("Uni", "2014 – 2018"), "Uni | 2014 – 2018");
    }

    #[test]
    fn test_contact_items_skip_blanks() {
        let info = PersonalInfo {
            email: "a@b.c".to_string(),
            location: "Oslo".to_string(),
            ..Default::default()
        };
        assert_eq!(
            contact_items(&info),
            vec![(ContactKind::Email, "a@b.c"), (ContactKind::Location, "Oslo")]
        );
    }

    #[test]
    fn test_monogram_uses_fallback_for_blank_name() {
        assert_eq!(monogram("ada", 'N'), "A");
        assert_eq!(monogram("  ", 'T'), "T");
    }

    #[test]
    fn test_summary_none_when_blank() {
        let cv = CvModel::blank();
        assert!(summary(&cv).is_none());
    }
}
