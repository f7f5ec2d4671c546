//! Classic: single serif column, centered header, ruled uppercase headings,
//! skills as a bullet-separated line.

use crate::models::cv::{CvModel, TemplateId};
use crate::render::content::{
    description_bullets, education_dates, entry_meta, experience_dates, summary, visible_achievements,
    visible_education, visible_experience, visible_skills,
};
use crate::render::templates::write_contacts;
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const HEADING: &str = "font-size:11.5pt;font-weight:600;letter-spacing:0.05em;border-bottom:2px solid #4b5563;padding-bottom:2px;margin-bottom:6px;color:#374151;text-transform:uppercase";
const SKILL_SEPARATOR: &str = " • ";

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Classic);

    layout.open_root(
        "cv cv-classic",
        "padding:40px;background:#ffffff;color:#1f2937;font-family:Georgia,'Times New Roman',serif;font-size:11pt",
    );

    layout
        .html
        .open("header", "", "text-align:center;margin-bottom:24px")
        .element("h1", "", "font-size:22pt;font-weight:700;letter-spacing:0.1em;margin:0 0 4px;color:#111827", &info.full_name)
        .element("h2", "", "font-size:13pt;font-weight:500;color:#374151;margin:0 0 10px", &info.job_title);
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;justify-content:center;gap:12px;font-size:9pt;color:#4b5563",
        "",
    );
    layout
        .html
        .close("header")
        .open("hr", "", "margin:20px 0;border-color:#d1d5db");

    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.summary)
            .element("p", "", "font-size:10.5pt;color:#374151;line-height:1.6", text)
            .close("section");
    }

    let experience = visible_experience(cv);
    if !experience.is_empty() {
        let html = layout.open_section(SectionKind::Experience, "", "margin-bottom:20px");
        html.element("h3", "", HEADING, &labels.experience);
        for entry in experience {
            html.open("div", "cv-entry", "margin-bottom:10px")
                .element("h4", "", "font-size:10.5pt;font-weight:700;margin:0", &entry.position)
                .element(
                    "p",
                    "",
                    "font-size:9pt;font-weight:500;color:#4b5563;margin:0",
                    &entry_meta(&entry.company, &experience_dates(entry, &labels.present)),
                )
                .list(
                    "cv-bullets",
                    "list-style:disc inside;font-size:9pt;color:#4b5563;margin-top:2px",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "margin-bottom:20px");
        html.element("h3", "", HEADING, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", "margin-bottom:6px")
                .element("h4", "", "font-size:10.5pt;font-weight:700;margin:0", &entry.degree)
                .element(
                    "p",
                    "",
                    "font-size:9pt;font-weight:500;color:#4b5563;margin:0",
                    &entry_meta(&entry.institution, &education_dates(entry)),
                )
                .list(
                    "cv-bullets",
                    "list-style:none;font-size:10pt;font-style:italic;color:#6b7280;padding:0",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }

    let skills = visible_skills(cv);
    if !skills.is_empty() {
        layout
            .open_section(SectionKind::Skills, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.skills)
            .element(
                "p",
                "",
                "font-size:10.5pt;color:#374151;line-height:1.6",
                &skills.join(SKILL_SEPARATOR),
            )
            .close("section");
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        layout
            .open_section(SectionKind::Achievements, "", "")
            .element("h3", "", HEADING, &labels.achievements)
            .list(
                "cv-bullets",
                "list-style:disc inside;font-size:10.5pt;color:#374151",
                "",
                &achievements,
            )
            .close("section");
    }

    layout.html.close("div");
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_joins_skills_with_bullets() {
        let mut cv = CvModel::blank();
        cv.skills = vec!["Rust".into(), "".into(), "Go".into()];
        let doc = render(&cv, &Labels::default());
        assert!(doc.html.contains("Rust • Go"));
    }

    #[test]
    fn test_classic_section_order() {
        let mut cv = CvModel::blank();
        cv.personal_info.summary = "Summary text".into();
        cv.education[0].institution = "MIT".into();
        cv.achievements = vec!["Won".into()];
        let doc = render(&cv, &Labels::default());
        assert_eq!(
            doc.sections,
            vec![SectionKind::Summary, SectionKind::Education, SectionKind::Achievements]
        );
    }
}
