//! Modern: centered header with a blue rule, summary across the page, then a
//! 8/4 column split with experience and education on the left and skill chips
//! plus achievements on the right.

use crate::models::cv::{CvModel, TemplateId};
use crate::render::content::{
    description_bullets, education_dates, entry_meta, experience_dates, summary, visible_achievements,
    visible_education, visible_experience, visible_skills,
};
use crate::render::templates::{write_chips, write_contacts};
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const ACCENT: &str = "#1d4ed8";
const HEADING: &str = "font-size:13pt;font-weight:600;color:#1d4ed8;border-bottom:1px solid #93c5fd;padding-bottom:4px;margin-bottom:8px;text-transform:uppercase";

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Modern);

    layout.open_root(
        "cv cv-modern",
        "padding:32px;background:#ffffff;color:#1f2937;font-family:Inter,Helvetica,Arial,sans-serif;font-size:11pt;line-height:1.6",
    );

    layout
        .html
        .open("header", "", "text-align:center;margin-bottom:32px;border-bottom:2px solid #2563eb;padding-bottom:20px")
        .element("h1", "", &format!("font-size:28pt;font-weight:700;color:{ACCENT};margin:0 0 6px"), &info.full_name)
        .element("h2", "", "font-size:15pt;font-weight:300;color:#4b5563;margin:0 0 12px", &info.job_title);
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;justify-content:center;gap:20px;font-size:9pt;color:#6b7280",
        "",
    );
    layout.html.close("header");

    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "", "margin-bottom:24px")
            .element("h3", "", HEADING, &labels.summary)
            .element("p", "", "font-size:10.5pt;color:#374151", text)
            .close("section");
    }

    layout.html.open(
        "div",
        "cv-columns",
        "display:grid;grid-template-columns:8fr 4fr;column-gap:24px",
    );

    layout.html.open("div", "cv-main", "");
    let experience = visible_experience(cv);
    if !experience.is_empty() {
        let html = layout.open_section(SectionKind::Experience, "", "margin-bottom:24px");
        html.element("h3", "", HEADING, &labels.experience);
        for entry in experience {
            html.open("div", "cv-entry", "margin-bottom:12px")
                .element("h4", "", "font-size:11.5pt;font-weight:500;margin:0", &entry.position)
                .element(
                    "p",
                    "",
                    &format!("font-size:10pt;color:{ACCENT};margin:0"),
                    &entry_meta(&entry.company, &experience_dates(entry, &labels.present)),
                )
                .list(
                    "cv-bullets",
                    "list-style:disc inside;font-size:9pt;color:#4b5563;margin-top:4px",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "margin-bottom:24px");
        html.element("h3", "", HEADING, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", "margin-bottom:10px")
                .element("h4", "", "font-size:11.5pt;font-weight:500;margin:0", &entry.degree)
                .element(
                    "p",
                    "",
                    &format!("font-size:10pt;color:{ACCENT};margin:0"),
                    &entry_meta(&entry.institution, &education_dates(entry)),
                )
                .list(
                    "cv-bullets",
                    "list-style:none;font-size:9pt;color:#4b5563;margin-top:2px",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }
    layout.html.close("div");

    layout.html.open("div", "cv-side", "");
    let skills = visible_skills(cv);
    if !skills.is_empty() {
        let html = layout.open_section(SectionKind::Skills, "", "margin-bottom:24px");
        html.element("h3", "", HEADING, &labels.skills);
        write_chips(
            html,
            &skills,
            "display:flex;flex-wrap:wrap;gap:6px;list-style:none;padding:0",
            "background:#dbeafe;color:#1d4ed8;font-size:10pt;font-weight:500;padding:2px 10px;border-radius:9999px",
        );
        html.close("section");
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        layout
            .open_section(SectionKind::Achievements, "", "")
            .element("h3", "", HEADING, &labels.achievements)
            .list(
                "cv-bullets",
                "list-style:disc inside;font-size:9pt;color:#4b5563",
                "",
                &achievements,
            )
            .close("section");
    }
    layout.html.close("div");

    layout.html.close("div").close("div");
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::ExperienceEntry;

    #[test]
    fn test_modern_puts_skills_after_main_column_sections() {
        let mut cv = CvModel::blank();
        cv.personal_info.summary = "Hi".to_string();
        cv.experience[0] = ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        };
        cv.skills = vec!["Rust".to_string()];
        let doc = render(&cv, &Labels::default());
        assert_eq!(
            doc.sections,
            vec![SectionKind::Summary, SectionKind::Experience, SectionKind::Skills]
        );
    }

    #[test]
    fn test_modern_open_ended_job_shows_present() {
        let mut cv = CvModel::blank();
        cv.experience[0] = ExperienceEntry {
            company: "Acme".to_string(),
            start_date: "2021-03".to_string(),
            ..Default::default()
        };
        let doc = render(&cv, &Labels::default());
        assert!(doc.html.contains("Acme | 2021-03 – Present"));
    }
}
