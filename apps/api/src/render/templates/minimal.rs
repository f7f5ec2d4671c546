//! Minimal: left-aligned header, untitled summary paragraph, small grey
//! section titles.

use crate::models::cv::{CvModel, TemplateId};
use crate::render::content::{
    description_bullets, education_dates, entry_meta, experience_dates, summary, visible_achievements,
    visible_education, visible_experience, visible_skills,
};
use crate::render::templates::write_contacts;
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const TITLE: &str = "font-size:9pt;font-weight:600;color:#6b7280;text-transform:uppercase;letter-spacing:0.05em;margin:20px 0 6px;padding-bottom:2px;border-bottom:1px solid #d1d5db";
const LIST: &str = "list-style:disc inside;margin-left:14px";
const ITEM: &str = "font-size:9pt;color:#4b5563;line-height:1.4";

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Minimal);

    layout.open_root(
        "cv cv-minimal",
        "padding:32px;background:#f9fafb;color:#1f2937;font-family:'Helvetica Neue',Helvetica,Arial,sans-serif;font-weight:300;font-size:10pt",
    );

    layout
        .html
        .open("header", "", "margin-bottom:20px")
        .element("h1", "", "font-size:18pt;font-weight:500;color:#111827;margin:0", &info.full_name)
        .element("h2", "", "font-size:11pt;color:#374151;margin:0", &info.job_title);
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;gap:12px;margin-top:6px;font-size:9pt;color:#6b7280",
        "",
    );
    layout.html.close("header");

    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "", "")
            .element("p", "", "font-size:9pt;color:#374151;line-height:1.6", text)
            .close("section");
    }

    let experience = visible_experience(cv);
    if !experience.is_empty() {
        let html = layout.open_section(SectionKind::Experience, "", "");
        html.element("h3", "", TITLE, &labels.experience);
        for entry in experience {
            html.open("div", "cv-entry", "margin-bottom:10px")
                .element("h4", "", "font-size:10.5pt;font-weight:500;margin:0", &entry.position)
                .element(
                    "p",
                    "",
                    "font-size:9pt;color:#4b5563;margin:0",
                    &entry_meta(&entry.company, &experience_dates(entry, &labels.present)),
                )
                .list("cv-bullets", LIST, ITEM, &description_bullets(&entry.description))
                .close("div");
        }
        html.close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "");
        html.element("h3", "", TITLE, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", "margin-bottom:6px")
                .element("h4", "", "font-size:10.5pt;font-weight:500;margin:0", &entry.degree)
                .element(
                    "p",
                    "",
                    "font-size:9pt;color:#4b5563;margin:0",
                    &entry_meta(&entry.institution, &education_dates(entry)),
                )
                .list(
                    "cv-bullets",
                    "list-style:none;padding:0",
                    "font-size:9pt;font-style:italic;color:#6b7280",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }

    let skills = visible_skills(cv);
    if !skills.is_empty() {
        layout
            .open_section(SectionKind::Skills, "", "")
            .element("h3", "", TITLE, &labels.skills)
            .element("p", "", "font-size:9pt;color:#374151", &skills.join(", "))
            .close("section");
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        layout
            .open_section(SectionKind::Achievements, "", "")
            .element("h3", "", TITLE, &labels.achievements)
            .list("cv-bullets", LIST, ITEM, &achievements)
            .close("section");
    }

    layout.html.close("div");
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_summary_has_no_heading() {
        let mut cv = CvModel::blank();
        cv.personal_info.summary = "Quiet achiever".into();
        let doc = render(&cv, &Labels::default());
        assert!(doc.has_section(SectionKind::Summary));
        assert!(!doc.html.contains(">Summary</h3>"));
    }

    #[test]
    fn test_minimal_skills_comma_joined() {
        let mut cv = CvModel::blank();
        cv.skills = vec!["A".into(), "B".into()];
        let doc = render(&cv, &Labels::default());
        assert!(doc.html.contains(">A, B</p>"));
    }
}
