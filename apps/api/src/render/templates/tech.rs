//! Tech: dark monospace theme. A 4/8 grid with a sidebar holding the
//! monogram, contact details and skills; the main column holds summary,
//! experience, education and achievements.

use crate::models::cv::{CvModel, TemplateId};
use crate::render::content::{
    description_bullets, education_dates, entry_meta, experience_dates, monogram, summary,
    visible_achievements, visible_education, visible_experience, visible_skills,
};
use crate::render::templates::{write_chips, write_contacts};
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const HEADING: &str = "font-size:13pt;font-weight:600;color:#38bdf8;margin-bottom:8px;text-transform:uppercase";
const ENTRY: &str = "margin-bottom:14px;padding:12px;background:rgba(31,41,55,0.5);border-radius:4px";
const BULLETS: &str = "list-style:disc inside;font-size:9pt;color:#9ca3af;padding-left:8px;margin-top:4px";

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Tech);

    layout.open_root(
        "cv cv-tech",
        "padding:32px;background:#111827;color:#e5e7eb;font-family:'JetBrains Mono',Menlo,Consolas,monospace;font-size:10.5pt;line-height:1.6",
    );
    layout.html.open(
        "div",
        "cv-columns",
        "display:grid;grid-template-columns:4fr 8fr;gap:24px",
    );

    layout
        .html
        .open("aside", "", "background:#1f2937;padding:24px;border-radius:8px")
        .open("div", "", "text-align:center;margin-bottom:24px")
        .element(
            "div",
            "cv-monogram",
            "width:96px;height:96px;border-radius:50%;background:linear-gradient(135deg,#0ea5e9,#06b6d4);margin:0 auto 12px;display:flex;align-items:center;justify-content:center;font-size:30pt;font-weight:700;color:#111827",
            &monogram(&info.full_name, 'T'),
        )
        .element("h1", "", "font-size:18pt;font-weight:700;color:#7dd3fc;margin:0", &info.full_name)
        .element("h2", "", "font-size:11pt;color:#22d3ee;margin:0", &info.job_title)
        .close("div");
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;flex-direction:column;gap:12px;font-size:9pt;margin-bottom:24px",
        "",
    );

    let skills = visible_skills(cv);
    if !skills.is_empty() {
        let html = layout.open_section(SectionKind::Skills, "", "");
        html.element("h3", "", HEADING, &labels.skills);
        write_chips(
            html,
            &skills,
            "display:flex;flex-wrap:wrap;gap:6px;list-style:none;padding:0",
            "background:#374151;color:#7dd3fc;font-size:9pt;padding:2px 8px;border-radius:4px",
        );
        html.close("section");
    }
    layout.html.close("aside");

    layout.html.open("main", "", "");
    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "", "margin-bottom:24px")
            .element("h3", "", HEADING, &labels.summary)
            .element("p", "", "font-size:10pt;color:#d1d5db", text)
            .close("section");
    }

    let experience = visible_experience(cv);
    if !experience.is_empty() {
        let html = layout.open_section(SectionKind::Experience, "", "margin-bottom:24px");
        html.element("h3", "", HEADING, &labels.experience);
        for entry in experience {
            html.open("div", "cv-entry", ENTRY)
                .element("h4", "", "font-size:11pt;font-weight:600;color:#7dd3fc;margin:0", &entry.position)
                .element(
                    "p",
                    "",
                    "font-size:10pt;color:#22d3ee;margin:0",
                    &entry_meta(&entry.company, &experience_dates(entry, &labels.present)),
                )
                .list("cv-bullets", BULLETS, "", &description_bullets(&entry.description))
                .close("div");
        }
        html.close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "margin-bottom:24px");
        html.element("h3", "", HEADING, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", ENTRY)
                .element("h4", "", "font-size:11pt;font-weight:600;color:#7dd3fc;margin:0", &entry.degree)
                .element(
                    "p",
                    "",
                    "font-size:10pt;color:#22d3ee;margin:0",
                    &entry_meta(&entry.institution, &education_dates(entry)),
                )
                .list(
                    "cv-bullets",
                    "list-style:none;font-size:9pt;color:#9ca3af;padding:0;margin-top:2px",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        layout
            .open_section(SectionKind::Achievements, "", "")
            .element("h3", "", HEADING, &labels.achievements)
            .list("cv-bullets", BULLETS, "", &achievements)
            .close("section");
    }
    layout.html.close("main");

    layout.html.close("div").close("div");
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_skills_come_first_from_sidebar() {
        let mut cv = CvModel::blank();
        cv.personal_info.summary = "Hacker".into();
        cv.skills = vec!["Rust".into()];
        cv.experience[0].company = "Acme".into();
        let doc = render(&cv, &Labels::default());
        assert_eq!(
            doc.sections,
            vec![SectionKind::Skills, SectionKind::Summary, SectionKind::Experience]
        );
    }

    #[test]
    fn test_tech_monogram_fallback_is_t() {
        let doc = render(&CvModel::blank(), &Labels::default());
        assert!(doc.html.contains(">T</div>"));
    }
}
