//! Creative: dark gradient canvas, monogram avatar, card-style sections in two
//! columns with star-marked bullets.

use crate::models::cv::{CvModel, TemplateId};
use crate::render::content::{
    description_bullets, education_dates, experience_dates, monogram, summary,
    visible_achievements, visible_education, visible_experience, visible_skills,
};
use crate::render::templates::{write_chips, write_contacts};
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const HEADING: &str = "font-size:15pt;font-weight:700;color:#f472b6;margin-bottom:10px;text-transform:uppercase";
const CARD: &str = "margin-bottom:32px;padding:20px;background:rgba(255,255,255,0.1);border-radius:12px";
const STAR_LIST: &str = "list-style:'\u{2605}  ' inside;font-size:9pt;color:#e0e7ff";

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Creative);

    layout.open_root(
        "cv cv-creative",
        "padding:32px;background:linear-gradient(135deg,#1f2937,#312e81);color:#ffffff;font-family:Poppins,Helvetica,Arial,sans-serif;font-size:11pt",
    );

    layout
        .html
        .open("header", "", "text-align:center;margin-bottom:40px")
        .element(
            "div",
            "cv-monogram",
            "width:80px;height:80px;border-radius:50%;background:linear-gradient(90deg,#db2777,#4f46e5);margin:0 auto 12px;display:flex;align-items:center;justify-content:center;font-size:24pt;font-weight:700",
            &monogram(&info.full_name, 'N'),
        )
        .element("h1", "", "font-size:22pt;font-weight:800;margin:0 0 4px;color:#a5b4fc", &info.full_name)
        .element("h2", "", "font-size:13pt;font-weight:500;color:#a5b4fc;margin:0 0 12px", &info.job_title);
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;flex-wrap:wrap;justify-content:center;gap:6px 20px;font-size:9pt;color:#c7d2fe",
        "",
    );
    layout.html.close("header");

    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "cv-card", CARD)
            .element("h3", "", HEADING, &labels.about_me)
            .element("p", "", "font-size:10.5pt;color:#e0e7ff;line-height:1.6", text)
            .close("section");
    }

    layout.html.open(
        "div",
        "cv-columns",
        "display:grid;grid-template-columns:1fr 1fr;gap:32px",
    );

    layout.html.open("div", "", "");
    let experience = visible_experience(cv);
    if !experience.is_empty() {
        let html = layout.open_section(SectionKind::Experience, "", "margin-bottom:32px");
        html.element("h3", "", HEADING, &labels.experience);
        for entry in experience {
            html.open("div", "cv-entry", "margin-bottom:20px;padding:14px;background:rgba(255,255,255,0.05);border-radius:8px")
                .element("h4", "", "font-size:11.5pt;font-weight:600;color:#c7d2fe;margin:0", &entry.position)
                .element("p", "", "font-size:10pt;font-weight:500;color:#f9a8d4;margin:0", entry.company.trim())
                .element("p", "", "font-size:9pt;color:#818cf8;margin:0 0 6px", &experience_dates(entry, &labels.present))
                .list("cv-bullets", STAR_LIST, "", &description_bullets(&entry.description))
                .close("div");
        }
        html.close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "");
        html.element("h3", "", HEADING, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", "margin-bottom:12px;padding:14px;background:rgba(255,255,255,0.05);border-radius:8px")
                .element("h4", "", "font-size:11.5pt;font-weight:600;color:#c7d2fe;margin:0", &entry.degree)
                .element("p", "", "font-size:10pt;font-weight:500;color:#f9a8d4;margin:0", entry.institution.trim())
                .element("p", "", "font-size:9pt;color:#818cf8;margin:0 0 4px", &education_dates(entry))
                .list(
                    "cv-bullets",
                    "list-style:none;font-size:9pt;font-style:italic;color:#e0e7ff;padding:0",
                    "",
                    &description_bullets(&entry.description),
                )
                .close("div");
        }
        html.close("section");
    }
    layout.html.close("div");

    layout.html.open("div", "", "");
    let skills = visible_skills(cv);
    if !skills.is_empty() {
        let html = layout.open_section(SectionKind::Skills, "cv-card", CARD);
        html.element("h3", "", HEADING, &labels.skills);
        write_chips(
            html,
            &skills,
            "display:flex;flex-wrap:wrap;gap:8px;list-style:none;padding:0",
            "background:linear-gradient(90deg,#db2777,#4338ca);color:#ffffff;font-size:10pt;font-weight:600;padding:4px 12px;border-radius:9999px",
        );
        html.close("section");
    }

    let achievements = visible_achievements(cv);
    if !achievements.is_empty() {
        layout
            .open_section(SectionKind::Achievements, "cv-card", CARD)
            .element("h3", "", HEADING, &labels.achievements)
            .list("cv-bullets", STAR_LIST, "", &achievements)
            .close("section");
    }
    layout.html.close("div");

    layout.html.close("div").close("div");
    layout.finish()
}
