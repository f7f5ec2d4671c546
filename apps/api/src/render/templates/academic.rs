//! Academic: serif CV that re-partitions experience and achievements by
//! keyword (see `render::classify`) into research, publication and grant
//! sections.

use crate::models::cv::{CvModel, ExperienceEntry, TemplateId};
use crate::render::classify::{partition_achievements, partition_experience};
use crate::render::content::{
    description_bullets, education_dates, experience_dates, is_filled, summary,
    visible_achievements, visible_education, visible_experience, visible_skills,
};
use crate::render::html::Html;
use crate::render::templates::write_contacts;
use crate::render::{Labels, Layout, RenderedDocument, SectionKind};

const HEADING: &str = "font-size:10.5pt;font-weight:700;color:#374151;text-transform:uppercase;letter-spacing:0.05em;border-bottom:2px solid #d1d5db;padding-bottom:2px;margin-bottom:8px";
const SUB_HEAD: &str = "display:flex;justify-content:space-between;align-items:baseline";
const ENTRY_LIST: &str = "list-style:none;padding:0";
const ENTRY_ITEM: &str = "font-size:10.5pt;color:#374151;margin-bottom:6px";

/// `title` on the left, `date` right-aligned, children below.
fn sub_section(html: &mut Html, title: &str, date: &str) {
    html.open("div", "", SUB_HEAD)
        .element("h4", "", "font-size:11pt;font-weight:600;color:#1f2937;margin:0", title);
    if !date.is_empty() {
        html.element("p", "", "font-size:9pt;color:#6b7280;margin:0", date);
    }
    html.close("div");
}

fn joined_title(first: &str, second: &str) -> String {
    match (is_filled(first), is_filled(second)) {
        (true, true) => format!("{}, {}", first.trim(), second.trim()),
        (true, false) => first.trim().to_string(),
        _ => second.trim().to_string(),
    }
}

fn write_positions(html: &mut Html, entries: &[&ExperienceEntry], present: &str) {
    for entry in entries {
        html.open("div", "cv-entry", "margin-bottom:12px");
        sub_section(
            html,
            &joined_title(&entry.position, &entry.company),
            &experience_dates(entry, present),
        );
        html.list(
            "cv-bullets",
            "list-style:disc inside;font-size:9pt;color:#4b5563;margin-top:4px",
            "",
            &description_bullets(&entry.description),
        )
        .close("div");
    }
}

pub fn render(cv: &CvModel, labels: &Labels) -> RenderedDocument {
    let info = &cv.personal_info;
    let mut layout = Layout::new(TemplateId::Academic);

    layout.open_root(
        "cv cv-academic",
        "padding:40px;background:#ffffff;color:#1f2937;font-family:'Times New Roman',Georgia,serif;font-size:11pt;line-height:1.6",
    );

    let job_title = if is_filled(&info.job_title) {
        info.job_title.as_str()
    } else {
        labels.researcher.as_str()
    };
    layout
        .html
        .open("header", "", "text-align:center;margin-bottom:24px;padding-bottom:16px;border-bottom:1px solid #d1d5db")
        .element("h1", "", "font-size:22pt;font-weight:700;color:#111827;margin:0 0 4px", &info.full_name)
        .element("h2", "", "font-size:13pt;color:#374151;margin:0 0 8px", job_title);
    write_contacts(
        &mut layout.html,
        info,
        "display:flex;justify-content:center;gap:16px;font-size:9pt;color:#4b5563",
        "",
    );
    layout.html.close("header");

    if let Some(text) = summary(cv) {
        layout
            .open_section(SectionKind::Summary, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.research_profile)
            .element("p", "", "font-size:10.5pt;color:#374151", text)
            .close("section");
    }

    let education = visible_education(cv);
    if !education.is_empty() {
        let html = layout.open_section(SectionKind::Education, "", "margin-bottom:20px");
        html.element("h3", "", HEADING, &labels.education);
        for entry in education {
            html.open("div", "cv-entry", "margin-bottom:12px");
            sub_section(
                html,
                &joined_title(&entry.degree, &entry.institution),
                &education_dates(entry),
            );
            html.list(
                "cv-bullets",
                "list-style:none;padding:0;font-size:9pt;font-style:italic;color:#4b5563",
                "",
                &description_bullets(&entry.description),
            )
            .close("div");
        }
        html.close("section");
    }

    let experience = visible_experience(cv);
    let (research, other_experience) = partition_experience(&experience);
    if !research.is_empty() {
        let html = layout.open_section(SectionKind::ResearchTeaching, "", "margin-bottom:20px");
        html.element("h3", "", HEADING, &labels.research_teaching);
        write_positions(html, &research, &labels.present);
        html.close("section");
    }

    let achievements = visible_achievements(cv);
    let buckets = partition_achievements(&achievements);
    if !buckets.publications.is_empty() {
        layout
            .open_section(SectionKind::Publications, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.publications)
            .list("cv-publications", ENTRY_LIST, ENTRY_ITEM, &buckets.publications)
            .close("section");
    }
    if !buckets.grants_awards.is_empty() {
        layout
            .open_section(SectionKind::GrantsAwards, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.grants_awards)
            .list("cv-awards", ENTRY_LIST, ENTRY_ITEM, &buckets.grants_awards)
            .close("section");
    }

    let skills = visible_skills(cv);
    if !skills.is_empty() {
        layout
            .open_section(SectionKind::Skills, "", "margin-bottom:20px")
            .element("h3", "", HEADING, &labels.skills)
            .element("p", "", "font-size:10.5pt;color:#374151", &skills.join("; "))
            .close("section");
    }

    if !other_experience.is_empty() {
        let html = layout.open_section(SectionKind::OtherExperience, "", "margin-bottom:20px");
        html.element("h3", "", HEADING, &labels.other_experience);
        write_positions(html, &other_experience, &labels.present);
        html.close("section");
    }

    if !buckets.other.is_empty() {
        layout
            .open_section(SectionKind::OtherAchievements, "", "")
            .element("h3", "", HEADING, &labels.other_achievements)
            .list("cv-bullets", "list-style:disc inside;padding:0", ENTRY_ITEM, &buckets.other)
            .close("section");
    }

    layout.html.close("div");
    layout.finish()
}
