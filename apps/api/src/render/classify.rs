//! Keyword routing for the academic template.
//!
//! Plain case-insensitive substring matching. Each entry lands in exactly one
//! bucket: the first category whose keywords match wins, in declaration order.

use crate::models::cv::ExperienceEntry;

const RESEARCH_KEYWORDS: &[&str] = &["research", "teaching"];
const PUBLICATION_KEYWORDS: &[&str] = &["publication", "paper", "conference"];
const GRANT_KEYWORDS: &[&str] = &["grant", "award", "scholarship", "fellowship"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceCategory {
    ResearchTeaching,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Publication,
    GrantOrAward,
    Other,
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

pub fn classify_experience(entry: &ExperienceEntry) -> ExperienceCategory {
    if contains_any(&entry.position, RESEARCH_KEYWORDS)
        || contains_any(&entry.description, RESEARCH_KEYWORDS)
    {
        ExperienceCategory::ResearchTeaching
    } else {
        ExperienceCategory::Other
    }
}

pub fn classify_achievement(text: &str) -> AchievementCategory {
    if contains_any(text, PUBLICATION_KEYWORDS) {
        AchievementCategory::Publication
    } else if contains_any(text, GRANT_KEYWORDS) {
        AchievementCategory::GrantOrAward
    } else {
        AchievementCategory::Other
    }
}

/// Achievements split into the academic buckets, order preserved within each.
#[derive(Debug, Default)]
pub struct AchievementBuckets<'a> {
    pub publications: Vec<&'a str>,
    pub grants_awards: Vec<&'a str>,
    pub other: Vec<&'a str>,
}

pub fn partition_achievements<'a>(achievements: &[&'a str]) -> AchievementBuckets<'a> {
    let mut buckets = AchievementBuckets::default();
    for &text in achievements {
        match classify_achievement(text) {
            AchievementCategory::Publication => buckets.publications.push(text),
            AchievementCategory::GrantOrAward => buckets.grants_awards.push(text),
            AchievementCategory::Other => buckets.other.push(text),
        }
    }
    buckets
}

/// Experience split into research/teaching and everything else.
pub fn partition_experience<'a>(
    entries: &[&'a ExperienceEntry],
) -> (Vec<&'a ExperienceEntry>, Vec<&'a ExperienceEntry>) {
    entries
        .iter()
        .copied()
        .partition(|e| classify_experience(e) == ExperienceCategory::ResearchTeaching)
}
