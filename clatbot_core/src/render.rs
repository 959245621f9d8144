//! Response rendering: intent dispatch plus knowledge-base lookups.

use tracing::debug;

use crate::entities::ExtractedEntities;
use crate::error::{Error, Result};
use crate::intent::Intent;
use crate::knowledge::KnowledgeBase;
use crate::templates;

/// Render a response for a classified query.
///
/// Every branch returns a string; the only fallible paths are the
/// knowledge-base lookups, which refuse to fabricate missing data.
pub fn render(
    intent: Intent,
    entities: &ExtractedEntities,
    query: &str,
    kb: &KnowledgeBase,
) -> Result<String> {
    match intent {
        Intent::Unknown => Ok(templates::APOLOGY.to_string()),
        Intent::Syllabus => render_syllabus(entities, kb),
        Intent::Pattern => render_pattern(entities, kb),
        Intent::Cutoff => render_cutoff(entities, kb),
        Intent::Faq => Ok(render_faq(query, kb)),
    }
}

fn render_syllabus(entities: &ExtractedEntities, kb: &KnowledgeBase) -> Result<String> {
    if let Some(section) = entities.section {
        let topics = kb.syllabus_topics(section)?;
        return Ok(templates::syllabus_section(section, topics));
    }
    let lines: Vec<String> = kb
        .syllabus
        .iter()
        .map(|entry| templates::syllabus_overview_line(entry.section, &entry.topics))
        .collect();
    Ok(templates::syllabus_overview(&lines))
}

fn render_pattern(entities: &ExtractedEntities, kb: &KnowledgeBase) -> Result<String> {
    if let Some(section) = entities.section {
        let count = kb.question_count(section)?;
        return Ok(templates::pattern_section(section, count));
    }
    Ok(templates::pattern_total(kb.pattern.total_questions))
}

fn render_cutoff(entities: &ExtractedEntities, kb: &KnowledgeBase) -> Result<String> {
    // The specific branch needs BOTH entities; a named college without
    // a year still gets the all-colleges summary.
    if let (Some(college), Some(year)) = (entities.college, entities.year.as_deref()) {
        let percentile = kb.cutoff(college, year)?;
        return Ok(templates::cutoff_college(college, year, percentile));
    }
    let lines = kb
        .cutoffs
        .iter()
        .map(|entry| -> Result<String> {
            let latest = entry
                .latest()
                .ok_or(Error::MissingCollegeData(entry.college))?;
            Ok(templates::cutoff_overview_line(
                entry.college,
                latest.percentile,
            ))
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(templates::cutoff_overview(&lines))
}

fn render_faq(query: &str, kb: &KnowledgeBase) -> String {
    let lowered = query.to_lowercase();
    for entry in &kb.faqs {
        let spaced = entry.topic.replace('_', " ");
        if lowered.contains(&spaced) {
            return templates::faq_general(&spaced, &entry.answer);
        }
    }
    debug!(query = %query, "no FAQ topic matched");
    templates::FAQ_FALLBACK.to_string()
}
