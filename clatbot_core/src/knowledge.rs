//! Immutable knowledge base for the CLAT exam responder.
//!
//! All records are built once at construction and never mutated. Entries
//! are stored as ordered vectors rather than maps because the rendering
//! code depends on insertion order when it walks the full syllabus,
//! cutoff, and FAQ tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Exam subject sections, in the fixed order the extractor scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    English,
    Gk,
    LegalAptitude,
    LogicalReasoning,
    Mathematics,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::English,
        Self::Gk,
        Self::LegalAptitude,
        Self::LogicalReasoning,
        Self::Mathematics,
    ];

    /// Snake-case id used in queries, templates, and serialized data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Gk => "gk",
            Self::LegalAptitude => "legal_aptitude",
            Self::LogicalReasoning => "logical_reasoning",
            Self::Mathematics => "mathematics",
        }
    }

    /// Display label for the full-syllabus listing.
    ///
    /// Each alphabetic run is capitalized with underscores kept, so
    /// `legal_aptitude` renders as `Legal_Aptitude`. The reference
    /// output depends on this exact shape.
    #[must_use]
    pub const fn title_label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Gk => "Gk",
            Self::LegalAptitude => "Legal_Aptitude",
            Self::LogicalReasoning => "Logical_Reasoning",
            Self::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownSectionId(s.to_string()))
    }
}

/// National Law Universities tracked by the cutoff table, in the fixed
/// order the extractor scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollegeId {
    Nls,
    Nlud,
    Nlu,
}

impl CollegeId {
    pub const ALL: [Self; 3] = [Self::Nls, Self::Nlud, Self::Nlu];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nls => "nls",
            Self::Nlud => "nlud",
            Self::Nlu => "nlu",
        }
    }

    /// Upper-cased label used in cutoff responses.
    #[must_use]
    pub const fn upper_label(self) -> &'static str {
        match self {
            Self::Nls => "NLS",
            Self::Nlud => "NLUD",
            Self::Nlu => "NLU",
        }
    }
}

impl fmt::Display for CollegeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollegeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownCollegeId(s.to_string()))
    }
}

/// Topics taught under one syllabus section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllabusSection {
    pub section: SectionId,
    pub topics: Vec<String>,
}

/// Question count for one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCount {
    pub section: SectionId,
    pub count: u32,
}

/// Exam question pattern.
///
/// `total_questions` is taken from the source data as-is; it is NOT
/// validated against the sum of per-section counts (the reference data
/// itself disagrees: the sections sum to 150 only by coincidence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPattern {
    pub total_questions: u32,
    pub sections: Vec<SectionCount>,
}

/// Closing percentile for one admission year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearCutoff {
    pub year: String,
    pub percentile: f64,
}

/// Historical cutoffs for one college, ordered as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeCutoffs {
    pub college: CollegeId,
    pub by_year: Vec<YearCutoff>,
}

impl CollegeCutoffs {
    /// The entry whose year string is lexicographically greatest.
    ///
    /// String comparison coincides with numeric comparison only while
    /// every year key is exactly four digits, which holds for the
    /// current data. Kept as string comparison to match the reference
    /// output; do not switch to numeric ordering.
    #[must_use]
    pub fn latest(&self) -> Option<&YearCutoff> {
        self.by_year.iter().max_by(|a, b| a.year.cmp(&b.year))
    }
}

/// One frequently-asked question, keyed by a snake-case topic id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: String,
    pub answer: String,
}

/// The full read-only knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub syllabus: Vec<SyllabusSection>,
    pub pattern: QuestionPattern,
    pub cutoffs: Vec<CollegeCutoffs>,
    pub faqs: Vec<FaqEntry>,
}

impl KnowledgeBase {
    /// Load a knowledge base from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Topics for a section, or `MissingSectionData` if a
    /// caller-supplied knowledge base lacks the entry.
    pub fn syllabus_topics(&self, section: SectionId) -> Result<&[String]> {
        self.syllabus
            .iter()
            .find(|entry| entry.section == section)
            .map(|entry| entry.topics.as_slice())
            .ok_or(Error::MissingSectionData(section))
    }

    /// Question count for a section.
    pub fn question_count(&self, section: SectionId) -> Result<u32> {
        self.pattern
            .sections
            .iter()
            .find(|entry| entry.section == section)
            .map(|entry| entry.count)
            .ok_or(Error::MissingSectionData(section))
    }

    /// Cutoff percentile for a specific college and year.
    ///
    /// A missing (college, year) pair is a hard error; fabricating a
    /// percentile here would silently misinform the caller.
    pub fn cutoff(&self, college: CollegeId, year: &str) -> Result<f64> {
        let entry = self
            .cutoffs
            .iter()
            .find(|entry| entry.college == college)
            .ok_or(Error::MissingCollegeData(college))?;
        entry
            .by_year
            .iter()
            .find(|cutoff| cutoff.year == year)
            .map(|cutoff| cutoff.percentile)
            .ok_or_else(|| Error::MissingCutoffData {
                college,
                year: year.to_string(),
            })
    }
}

impl Default for KnowledgeBase {
    /// The reference CLAT data set.
    fn default() -> Self {
        Self {
            syllabus: vec![
                syllabus_entry(
                    SectionId::English,
                    &["Reading Comprehension", "Grammar", "Vocabulary"],
                ),
                syllabus_entry(SectionId::Gk, &["Current Affairs", "Static GK", "Legal GK"]),
                syllabus_entry(
                    SectionId::LegalAptitude,
                    &["Legal Principles", "Legal Maxims", "Case Laws"],
                ),
                syllabus_entry(
                    SectionId::LogicalReasoning,
                    &["Analytical Reasoning", "Logical Reasoning"],
                ),
                syllabus_entry(
                    SectionId::Mathematics,
                    &["Basic Mathematics", "Data Interpretation"],
                ),
            ],
            pattern: QuestionPattern {
                total_questions: 150,
                sections: vec![
                    SectionCount {
                        section: SectionId::English,
                        count: 28,
                    },
                    SectionCount {
                        section: SectionId::Gk,
                        count: 35,
                    },
                    SectionCount {
                        section: SectionId::LegalAptitude,
                        count: 35,
                    },
                    SectionCount {
                        section: SectionId::LogicalReasoning,
                        count: 28,
                    },
                    SectionCount {
                        section: SectionId::Mathematics,
                        count: 24,
                    },
                ],
            },
            cutoffs: vec![
                cutoff_entry(
                    CollegeId::Nls,
                    &[("2023", 98.5), ("2022", 98.2), ("2021", 97.8)],
                ),
                cutoff_entry(
                    CollegeId::Nlud,
                    &[("2023", 97.8), ("2022", 97.5), ("2021", 97.0)],
                ),
                cutoff_entry(
                    CollegeId::Nlu,
                    &[("2023", 96.5), ("2022", 96.2), ("2021", 95.8)],
                ),
            ],
            faqs: vec![
                faq_entry("exam_duration", "2 hours"),
                faq_entry("negative_marking", "0.25 marks for each wrong answer"),
                faq_entry("total_marks", "150"),
                faq_entry("mode", "Computer-based test (CBT)"),
            ],
        }
    }
}

fn syllabus_entry(section: SectionId, topics: &[&str]) -> SyllabusSection {
    SyllabusSection {
        section,
        topics: topics.iter().map(ToString::to_string).collect(),
    }
}

fn cutoff_entry(college: CollegeId, years: &[(&str, f64)]) -> CollegeCutoffs {
    CollegeCutoffs {
        college,
        by_year: years
            .iter()
            .map(|(year, percentile)| YearCutoff {
                year: (*year).to_string(),
                percentile: *percentile,
            })
            .collect(),
    }
}

fn faq_entry(topic: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        topic: topic.to_string(),
        answer: answer.to_string(),
    }
}
