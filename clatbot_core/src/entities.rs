//! Entity extraction from query text.
//!
//! Three independent scans run on every query regardless of intent: a
//! year token, a college keyword, and a section keyword. Each scan
//! stops at its first hit; there is no multi-entity detection.

use regex::Regex;

use crate::error::Result;
use crate::knowledge::{CollegeId, SectionId};

// Four-digit years starting with "20"; the first match is taken verbatim.
const YEAR_PATTERN: &str = r"20\d{2}";

/// Keyword lists per college, scanned in `CollegeId::ALL` order.
const COLLEGE_KEYWORDS: [(CollegeId, &[&str]); 3] = [
    (CollegeId::Nls, &["nls", "nlsiu", "bangalore"]),
    (CollegeId::Nlud, &["nlud", "delhi"]),
    (CollegeId::Nlu, &["nlu", "jodhpur"]),
];

/// Keyword lists per section, scanned in `SectionId::ALL` order.
const SECTION_KEYWORDS: [(SectionId, &[&str]); 5] = [
    (SectionId::English, &["english", "language"]),
    (SectionId::Gk, &["gk", "general knowledge"]),
    (SectionId::LegalAptitude, &["legal", "aptitude"]),
    (SectionId::LogicalReasoning, &["logical", "reasoning"]),
    (SectionId::Mathematics, &["math", "mathematics"]),
];

/// Entities pulled out of a single query. Produced fresh per call and
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedEntities {
    pub year: Option<String>,
    pub college: Option<CollegeId>,
    pub section: Option<SectionId>,
}

/// Keyword- and regex-based entity extractor.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    year: Regex,
}

impl EntityExtractor {
    /// Compile the extractor's year pattern.
    ///
    /// # Errors
    /// Returns an error if the year pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            year: Regex::new(YEAR_PATTERN)?,
        })
    }

    /// Scan a query for year, college, and section entities.
    #[must_use]
    pub fn extract(&self, query: &str) -> ExtractedEntities {
        let lowered = query.to_lowercase();
        let mut entities = ExtractedEntities::default();

        if let Some(found) = self.year.find(query) {
            entities.year = Some(found.as_str().to_string());
        }

        for (college, keywords) in COLLEGE_KEYWORDS {
            if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                entities.college = Some(college);
                break;
            }
        }

        for (section, keywords) in SECTION_KEYWORDS {
            if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                entities.section = Some(section);
                break;
            }
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "test failure should panic with context")]
    fn extractor() -> EntityExtractor {
        EntityExtractor::new().expect("year pattern compiles")
    }

    #[test]
    fn extracts_first_year_token() {
        let entities = extractor().extract("cutoffs between 2021 and 2023");
        assert_eq!(entities.year.as_deref(), Some("2021"));
    }

    #[test]
    fn ignores_years_outside_the_2000s() {
        let entities = extractor().extract("cutoff trends since 1999");
        assert_eq!(entities.year, None);
    }

    #[test]
    fn extracts_college_by_any_keyword() {
        let extractor = extractor();
        assert_eq!(
            extractor.extract("cutoff for NLSIU Bangalore").college,
            Some(CollegeId::Nls)
        );
        assert_eq!(
            extractor.extract("what about delhi?").college,
            Some(CollegeId::Nlud)
        );
        assert_eq!(
            extractor.extract("NLU Jodhpur cutoff").college,
            Some(CollegeId::Nlu)
        );
    }

    #[test]
    fn first_college_in_scan_order_wins() {
        // "bangalore" (nls) and "jodhpur" (nlu) both hit; nls is
        // scanned first.
        let entities = extractor().extract("bangalore or jodhpur");
        assert_eq!(entities.college, Some(CollegeId::Nls));
    }

    #[test]
    fn extracts_each_section_keyword() {
        let extractor = extractor();
        let cases = [
            ("english", SectionId::English),
            ("gk", SectionId::Gk),
            ("legal", SectionId::LegalAptitude),
            ("logical", SectionId::LogicalReasoning),
            ("math", SectionId::Mathematics),
        ];
        for (keyword, expected) in cases {
            let query = format!("Tell me about the {keyword} part of the exam");
            assert_eq!(extractor.extract(&query).section, Some(expected), "{query}");
        }
    }

    #[test]
    fn scans_run_independently() {
        let entities = extractor().extract("NLU english cutoff 2022");
        assert_eq!(entities.year.as_deref(), Some("2022"));
        assert_eq!(entities.college, Some(CollegeId::Nlu));
        assert_eq!(entities.section, Some(SectionId::English));
    }

    #[test]
    fn empty_query_yields_no_entities() {
        assert_eq!(extractor().extract(""), ExtractedEntities::default());
    }
}
