//! Intent classification over an ordered regex pattern table.
//!
//! Classification is first-match-wins in a fixed intent order, so the
//! table is an ordered vector, not a map. A query matching both
//! syllabus and pattern vocabulary resolves to syllabus because
//! syllabus is checked first; that tie-break is part of the contract.

use regex::Regex;

use crate::error::Result;

/// The closed set of intents the responder can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Syllabus,
    Pattern,
    Cutoff,
    Faq,
    Unknown,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syllabus => "syllabus",
            Self::Pattern => "pattern",
            Self::Cutoff => "cutoff",
            Self::Faq => "faq",
            Self::Unknown => "unknown",
        }
    }
}

/// Default pattern table for the reference CLAT vocabulary.
///
/// Order matters twice: intents are tried top to bottom, and the first
/// intent with any matching pattern wins.
#[must_use]
pub fn default_intent_patterns() -> Vec<(Intent, Vec<String>)> {
    let rules = |patterns: &[&str]| patterns.iter().map(ToString::to_string).collect();
    vec![
        (
            Intent::Syllabus,
            rules(&[
                r"syllabus",
                r"what.*syllabus",
                r"topics",
                r"subjects",
                r"what.*study",
            ]),
        ),
        (
            Intent::Pattern,
            rules(&[
                r"pattern",
                r"questions",
                r"marks",
                r"how many.*questions",
                r"total.*questions",
            ]),
        ),
        (
            Intent::Cutoff,
            rules(&[
                r"cutoff",
                r"cut-off",
                r"cut off",
                r"last year.*cutoff",
                r"previous.*cutoff",
            ]),
        ),
        (
            Intent::Faq,
            rules(&[
                r"duration",
                r"time",
                r"negative marking",
                r"total marks",
                r"mode",
                r"how.*conducted",
            ]),
        ),
    ]
}

/// Classifies queries by unanchored regex search against a fixed table.
pub struct IntentClassifier {
    rules: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    /// Compile a pattern table into a classifier.
    ///
    /// # Errors
    /// Returns an error if any pattern fails to compile.
    pub fn new(table: Vec<(Intent, Vec<String>)>) -> Result<Self> {
        let rules = table
            .into_iter()
            .map(|(intent, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|pattern| Regex::new(pattern))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok((intent, compiled))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Build a classifier over the reference pattern table.
    pub fn with_defaults() -> Result<Self> {
        Self::new(default_intent_patterns())
    }

    /// Classify a query, returning `Intent::Unknown` when nothing matches.
    #[must_use]
    pub fn classify(&self, query: &str) -> Intent {
        let query = query.to_lowercase();
        for (intent, patterns) in &self.rules {
            if patterns.iter().any(|pattern| pattern.is_match(&query)) {
                return *intent;
            }
        }
        Intent::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "test failure should panic with context")]
    fn classifier() -> IntentClassifier {
        IntentClassifier::with_defaults().expect("default patterns compile")
    }

    #[test]
    fn classifies_each_intent() {
        let c = classifier();
        assert_eq!(c.classify("What is the CLAT syllabus?"), Intent::Syllabus);
        assert_eq!(c.classify("How many questions are there?"), Intent::Pattern);
        assert_eq!(c.classify("NLU cut-off for 2022"), Intent::Cutoff);
        assert_eq!(c.classify("What is the exam duration?"), Intent::Faq);
    }

    #[test]
    fn unmatched_query_is_unknown() {
        assert_eq!(
            classifier().classify("unintelligible gibberish xyz"),
            Intent::Unknown
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classifier().classify("SYLLABUS PLEASE"), Intent::Syllabus);
    }

    #[test]
    fn syllabus_wins_ties_against_pattern() {
        // "topics" (syllabus) and "questions" (pattern) both match;
        // syllabus is checked first.
        assert_eq!(
            classifier().classify("topics and questions"),
            Intent::Syllabus
        );
    }

    #[test]
    fn invalid_pattern_is_rejected_at_construction() {
        let table = vec![(Intent::Faq, vec!["(unclosed".to_string()])];
        assert!(IntentClassifier::new(table).is_err());
    }
}
