#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Rule-based question answering for the CLAT entrance exam.
//!
//! The pipeline is three sequential stages over a read-only knowledge
//! base: regex intent classification, keyword entity extraction, and
//! template rendering. There is no dialogue state; every query is
//! answered independently.

pub mod entities;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod render;
pub mod responder;
pub mod templates;

pub use entities::{EntityExtractor, ExtractedEntities};
pub use error::{Error, Result};
pub use intent::{Intent, IntentClassifier, default_intent_patterns};
pub use knowledge::{
    CollegeCutoffs, CollegeId, FaqEntry, KnowledgeBase, QuestionPattern, SectionCount, SectionId,
    SyllabusSection, YearCutoff,
};
pub use responder::Responder;
