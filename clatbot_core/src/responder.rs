//! The responder façade wiring the three pipeline stages together.

use tracing::debug;

use crate::entities::EntityExtractor;
use crate::error::Result;
use crate::intent::IntentClassifier;
use crate::knowledge::KnowledgeBase;
use crate::render::render;

/// Rule-based question answerer over an immutable knowledge base.
///
/// Construction compiles the intent pattern table once; after that
/// every call is a pure function of the query, so a shared `Responder`
/// is safe to use from multiple threads.
pub struct Responder {
    kb: KnowledgeBase,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
}

impl Responder {
    /// Build a responder over a caller-supplied knowledge base.
    ///
    /// # Errors
    /// Returns an error if any intent or entity pattern fails to compile.
    pub fn new(kb: KnowledgeBase) -> Result<Self> {
        Ok(Self {
            kb,
            classifier: IntentClassifier::with_defaults()?,
            extractor: EntityExtractor::new()?,
        })
    }

    /// Build a responder over the reference CLAT data.
    pub fn with_defaults() -> Result<Self> {
        Self::new(KnowledgeBase::default())
    }

    #[must_use]
    pub const fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answer a free-text query.
    ///
    /// Unrecognized queries get the fixed apology string; the only
    /// error path is a cutoff lookup for a (college, year) pair the
    /// knowledge base does not cover.
    pub fn get_response(&self, query: &str) -> Result<String> {
        let intent = self.classifier.classify(query);
        let entities = self.extractor.extract(query);
        debug!(intent = intent.as_str(), ?entities, "classified query");
        render(intent, &entities, query, &self.kb)
    }
}
