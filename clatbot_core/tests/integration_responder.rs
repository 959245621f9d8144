//! End-to-end tests for the query → intent → entities → response pipeline.
//!
//! These pin down the observable contract:
//! 1. Section vocabulary routes to the syllabus intent and section entity
//! 2. FAQ topics match only as spaced substrings of the query
//! 3. A named college without a year still gets the all-colleges summary
//! 4. Specific cutoff lookups are exact, and misses are typed errors

use clatbot_core::{
    EntityExtractor, Error, Intent, IntentClassifier, KnowledgeBase, Responder, SectionId,
};

fn responder() -> Responder {
    Responder::with_defaults().expect("default patterns compile")
}

#[test]
fn section_keywords_route_to_syllabus_intent_and_entity() {
    let classifier = IntentClassifier::with_defaults().expect("default patterns compile");
    let extractor = EntityExtractor::new().expect("year pattern compiles");

    let cases = [
        ("english", SectionId::English),
        ("gk", SectionId::Gk),
        ("legal", SectionId::LegalAptitude),
        ("logical", SectionId::LogicalReasoning),
        ("mathematics", SectionId::Mathematics),
    ];
    for (keyword, section) in cases {
        let query = format!("What is the {keyword} syllabus?");
        assert_eq!(classifier.classify(&query), Intent::Syllabus, "{query}");
        assert_eq!(extractor.extract(&query).section, Some(section), "{query}");
    }
}

#[test]
fn exam_duration_faq_is_exact() {
    let out = responder().get_response("What is the exam duration?");
    assert_eq!(out.ok().as_deref(), Some("The exam duration for CLAT is 2 hours"));
}

#[test]
fn college_without_year_falls_into_overview_branch() {
    // The query names NLSIU but carries no year token, so the specific
    // branch must NOT fire.
    let out = responder().get_response("Give me last year's cut-off for NLSIU Bangalore.");
    let expected = "Here are the cutoffs for top NLUs:\n\
        NLS: 98.5 (2023)\n\
        NLUD: 97.8 (2023)\n\
        NLU: 96.5 (2023)";
    assert_eq!(out.ok().as_deref(), Some(expected));
}

#[test]
fn specific_cutoff_lookup_is_exact() {
    let out = responder().get_response("What was the cutoff for NLU Jodhpur in 2022?");
    assert_eq!(
        out.ok().as_deref(),
        Some("The cutoff for NLU in 2022 was 96.2 percentile")
    );
}

#[test]
fn integral_percentile_keeps_its_trailing_zero() {
    // nlud's 2021 cutoff is 97.0; the decimal must survive formatting.
    let out = responder().get_response("What was the cutoff for NLU Delhi in 2021?");
    assert_eq!(
        out.ok().as_deref(),
        Some("The cutoff for NLUD in 2021 was 97.0 percentile")
    );
}

#[test]
fn cutoff_miss_is_a_typed_error() {
    let out = responder().get_response("What was the cutoff for NLU Jodhpur in 2018?");
    assert!(matches!(
        out,
        Err(Error::MissingCutoffData { ref year, .. }) if year == "2018"
    ));
}

#[test]
fn gibberish_gets_the_apology() {
    let out = responder().get_response("unintelligible gibberish xyz");
    assert_eq!(
        out.ok().as_deref(),
        Some("I'm sorry, I couldn't understand your query. Could you please rephrase it?")
    );
}

#[test]
fn responses_are_idempotent() {
    let responder = responder();
    for query in [
        "What is the syllabus for CLAT 2025?",
        "How many questions are there in the English section?",
        "What is the exam duration?",
    ] {
        assert_eq!(
            responder.get_response(query).ok(),
            responder.get_response(query).ok(),
            "{query}"
        );
    }
}

#[test]
fn mathematics_syllabus_response_lists_all_topics_in_order() {
    let kb = KnowledgeBase::default();
    let out = responder()
        .get_response("Tell me about the mathematics syllabus")
        .ok()
        .unwrap_or_default();

    let topics = kb
        .syllabus_topics(SectionId::Mathematics)
        .ok()
        .unwrap_or_default()
        .to_vec();
    assert!(!topics.is_empty());
    assert!(out.contains(&topics.join(", ")), "{out}");
}

#[test]
fn knowledge_base_loaded_from_json_answers_identically() {
    let json = serde_json::to_string(&KnowledgeBase::default()).expect("default kb serializes");
    let kb = KnowledgeBase::from_json(&json).expect("round-tripped kb parses");
    let custom = Responder::new(kb).expect("default patterns compile");

    let reference = responder();
    for query in [
        "What is the syllabus for CLAT 2025?",
        "Give me last year's cut-off for NLSIU Bangalore.",
        "What was the cutoff for NLU Jodhpur in 2022?",
    ] {
        assert_eq!(
            custom.get_response(query).ok(),
            reference.get_response(query).ok(),
            "{query}"
        );
    }
}
