//! Scripted demonstration over the reference sample queries.

use super::build_responder;

const SAMPLE_QUERIES: [&str; 6] = [
    "What is the syllabus for CLAT 2025?",
    "How many questions are there in the English section?",
    "Give me last year's cut-off for NLSIU Bangalore.",
    "What is the exam duration?",
    "Tell me about the mathematics syllabus",
    "What was the cutoff for NLU Jodhpur in 2022?",
];

/// Strategy for executing the Demo command.
///
/// Feeds the six reference sample queries through the responder and
/// prints each exchange. Illustrative only; the library contract is
/// `Responder::get_response`.
#[derive(Debug, Clone, Copy)]
pub struct DemoStrategy;

impl super::CommandStrategy for DemoStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let responder = build_responder(None)?;

        println!("CLAT Chatbot Demo\n{}", "=".repeat(50));
        for query in SAMPLE_QUERIES {
            println!("\nUser: {query}");
            let response = responder.get_response(query)?;
            println!("Bot: {response}");
            println!("{}", "-".repeat(50));
        }

        Ok(())
    }
}
