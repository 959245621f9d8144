//! Answer a single query, or run an interactive prompt loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use super::build_responder;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// Single query to answer (interactive mode if not provided)
    pub message: Option<String>,
    /// Optional JSON knowledge base replacing the embedded data
    pub knowledge: Option<PathBuf>,
}

/// Strategy for executing the Ask command.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let responder = build_responder(input.knowledge.as_deref())?;

        if let Some(query) = input.message {
            let response = responder.get_response(&query)?;
            println!("{response}");
            return Ok(());
        }

        run_interactive(&responder)
    }
}

/// Prompt loop on stdin. `exit`, `quit`, or EOF ends the session.
fn run_interactive(responder: &clatbot_core::Responder) -> anyhow::Result<()> {
    println!("Ask about the CLAT syllabus, pattern, cutoffs, or FAQs. Type 'exit' to quit.");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut turns = 0_u32;

    loop {
        write!(stdout, "You: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        // A failed lookup should not end the session; surface it as
        // the reply and keep prompting.
        match responder.get_response(query) {
            Ok(response) => println!("Bot: {response}"),
            Err(e) => {
                warn!("lookup failed: {e}");
                println!("Bot: {e}");
            }
        }
        turns += 1;
    }

    info!("Session ended after {turns} turns");
    Ok(())
}
