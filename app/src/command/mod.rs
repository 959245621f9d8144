//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type,
//! dispatched statically from `main`. Adding a command means adding a
//! strategy, not growing a match arm full of logic.

use anyhow::Context;
use clatbot_core::{KnowledgeBase, Responder};
use std::path::Path;
use tracing::info;

mod ask;
mod demo;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use demo::DemoStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build a responder, optionally over a knowledge base loaded from a
/// JSON file instead of the embedded reference data.
pub fn build_responder(knowledge: Option<&Path>) -> anyhow::Result<Responder> {
    let Some(path) = knowledge else {
        return Ok(Responder::new(KnowledgeBase::default())?);
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading knowledge base from {}", path.display()))?;
    let kb = KnowledgeBase::from_json(&json)
        .with_context(|| format!("parsing knowledge base from {}", path.display()))?;
    info!("Loaded knowledge base from {}", path.display());
    Ok(Responder::new(kb)?)
}
