//! Print the binary version.

/// Strategy for executing the Version command.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        println!("clatbot {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
