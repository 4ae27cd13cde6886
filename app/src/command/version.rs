/// Strategy for displaying version information.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("recipebook {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
