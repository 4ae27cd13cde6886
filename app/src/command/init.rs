use recipebook_config::Config;

/// Strategy for initializing the configuration.
///
/// This strategy creates the default configuration file at
/// `~/recipebook/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.data_dir: Directory for recipes.json (default ~/recipebook/data)");
        println!("   - storage.slot_key: Name of the recipe collection file");
        println!("   - display.default_category: Category used when 'add' gets none");
        println!();
        Ok(())
    }
}
