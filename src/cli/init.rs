use std::path::Path;

use clap::Parser;
use contacts::{Config, Store};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        use std::fs;

        let config_path = Store::config_path(root);
        if config_path.exists() {
            anyhow::bail!(
                "Contact book already initialized (found existing {})",
                config_path.display()
            );
        }

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", dir.display()))?;
        }

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        println!(
            "{}",
            format!("Initialized contact book in {}", root.display()).success()
        );
        println!("  Created: .contacts/config.toml");
        println!();
        println!("Next steps:");
        println!("  contacts add --name \"Your First Contact\"");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_default_config() {
        let tmp = tempfile::tempdir().unwrap();
        Init {}.run(tmp.path()).unwrap();

        let config = Config::load(&Store::config_path(tmp.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn init_twice_fails() {
        let tmp = tempfile::tempdir().unwrap();
        Init {}.run(tmp.path()).unwrap();

        let error = Init {}.run(tmp.path()).unwrap_err();
        assert!(error.to_string().starts_with("Contact book already initialized"));
    }
}
