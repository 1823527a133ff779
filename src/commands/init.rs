//! `primos init`: write a default config file

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Overwrite an existing file
    pub force: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    Config::default().save(&options.path)?;
    println!(
        "{} Config written to {}",
        style("✓").green(),
        options.path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primos.json");
        let options = InitOptions {
            path: path.clone(),
            force: false,
        };

        execute_init(options.clone()).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
        assert!(execute_init(options).is_err());
        execute_init(InitOptions { path, force: true }).unwrap();
    }
}
