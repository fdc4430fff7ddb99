//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use mediastrip::report::Reporter;
use mediastrip::Config;

/// Show the effective configuration as TOML.
///
/// Uncolored so the output can be redirected straight into a config file.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool, reporter: &mut Reporter) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    reporter.success(&format!("Config written to {}", config_path.display()));
    Ok(())
}
