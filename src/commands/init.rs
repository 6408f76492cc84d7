use crate::config::{SmhmConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const HEADER: &str = "# smhm-id configuration\n\
#\n\
# [output] format: terminal | json | markdown\n\
# [output] color: auto | always | never\n\
# [certainty] probabilities from low to high (inclusive) are reported\n\
# as a low level of certainty.\n\n";

/// Render the default configuration file contents.
pub fn default_config_contents() -> Result<String> {
    let body = toml::to_string_pretty(&SmhmConfig::documented_defaults())
        .context("Failed to serialize default configuration")?;
    Ok(format!("{}{}", HEADER, body))
}

/// Write a default config into `dir`, returning its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, &default_config_contents()?)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to determine current directory")?;
    let path = init_config_in(&dir, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
