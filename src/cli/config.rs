use std::path::PathBuf;

use crate::config::{self, Config};
use crate::error::Result;

/// Initialize a prio.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from("prio.toml"));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!();
    println!(
        "Edit {} to change the data file, Ollama endpoint, or model.",
        config_path.display()
    );
    println!("Without a config file, defaults apply and everything still works.");

    Ok(())
}
