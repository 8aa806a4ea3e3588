use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON data file holding the priority list
    pub data_file: PathBuf,

    /// Ollama settings for the summarize command
    pub ollama: OllamaConfig,
}

/// Settings for the local Ollama instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Generate endpoint URL
    pub url: String,

    /// Model name to request
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_file = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".priorities.json");

        Self {
            data_file,
            ollama: OllamaConfig::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434/api/generate".to_string(),
            model: "llama3".to_string(),
        }
    }
}
