use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zenith_assistant::GeneratorConfig;
use zenith_compiler_html::{ExportOptions, EXPORT_FILE_NAME, TAILWIND_CDN};

pub const DEFAULT_CONFIG_NAME: &str = "zenith.config.json";

/// Zenith configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Document title of exported pages
    #[serde(default = "default_title")]
    pub title: String,

    /// Stylesheet script loaded by exported pages
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,

    /// Export file name, relative to the working directory
    #[serde(default = "default_out_file")]
    pub out_file: String,

    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Undo levels kept by the editor (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_title() -> String {
    "Exported Page".to_string()
}

fn default_cdn_url() -> String {
    TAILWIND_CDN.to_string()
}

fn default_out_file() -> String {
    EXPORT_FILE_NAME.to_string()
}

fn default_history_limit() -> usize {
    100
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path of the export file
    pub fn get_out_file(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_file)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            title: self.title.clone(),
            cdn_url: self.cdn_url.clone(),
            ..ExportOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            cdn_url: default_cdn_url(),
            out_file: default_out_file(),
            generator: GeneratorConfig::default(),
            history_limit: default_history_limit(),
        }
    }
}
