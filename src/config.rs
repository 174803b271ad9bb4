use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub editor: String,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Replace the configured editor when one was given on the command line.
    pub fn with_editor(mut self, editor: Option<String>) -> Self {
        if let Some(editor) = editor.filter(|e| !e.trim().is_empty()) {
            self.editor = editor;
        }
        self
    }
}

/// Load settings from an optional `Config` file in the working directory,
/// then `VIMV_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .set_default("editor", DEFAULT_EDITOR)?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("VIMV"))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
