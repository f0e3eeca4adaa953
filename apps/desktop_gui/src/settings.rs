use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub content_path: Option<PathBuf>,
    pub contact_endpoint: Option<String>,
}

/// Defaults, then `portfolio.toml` in the working directory, then
/// environment variables, then CLI flags. Later sources win.
pub fn resolve(cli_content: Option<PathBuf>, cli_endpoint: Option<String>) -> Settings {
    let mut settings = load_settings();

    if let Some(path) = cli_content {
        settings.content_path = Some(path);
    }
    if let Some(endpoint) = cli_endpoint {
        settings.contact_endpoint = Some(endpoint);
    }

    settings
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("portfolio.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("content") {
                settings.content_path = Some(PathBuf::from(v));
            }
            if let Some(v) = file_cfg.get("contact_endpoint") {
                settings.contact_endpoint = Some(v.clone());
            }
        }
    }

    if let Ok(v) = std::env::var("PORTFOLIO_CONTENT") {
        if !v.trim().is_empty() {
            settings.content_path = Some(PathBuf::from(v));
        }
    }
    if let Ok(v) = std::env::var("PORTFOLIO_CONTACT_ENDPOINT") {
        if !v.trim().is_empty() {
            settings.contact_endpoint = Some(v);
        }
    }

    settings
}
