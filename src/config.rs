use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt_engine::Language;

pub const DEFAULT_TOOL: &str = "copilot";
pub const DEFAULT_LOG_FILTER: &str = "prompt_tuner=info";

pub const ENV_DEFAULT_TOOL: &str = "PROMPT_TUNER_DEFAULT_TOOL";
pub const ENV_DEFAULT_LANGUAGE: &str = "PROMPT_TUNER_DEFAULT_LANGUAGE";
pub const ENV_PROFILES: &str = "PROMPT_TUNER_PROFILES";
pub const ENV_LOG: &str = "PROMPT_TUNER_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Tool used when a request names none
    pub default_tool: String,
    /// Language written into generation prompts that name none
    pub default_language: Language,
    /// Extra tool profiles, merged over the built-ins
    pub profiles_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            default_tool: DEFAULT_TOOL.to_string(),
            default_language: Language::Python,
            profiles_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub fn normalize_tool(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_TOOL.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

pub fn normalize_language(language: Language) -> Language {
    if language.is_known() {
        language
    } else {
        Language::Python
    }
}

/// Load config from an optional JSON file, then apply environment overrides.
///
/// A missing file yields defaults. An unreadable or invalid file is logged and
/// replaced by defaults so a bad config never blocks optimization.
pub fn load(path: Option<&Path>) -> OptimizerConfig {
    let mut config = match path {
        Some(path) if path.exists() => read_file(path).unwrap_or_else(|e| {
            tracing::warn!("{}. Using default config.", e);
            OptimizerConfig::default()
        }),
        Some(path) => {
            tracing::info!("Config file {} not found, using defaults", path.display());
            OptimizerConfig::default()
        }
        None => OptimizerConfig::default(),
    };

    apply_env(&mut config, |key| env::var(key).ok());
    normalize_config(&mut config);
    config
}

fn read_file(path: &Path) -> Result<OptimizerConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    serde_json::from_str::<OptimizerConfig>(&raw)
        .map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

fn apply_env(config: &mut OptimizerConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(tool) = non_empty(ENV_DEFAULT_TOOL) {
        config.default_tool = tool;
    }

    if let Some(language) = non_empty(ENV_DEFAULT_LANGUAGE) {
        match Language::from_id(&language) {
            Language::Unknown => {
                tracing::warn!("Ignoring unknown {}='{}'", ENV_DEFAULT_LANGUAGE, language)
            }
            parsed => config.default_language = parsed,
        }
    }

    if let Some(profiles) = non_empty(ENV_PROFILES) {
        config.profiles_path = Some(PathBuf::from(profiles.trim()));
    }

    if let Some(filter) = non_empty(ENV_LOG) {
        config.log_filter = filter;
    }
}

fn normalize_config(config: &mut OptimizerConfig) {
    config.default_tool = normalize_tool(&config.default_tool);
    config.default_language = normalize_language(config.default_language);
    if config.log_filter.trim().is_empty() {
        config.log_filter = DEFAULT_LOG_FILTER.to_string();
    }
}
