// prompt_engine/types.rs — Core types for Prompt Engine

use serde::{Deserialize, Serialize};

use super::rewrite::RewriteRoutine;

/// Static metadata describing one target AI coding tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub optimization_rules: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub preferred_keywords: Vec<String>,
    /// Rewrite routine applied to prompts for this tool; `None` leaves prompts untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine: Option<RewriteRoutine>,
}

/// Classified purpose of a prompt.
///
/// Variant order is the tie-break order used when two intents score equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Generate,
    Debug,
    Explain,
    Refactor,
    Review,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Generate => "generate",
            Intent::Debug => "debug",
            Intent::Explain => "explain",
            Intent::Refactor => "refactor",
            Intent::Review => "review",
        }
    }
}

/// Programming language mentioned by a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    CSharp,
    Html,
    Css,
    Sql,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Unknown => "unknown",
        }
    }

    /// Name used when the language is written into a prompt
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Language::Unknown
    }

    /// Parse a language id as it appears in config files and env vars
    pub fn from_id(id: &str) -> Language {
        match id.trim().to_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" => Language::JavaScript,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "csharp" => Language::CSharp,
            "html" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            _ => Language::Unknown,
        }
    }
}

/// How involved the requested work is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

/// Classification of a single prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub original_prompt: String,
    pub intent: Intent,
    pub detected_language: Language,
    pub complexity_level: Complexity,
    pub requirements: Vec<String>,
    pub word_count: usize,
    pub has_code_context: bool,
}

/// Result of prompt optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub target_tool: String,
    pub analysis: PromptAnalysis,
    pub explanations: Vec<String>,
    pub improvements_made: usize,
}

/// Prompt optimizer errors
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    #[error("Prompt is empty")]
    EmptyInput,

    #[error("Tool '{tool}' is not supported")]
    UnknownTool {
        tool: String,
        supported_tools: Vec<String>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

/// JSON structure for profile files
#[derive(Debug, Deserialize)]
pub struct ProfilesConfig {
    pub profiles: Vec<ToolProfile>,
}
