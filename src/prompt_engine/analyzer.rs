// prompt_engine/analyzer.rs — Keyword-based prompt classification

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Complexity, Intent, Language, PromptAnalysis};

/// Intent keywords, in tie-break order
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Generate,
        &["write", "create", "generate", "build", "make", "implement", "develop"],
    ),
    (
        Intent::Debug,
        &["debug", "fix", "error", "bug", "issue", "problem", "troubleshoot"],
    ),
    (
        Intent::Explain,
        &["explain", "understand", "how does", "what is", "describe", "clarify"],
    ),
    (
        Intent::Refactor,
        &["refactor", "improve", "optimize", "clean", "reorganize", "restructure"],
    ),
    (
        Intent::Review,
        &["review", "check", "analyze", "evaluate", "assess", "feedback"],
    ),
];

/// Language keywords, in detection order (first hit wins)
pub const LANGUAGE_KEYWORDS: &[(Language, &[&str])] = &[
    (
        Language::Python,
        &["python", "py", "def", "import", "pip", "pandas", "numpy"],
    ),
    (
        Language::JavaScript,
        &["javascript", "js", "node", "npm", "react", "vue", "angular"],
    ),
    (
        Language::Java,
        &["java", "class", "public static", "maven", "spring"],
    ),
    (
        Language::Cpp,
        &["c++", "cpp", "include", "std::", "vector", "cout"],
    ),
    (
        Language::CSharp,
        &["c#", "csharp", "using", "namespace", "public class"],
    ),
    (
        Language::Html,
        &["html", "div", "span", "body", "head", "css"],
    ),
    (
        Language::Css,
        &["css", "style", "color", "background", "margin", "padding"],
    ),
    (
        Language::Sql,
        &["sql", "select", "from", "where", "join", "database"],
    ),
];

/// Complexity keywords, in tie-break order
pub const COMPLEXITY_KEYWORDS: &[(Complexity, &[&str])] = &[
    (
        Complexity::Simple,
        &["simple", "basic", "easy", "quick", "small", "short"],
    ),
    (
        Complexity::Medium,
        &["function", "class", "method", "feature", "component"],
    ),
    (
        Complexity::Complex,
        &[
            "system",
            "application",
            "framework",
            "architecture",
            "complex",
            "advanced",
            "multiple",
            "integrate",
            "scalable",
        ],
    ),
];

/// Requirement groups, in the order requirements are reported
pub const REQUIREMENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Include comments in code",
        &["comment", "comments", "documented"],
    ),
    (
        "Include error handling",
        &["error", "exception", "try", "catch"],
    ),
    ("Include tests", &["test", "testing", "unit test"]),
    (
        "Focus on performance",
        &["fast", "efficient", "optimize", "performance"],
    ),
    (
        "Include documentation",
        &["document", "documentation", "readme"],
    ),
];

/// Prompts shorter than this are always simple
const SHORT_PROMPT_WORDS: usize = 5;

// Declarations need real syntax after the name so prose like
// "a function to calculate" does not count as code.
static CODE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bdef\s+\w+\s*\(",
        r"\bfunction\s+\w+\s*\(",
        r"\bclass\s+\w+(\s+(extends|implements)\s+[\w.]+)?\s*[:({]",
        r"(?m)^\s*import\s+[\w.]+",
        r"(?m)^\s*from\s+[\w.]+\s+import\b",
        r"#include",
        r"</?[A-Za-z][^<>]*>",
        r"\{.*\}",
        r"```",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Classifies prompts by intent, language, complexity and requirements
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAnalyzer;

impl PromptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a prompt. Total over all inputs, including the empty string.
    pub fn analyze(&self, prompt: &str) -> PromptAnalysis {
        let lowered = prompt.to_lowercase();
        let word_count = prompt.split_whitespace().count();

        let analysis = PromptAnalysis {
            original_prompt: prompt.to_string(),
            intent: detect_intent(&lowered),
            detected_language: detect_language(&lowered),
            complexity_level: assess_complexity(&lowered, word_count),
            requirements: extract_requirements(&lowered),
            word_count,
            has_code_context: has_code_context(prompt),
        };

        tracing::debug!(
            "Analyzed prompt: intent={}, language={}, complexity={}, words={}, code={}",
            analysis.intent.as_str(),
            analysis.detected_language.as_str(),
            analysis.complexity_level.as_str(),
            analysis.word_count,
            analysis.has_code_context
        );

        analysis
    }
}

/// Number of distinct keywords present in `text`
fn keyword_score(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// Highest-scoring category; ties go to the earliest entry. `None` if nothing scored.
fn best_category<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (category, keywords) in table {
        let score = keyword_score(text, keywords);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((*category, score));
        }
    }
    best.map(|(category, _)| category)
}

fn detect_intent(lowered: &str) -> Intent {
    best_category(lowered, INTENT_KEYWORDS).unwrap_or(Intent::Generate)
}

fn detect_language(lowered: &str) -> Language {
    LANGUAGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(language, _)| *language)
        .unwrap_or(Language::Unknown)
}

fn assess_complexity(lowered: &str, word_count: usize) -> Complexity {
    if word_count < SHORT_PROMPT_WORDS {
        return Complexity::Simple;
    }

    if let Some(level) = best_category(lowered, COMPLEXITY_KEYWORDS) {
        return level;
    }

    match word_count {
        0..=9 => Complexity::Simple,
        10..=19 => Complexity::Medium,
        _ => Complexity::Complex,
    }
}

fn extract_requirements(lowered: &str) -> Vec<String> {
    REQUIREMENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(requirement, _)| requirement.to_string())
        .collect()
}

fn has_code_context(prompt: &str) -> bool {
    CODE_PATTERNS.iter().any(|pattern| pattern.is_match(prompt))
}
