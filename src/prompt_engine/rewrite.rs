// prompt_engine/rewrite.rs — Tool-specific prompt rewrite routines

use serde::{Deserialize, Serialize};

use super::types::{Complexity, Intent, Language, PromptAnalysis};

/// How many leading characters are checked for an existing language mention
const LANGUAGE_MENTION_WINDOW: usize = 20;

/// Rewrite routine carried by a tool profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteRoutine {
    Copilot,
    Cursor,
}

impl RewriteRoutine {
    /// Apply the routine's ordered transformations.
    ///
    /// Returns the rewritten prompt and the language written into it, if any.
    /// `default_language` is injected when a generation request names no language.
    /// Re-running a routine on its own output is not guaranteed to be stable.
    pub fn apply(
        &self,
        prompt: &str,
        analysis: &PromptAnalysis,
        default_language: Language,
    ) -> (String, Option<Language>) {
        match self {
            RewriteRoutine::Copilot => rewrite_for_copilot(prompt, analysis, default_language),
            RewriteRoutine::Cursor => (rewrite_for_cursor(prompt, analysis), None),
        }
    }
}

fn rewrite_for_copilot(
    prompt: &str,
    analysis: &PromptAnalysis,
    default_language: Language,
) -> (String, Option<Language>) {
    let mut result = prompt.to_string();
    let generate = analysis.intent == Intent::Generate;

    // 1. Name the language up front
    let detected = analysis.detected_language;
    let injected = if !detected.is_known() && generate {
        Some(default_language)
    } else if detected.is_known() && !mentions_language_early(&result, detected) {
        Some(detected)
    } else {
        None
    };
    if let Some(language) = injected {
        result = format!("Write a {} {}", language.display_name(), result.to_lowercase());
    }

    // 2. Ask for a function when a medium request is vague about its shape
    if generate
        && analysis.complexity_level == Complexity::Medium
        && !result.to_lowercase().contains("function")
    {
        result = result.replace("Write a", "Write a detailed function to");
    }

    // 3. Comments
    if generate && !result.to_lowercase().contains("comment") {
        result.push_str(". Include detailed comments explaining each step.");
    }

    // 4. Complete example when the user supplied no code
    if generate && !analysis.has_code_context {
        result.push_str(" Provide a complete, working example.");
    }

    (result, injected)
}

fn rewrite_for_cursor(prompt: &str, analysis: &PromptAnalysis) -> String {
    // 1. Conversational openers
    let mut result = prompt
        .replacen("Write a", "I need you to create a", 1)
        .replacen("Create a", "Please help me build a", 1);

    // 2. Point at the open file
    let editing = matches!(analysis.intent, Intent::Refactor | Intent::Debug);
    if (editing || analysis.has_code_context) && !result.to_lowercase().contains("file") {
        result.push_str(" Please work with the current file context.");
    }

    // 3. Intent-specific guidance
    match analysis.intent {
        Intent::Refactor => result.push_str(" Focus on improving code structure and readability."),
        Intent::Debug => result.push_str(" Identify the specific issue and provide a fix."),
        _ => {}
    }

    // 4. Break large tasks down
    if analysis.complexity_level == Complexity::Complex {
        result.push_str(" Let's work through this step by step.");
    }

    result
}

fn mentions_language_early(prompt: &str, language: Language) -> bool {
    let head: String = prompt
        .to_lowercase()
        .chars()
        .take(LANGUAGE_MENTION_WINDOW)
        .collect();
    head.contains(language.as_str()) || head.contains(&language.display_name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt_engine::analyzer::PromptAnalyzer;

    fn copilot(prompt: &str) -> String {
        let analysis = PromptAnalyzer::new().analyze(prompt);
        RewriteRoutine::Copilot.apply(prompt, &analysis, Language::Python).0
    }

    fn cursor(prompt: &str) -> String {
        let analysis = PromptAnalyzer::new().analyze(prompt);
        RewriteRoutine::Cursor.apply(prompt, &analysis, Language::Python).0
    }

    #[test]
    fn test_copilot_injects_default_language() {
        let result = copilot("Write a function to calculate factorial");
        assert_eq!(
            result,
            "Write a Python write a function to calculate factorial. \
             Include detailed comments explaining each step. \
             Provide a complete, working example."
        );
    }

    #[test]
    fn test_copilot_keeps_early_language_mention() {
        let result = copilot("Write a Python function to calculate factorial");
        assert!(result.starts_with("Write a Python function to calculate factorial."));
        assert!(!result.contains("detailed function"));
    }

    #[test]
    fn test_copilot_prefixes_late_language_mention() {
        let result = copilot("Build a small todo tracker in java");
        assert!(
            result.starts_with("Write a Java build a small todo tracker in java."),
            "unexpected rewrite: {}",
            result
        );
    }

    #[test]
    fn test_copilot_escalates_medium_requests_to_function() {
        // medium via "method" keyword, no "function" anywhere
        let result = copilot("Write a method that sums the numbers");
        assert!(
            result.starts_with("Write a detailed function to Python write a method"),
            "unexpected rewrite: {}",
            result
        );
    }

    #[test]
    fn test_copilot_skips_comment_request_when_present() {
        let result = copilot("Write a function with comments to reverse a string");
        assert!(!result.contains("Include detailed comments"));
        assert!(result.ends_with("Provide a complete, working example."));
    }

    #[test]
    fn test_copilot_skips_example_with_code_context() {
        let result = copilot("Write tests for def parse(line): in this module");
        assert!(!result.contains("complete, working example"));
    }

    #[test]
    fn test_copilot_leaves_non_generate_prompts_alone() {
        let prompt = "Explain this sorting algorithm to me please";
        assert_eq!(copilot(prompt), prompt);
    }

    #[test]
    fn test_cursor_debug_prompt() {
        assert_eq!(
            cursor("Debug this code"),
            "Debug this code Please work with the current file context. \
             Identify the specific issue and provide a fix."
        );
    }

    #[test]
    fn test_cursor_openers_replaced_once() {
        let result = cursor("Write a parser. Write a lexer.");
        assert!(result.starts_with("I need you to create a parser. Write a lexer."));

        let result = cursor("Create a login form");
        assert!(result.starts_with("Please help me build a login form"));
    }

    #[test]
    fn test_cursor_refactor_with_file_mention() {
        let result = cursor("Refactor the config file loader to reduce duplication");
        assert!(!result.contains("current file context"));
        assert!(result.contains("Focus on improving code structure and readability."));
    }

    #[test]
    fn test_cursor_complex_prompt_step_by_step() {
        let result = cursor("Create a scalable event system for the application backend");
        assert!(result.ends_with("Let's work through this step by step."));
    }

    #[test]
    fn test_copilot_reports_injected_language() {
        let analyzer = PromptAnalyzer::new();

        let prompt = "Explain closures";
        let analysis = analyzer.analyze(prompt);
        let (_, injected) = RewriteRoutine::Copilot.apply(prompt, &analysis, Language::Python);
        assert_eq!(injected, None);

        let prompt = "Write a sort";
        let analysis = analyzer.analyze(prompt);
        let (_, injected) = RewriteRoutine::Copilot.apply(prompt, &analysis, Language::Sql);
        assert_eq!(injected, Some(Language::Sql));

        // Mentioned early: nothing injected
        let prompt = "Write a Python script to rename files";
        let analysis = analyzer.analyze(prompt);
        let (_, injected) = RewriteRoutine::Copilot.apply(prompt, &analysis, Language::Python);
        assert_eq!(injected, None);

        // Mentioned late: prefixed even though the original names it
        let prompt = "please write a fast sort in C++";
        let analysis = analyzer.analyze(prompt);
        let (text, injected) = RewriteRoutine::Copilot.apply(prompt, &analysis, Language::Python);
        assert_eq!(injected, Some(Language::Cpp));
        assert!(text.starts_with("Write a C++ please write a fast sort in c++"));
    }

    #[test]
    fn test_cursor_never_injects_language() {
        let prompt = "Write a Python script";
        let analysis = PromptAnalyzer::new().analyze(prompt);
        let (_, injected) = RewriteRoutine::Cursor.apply(prompt, &analysis, Language::Python);
        assert_eq!(injected, None);
    }
}
