// prompt_engine/explain.rs — Explanations for changes made by a rewrite

use super::types::Language;

/// Kinds of change a rewrite can leave behind, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    LanguageMention,
    CommentRequest,
    Detail,
    CompleteExample,
    Conversational,
    FileContext,
    RefactorGuidance,
    DebugGuidance,
    StepByStep,
}

const CHECKLIST: [Change; 9] = [
    Change::LanguageMention,
    Change::CommentRequest,
    Change::Detail,
    Change::CompleteExample,
    Change::Conversational,
    Change::FileContext,
    Change::RefactorGuidance,
    Change::DebugGuidance,
    Change::StepByStep,
];

impl Change {
    fn detected(&self, original: &str, optimized: &str, language: Option<Language>) -> bool {
        match self {
            // The rewrite reports what it injected; the name may already appear later on.
            Change::LanguageMention => language
                .map(|lang| optimized.contains(lang.display_name()))
                .unwrap_or(false),
            Change::CommentRequest => {
                introduced(&original.to_lowercase(), &optimized.to_lowercase(), "comment")
            }
            Change::Detail => introduced(original, optimized, "detailed"),
            Change::CompleteExample => introduced(original, optimized, "complete"),
            Change::Conversational => {
                introduced(original, optimized, "I need you to")
                    || introduced(original, optimized, "Please help me")
            }
            Change::FileContext => introduced(original, optimized, "file context"),
            Change::RefactorGuidance => introduced(original, optimized, "code structure"),
            Change::DebugGuidance => introduced(original, optimized, "specific issue"),
            Change::StepByStep => introduced(original, optimized, "step by step"),
        }
    }

    fn message(&self, tool: &str, language: Option<Language>) -> String {
        match self {
            Change::LanguageMention => format!(
                "Added '{}' specification because {} works better with explicit language mentions",
                language.map(|l| l.display_name()).unwrap_or_default(),
                tool
            ),
            Change::CommentRequest => format!(
                "Added comment request because {} excels at generating well-documented code",
                tool
            ),
            Change::Detail => format!(
                "Added 'detailed' to make the request more specific, which helps {} generate better code",
                tool
            ),
            Change::CompleteExample => format!(
                "Requested complete example because {} performs better with full context",
                tool
            ),
            Change::Conversational => format!(
                "Made language more conversational because {} responds well to natural dialogue",
                tool
            ),
            Change::FileContext => format!(
                "Added file context reference because {} is excellent at working with existing code",
                tool
            ),
            Change::RefactorGuidance => format!(
                "Added refactoring guidance because {} specializes in code refactoring and improvements",
                tool
            ),
            Change::DebugGuidance => format!(
                "Added debugging guidance so {} pinpoints the problem before proposing a fix",
                tool
            ),
            Change::StepByStep => format!(
                "Added step-by-step request because {} handles complex tasks better when broken down",
                tool
            ),
        }
    }
}

fn introduced(original: &str, optimized: &str, marker: &str) -> bool {
    optimized.contains(marker) && !original.contains(marker)
}

/// Explain the differences between `original` and `optimized`.
///
/// `language` is the language the rewrite wrote into the prompt, if any.
/// Always returns at least one entry.
pub fn explain_changes(
    original: &str,
    optimized: &str,
    tool_name: &str,
    language: Option<Language>,
) -> Vec<String> {
    let mut explanations: Vec<String> = CHECKLIST
        .iter()
        .filter(|change| change.detected(original, optimized, language))
        .map(|change| change.message(tool_name, language))
        .collect();

    if explanations.is_empty() {
        explanations.push(format!(
            "Optimized prompt structure and clarity for {}'s specific capabilities",
            tool_name
        ));
    }

    explanations
}
