// prompt_engine/mod.rs - Main Prompt Engine

mod analyzer;
mod explain;
mod knowledge;
mod rewrite;
mod types;

pub use analyzer::PromptAnalyzer;
pub use explain::explain_changes;
pub use knowledge::{load_profiles, ToolKnowledge};
pub use rewrite::RewriteRoutine;
pub use types::{
    Complexity, Intent, Language, OptimizationResult, OptimizerError, PromptAnalysis, ToolProfile,
};

use crate::config::OptimizerConfig;

/// Prompt Optimizer - rewrites prompts for a target AI coding tool
#[derive(Debug, Clone)]
pub struct PromptOptimizer {
    knowledge: ToolKnowledge,
    analyzer: PromptAnalyzer,
    default_language: Language,
}

impl PromptOptimizer {
    /// Optimizer over the built-in tool profiles
    pub fn new() -> Self {
        Self::with_knowledge(ToolKnowledge::new(), Language::Python)
    }

    pub fn with_knowledge(knowledge: ToolKnowledge, default_language: Language) -> Self {
        tracing::info!(
            "PromptOptimizer initialized: {} tools, default language={}",
            knowledge.len(),
            default_language.as_str()
        );

        Self {
            knowledge,
            analyzer: PromptAnalyzer::new(),
            default_language,
        }
    }

    /// Create from config, loading extra profiles when a profiles file is set
    pub fn from_config(config: &OptimizerConfig) -> Result<Self, OptimizerError> {
        let knowledge = match &config.profiles_path {
            Some(path) => ToolKnowledge::with_profiles_file(path)?,
            None => ToolKnowledge::new(),
        };

        Ok(Self::with_knowledge(knowledge, config.default_language))
    }

    /// Optimize a prompt for the given tool
    pub fn optimize_prompt(
        &self,
        prompt: &str,
        tool_id: &str,
    ) -> Result<OptimizationResult, OptimizerError> {
        if prompt.trim().is_empty() {
            return Err(OptimizerError::EmptyInput);
        }

        let profile = self.knowledge.get_tool_info(tool_id).ok_or_else(|| {
            tracing::warn!("Unsupported tool requested: '{}'", tool_id);
            OptimizerError::UnknownTool {
                tool: tool_id.to_string(),
                supported_tools: self.knowledge.get_all_tools(),
            }
        })?;

        let analysis = self.analyzer.analyze(prompt);

        let (optimized, injected) = match profile.routine {
            Some(routine) => routine.apply(prompt, &analysis, self.default_language),
            None => (prompt.to_string(), None),
        };

        let explanations = explain_changes(prompt, &optimized, &profile.name, injected);

        tracing::info!(
            "Optimized prompt for '{}': {} improvements ({} -> {} chars)",
            profile.id,
            explanations.len(),
            prompt.len(),
            optimized.len()
        );

        Ok(OptimizationResult {
            original_prompt: prompt.to_string(),
            optimized_prompt: optimized,
            target_tool: profile.name.clone(),
            analysis,
            improvements_made: explanations.len(),
            explanations,
        })
    }

    pub fn analyze_prompt(&self, prompt: &str) -> PromptAnalysis {
        self.analyzer.analyze(prompt)
    }

    pub fn knowledge(&self) -> &ToolKnowledge {
        &self.knowledge
    }
}

impl Default for PromptOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
