// prompt_engine/knowledge.rs — Tool profile registry and profile loading

use std::path::Path;

use super::rewrite::RewriteRoutine;
use super::types::{OptimizerError, ProfilesConfig, ToolProfile};

/// Read-only registry of tool profiles, kept in registration order
#[derive(Debug, Clone)]
pub struct ToolKnowledge {
    profiles: Vec<ToolProfile>,
}

impl ToolKnowledge {
    /// Registry seeded with the built-in profiles
    pub fn new() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Built-in profiles extended with the profiles in a JSON file
    pub fn with_profiles_file(path: &Path) -> Result<Self, OptimizerError> {
        let mut knowledge = Self::new();
        for profile in load_profiles(path)? {
            knowledge.upsert(profile);
        }
        Ok(knowledge)
    }

    /// Case-insensitive exact lookup. Callers trim user input.
    pub fn get_tool_info(&self, name: &str) -> Option<&ToolProfile> {
        let key = name.to_lowercase();
        self.profiles.iter().find(|p| p.id == key)
    }

    /// All registered identifiers, in registration order
    pub fn get_all_tools(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.id.clone()).collect()
    }

    /// Optimization rules of a tool, empty when the tool is unknown
    pub fn get_optimization_rules(&self, name: &str) -> &[String] {
        self.get_tool_info(name)
            .map(|p| p.optimization_rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ToolProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    // Same id replaces in place so registration order stays stable.
    fn upsert(&mut self, profile: ToolProfile) {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => {
                tracing::info!("Profile '{}' overrides built-in definition", profile.id);
                *existing = profile;
            }
            None => self.profiles.push(profile),
        }
    }
}

impl Default for ToolKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

/// Load profiles from a JSON file path
pub fn load_profiles(path: &Path) -> Result<Vec<ToolProfile>, OptimizerError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        OptimizerError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let config: ProfilesConfig = serde_json::from_str(&content).map_err(|e| {
        OptimizerError::Config(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    let mut profiles = Vec::with_capacity(config.profiles.len());
    for mut profile in config.profiles {
        profile.id = profile.id.trim().to_lowercase();
        // Validate required fields
        if profile.id.is_empty() || profile.name.trim().is_empty() {
            return Err(OptimizerError::Config(format!(
                "Profile missing required fields: id='{}', name='{}'",
                profile.id, profile.name
            )));
        }
        profiles.push(profile);
    }

    tracing::info!("Loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_profiles() -> Vec<ToolProfile> {
    vec![
        ToolProfile {
            id: "copilot".to_string(),
            name: "GitHub Copilot".to_string(),
            description: "AI pair programmer that suggests code completions".to_string(),
            optimization_rules: strings(&[
                "Be specific and clear about what you want",
                "Include programming language in the prompt",
                "Add context about the function/class purpose",
                "Request comments in code for better understanding",
            ]),
            strengths: strings(&[
                "Code completion and suggestions",
                "Understanding context from existing code",
                "Generating functions with proper syntax",
                "Adding helpful comments",
            ]),
            preferred_keywords: strings(&[
                "function",
                "class",
                "method",
                "implement",
                "create",
                "write",
                "generate",
                "with comments",
                "step by step",
            ]),
            routine: Some(RewriteRoutine::Copilot),
        },
        ToolProfile {
            id: "cursor".to_string(),
            name: "Cursor".to_string(),
            description: "AI-first code editor with natural language editing".to_string(),
            optimization_rules: strings(&[
                "Use natural, conversational language",
                "Specify file context and project structure",
                "Include refactoring and editing instructions",
                "Mention specific lines or sections to modify",
            ]),
            strengths: strings(&[
                "Natural language code editing",
                "File and project manipulation",
                "Code refactoring and improvements",
                "Multi-file operations",
            ]),
            preferred_keywords: strings(&[
                "edit", "modify", "refactor", "update", "change", "in file", "at line",
                "replace", "improve",
            ]),
            routine: Some(RewriteRoutine::Cursor),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profiles(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let knowledge = ToolKnowledge::new();
        let upper = knowledge.get_tool_info("COPILOT").unwrap();
        let lower = knowledge.get_tool_info("copilot").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "GitHub Copilot");
    }

    #[test]
    fn test_lookup_has_no_partial_matches() {
        let knowledge = ToolKnowledge::new();
        assert!(knowledge.get_tool_info("cop").is_none());
        assert!(knowledge.get_tool_info("github copilot").is_none());
        assert!(knowledge.get_tool_info("").is_none());
        assert!(knowledge.get_tool_info(" copilot").is_none());
        assert!(knowledge.get_tool_info("cursor\n").is_none());
    }

    #[test]
    fn test_all_tools_in_registration_order() {
        let knowledge = ToolKnowledge::new();
        assert_eq!(knowledge.get_all_tools(), vec!["copilot", "cursor"]);
    }

    #[test]
    fn test_rules_for_unknown_tool_are_empty() {
        let knowledge = ToolKnowledge::new();
        assert!(knowledge.get_optimization_rules("nonexistent").is_empty());
        assert_eq!(knowledge.get_optimization_rules("Cursor").len(), 4);
        assert_eq!(
            knowledge.get_optimization_rules("cursor")[0],
            "Use natural, conversational language"
        );
    }

    #[test]
    fn test_profiles_file_appends_and_overrides() {
        let file = write_profiles(
            r#"{"profiles": [
                {"id": "Codeium", "name": "Codeium", "description": "Autocomplete"},
                {"id": "copilot", "name": "Copilot Custom", "routine": "copilot"}
            ]}"#,
        );

        let knowledge = ToolKnowledge::with_profiles_file(file.path()).unwrap();
        assert_eq!(knowledge.get_all_tools(), vec!["copilot", "cursor", "codeium"]);
        assert_eq!(knowledge.get_tool_info("copilot").unwrap().name, "Copilot Custom");

        let codeium = knowledge.get_tool_info("CODEIUM").unwrap();
        assert_eq!(codeium.routine, None);
        assert!(codeium.optimization_rules.is_empty());
    }

    #[test]
    fn test_profiles_file_rejects_missing_fields() {
        let file = write_profiles(r#"{"profiles": [{"id": "  ", "name": "Nameless"}]}"#);
        let err = load_profiles(file.path()).unwrap_err();
        assert!(matches!(err, OptimizerError::Config(_)));
    }

    #[test]
    fn test_profiles_file_rejects_invalid_json() {
        let file = write_profiles("{ not json");
        let err = ToolKnowledge::with_profiles_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
