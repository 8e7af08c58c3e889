// api.rs — JSON request/response shapes for embedding the optimizer behind a transport

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::prompt_engine::{OptimizerError, PromptAnalysis, PromptOptimizer, ToolKnowledge};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub tool: String,
}

/// Flattened optimization result, or an error with the valid tool ids
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<PromptAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements_made: Option<usize>,
}

impl OptimizeResponse {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub success: bool,
    /// Keyed by tool id, in registration order
    pub tools: Map<String, Value>,
}

/// Validate and run one optimize request
pub fn handle_optimize(optimizer: &PromptOptimizer, request: OptimizeRequest) -> OptimizeResponse {
    let prompt = request.prompt.trim();
    let tool = request.tool.trim().to_lowercase();

    if prompt.is_empty() {
        return OptimizeResponse::failure("Please provide a prompt to optimize");
    }
    if tool.is_empty() {
        return OptimizeResponse::failure("Please select a target tool");
    }

    match optimizer.optimize_prompt(prompt, &tool) {
        Ok(result) => OptimizeResponse {
            success: true,
            original_prompt: Some(result.original_prompt),
            optimized_prompt: Some(result.optimized_prompt),
            target_tool: Some(result.target_tool),
            analysis: Some(result.analysis),
            explanations: Some(result.explanations),
            improvements_made: Some(result.improvements_made),
            ..OptimizeResponse::default()
        },
        Err(OptimizerError::UnknownTool {
            tool,
            supported_tools,
        }) => OptimizeResponse {
            supported_tools: Some(supported_tools),
            ..OptimizeResponse::failure(format!("Tool '{}' is not supported", tool))
        },
        Err(e) => OptimizeResponse::failure(e.to_string()),
    }
}

/// Name, description and strengths of every registered tool
pub fn tools_overview(knowledge: &ToolKnowledge) -> ToolsResponse {
    let tools = knowledge
        .profiles()
        .map(|profile| {
            let summary = json!({
                "name": profile.name,
                "description": profile.description,
                "strengths": profile.strengths,
            });
            (profile.id.clone(), summary)
        })
        .collect();

    ToolsResponse {
        success: true,
        tools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn request(prompt: &str, tool: &str) -> OptimizeRequest {
        OptimizeRequest {
            prompt: prompt.to_string(),
            tool: tool.to_string(),
        }
    }

    #[test]
    fn test_missing_prompt() {
        let response = handle_optimize(&PromptOptimizer::new(), request("  ", "copilot"));
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Please provide a prompt to optimize")
        );
    }

    #[test]
    fn test_missing_tool() {
        let response = handle_optimize(&PromptOptimizer::new(), request("Write a sort", ""));
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Please select a target tool"));
        assert!(response.supported_tools.is_none());
    }

    #[test]
    fn test_unknown_tool_body() {
        let response = handle_optimize(&PromptOptimizer::new(), request("Write a sort", "vim"));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Tool 'vim' is not supported",
                "supported_tools": ["copilot", "cursor"],
            })
        );
    }

    #[test]
    fn test_success_body_is_flattened() {
        let response = handle_optimize(
            &PromptOptimizer::new(),
            request("  Debug this code  ", "Cursor"),
        );
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["original_prompt"], json!("Debug this code"));
        assert_eq!(body["target_tool"], json!("Cursor"));
        assert_eq!(body["analysis"]["intent"], json!("debug"));
        assert_eq!(body["analysis"]["detected_language"], json!("unknown"));
        assert_eq!(body["improvements_made"], json!(2));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_request_fields_default() {
        let parsed: OptimizeRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(parsed.tool, "");
    }

    #[test]
    fn test_tools_overview() {
        let overview = tools_overview(&ToolKnowledge::new());
        assert!(overview.success);
        assert_eq!(overview.tools["copilot"]["name"], json!("GitHub Copilot"));
        assert_eq!(overview.tools["cursor"]["strengths"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_tools_overview_keeps_registration_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"profiles": [{"id": "aider", "name": "Aider"}]}"#)
            .unwrap();
        let knowledge = ToolKnowledge::with_profiles_file(file.path()).unwrap();

        let body = serde_json::to_value(tools_overview(&knowledge)).unwrap();
        let ids: Vec<&str> = body["tools"]
            .as_object()
            .unwrap()
            .keys()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(ids, vec!["copilot", "cursor", "aider"]);
        assert_eq!(body["tools"]["aider"]["strengths"], json!([]));
        assert!(body.get("tool_ids").is_none());

        let text = serde_json::to_string(&tools_overview(&knowledge)).unwrap();
        let copilot = text.find("\"copilot\"").unwrap();
        let cursor = text.find("\"cursor\"").unwrap();
        let aider = text.find("\"aider\"").unwrap();
        assert!(copilot < cursor && cursor < aider);
    }
}
