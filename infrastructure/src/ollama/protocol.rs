//! Ollama REST payloads

use sdg_application::ports::generation::GenerationOptions;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: RequestOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestOptions {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str, options: &GenerationOptions) -> Self {
        Self {
            model,
            prompt,
            stream: false,
            options: RequestOptions {
                temperature: options.temperature,
                num_predict: options.max_tokens,
            },
        }
    }
}

/// Body of `GET /api/tags`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagEntry {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_body() {
        let options = GenerationOptions {
            temperature: 0.5,
            max_tokens: Some(512),
        };
        let body = serde_json::to_value(GenerateRequest::new("qwen3:8b", "hi", &options)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "qwen3:8b",
                "prompt": "hi",
                "stream": false,
                "options": {"temperature": 0.5, "num_predict": 512}
            })
        );
    }

    #[test]
    fn test_num_predict_bounded_by_default() {
        let body =
            serde_json::to_value(GenerateRequest::new("m", "p", &GenerationOptions::default()))
                .unwrap();
        assert_eq!(body["options"]["num_predict"], 20_000);

        let unbounded = GenerationOptions {
            max_tokens: None,
            ..GenerationOptions::default()
        };
        let body = serde_json::to_value(GenerateRequest::new("m", "p", &unbounded)).unwrap();
        assert!(body["options"].get("num_predict").is_none());
    }

    #[test]
    fn test_tags_response() {
        let tags: TagsResponse = serde_json::from_str(
            r#"{"models":[{"name":"qwen3:8b","size":1},{"name":"llama3:latest"}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = tags.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["qwen3:8b", "llama3:latest"]);

        let empty: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.models.is_empty());
    }
}
