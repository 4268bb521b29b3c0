//! Blocking client for OpenAI-compatible chat completion endpoints.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::chat::message::ChatMessage;

/// Completion calls block the REPL, so cap them well below forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Wire shape of a completion request.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Wire shape of a completion response, reduced to the fields we read.
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Chat completion client bound to one endpoint, key, and model.
pub struct ChatClient {
    agent: Agent,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        Self {
            agent: config.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Send the full history and return the assistant's reply text.
    pub fn complete(&self, history: &[ChatMessage]) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: history,
        };
        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&request)
            .with_context(|| format!("Chat completion request to {} failed", self.endpoint))?;
        let decoded: CompletionResponse = response
            .body_mut()
            .read_json()
            .context("Failed to decode chat completion response")?;
        let Some(choice) = decoded.choices.into_iter().next() else {
            bail!("Chat completion response contained no choices");
        };
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_first_choice_content() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "Hello there." },
                    "finish_reason": "stop"
                },
                {
                    "index": 1,
                    "message": { "role": "assistant", "content": "Second opinion." },
                    "finish_reason": "stop"
                }
            ]
        }"#;
        let decoded: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.choices[0].message.content, "Hello there.");
    }

    #[test]
    fn test_request_body_matches_wire_shape() {
        let history = vec![
            ChatMessage::system("Be terse."),
            ChatMessage::user("hi"),
        ];
        let request = CompletionRequest {
            model: "gpt-4o-mini",
            messages: &history,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = ChatClient::new("https://api.openai.com/v1/", "sk-test", "gpt-4o-mini");
        assert_eq!(client.endpoint, "https://api.openai.com/v1/chat/completions");
    }
}
