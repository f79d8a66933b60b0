//! Groq adapter (chat completions).
//!
//! Talks to Groq's OpenAI-compatible `chat/completions` endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use friday_core::{
    config::Config,
    domain::Turn,
    errors::Error,
    model::CompletionClient,
    Result,
};

#[derive(Clone, Debug)]
pub struct GroqClient {
    api_key: String,
    api_base: String,
    model: String,
    http: reqwest::Client,
}

impl GroqClient {
    pub fn new(cfg: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(cfg.completion_timeout)
            .build()
            .expect("reqwest client build");
        Self {
            api_key: cfg.groq_api_key.clone(),
            api_base: cfg.groq_api_base.clone(),
            model: cfg.groq_model.clone(),
            http,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn first_choice_content(resp: ChatResponse) -> Result<String> {
    let content = resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(Error::Completion(
            "groq returned an empty completion".to_string(),
        ));
    }

    Ok(content)
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, turns: &[Turn]) -> Result<String> {
        let req = ChatRequest {
            model: &self.model,
            messages: turns,
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| Error::Completion(format!("groq request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "groq completion failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| Error::Completion(format!("groq json error: {e}")))?;

        first_choice_content(parsed)
    }
}

#[cfg(test)]
mod tests {
    use friday_core::domain::Role;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_to_wire_format() {
        let turns = vec![
            Turn::new(Role::System, "persona"),
            Turn::new(Role::User, "hello"),
        ];
        let req = ChatRequest {
            model: "llama-3.1-8b-instant",
            messages: &turns,
        };

        let got = serde_json::to_value(&req).unwrap();
        let want = json!({
            "model": "llama-3.1-8b-instant",
            "messages": [
                {"role": "system", "content": "persona"},
                {"role": "user", "content": "hello"},
            ],
        });
        assert_eq!(got, want);
    }

    #[test]
    fn response_yields_first_choice_content() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "hi there"}},
                {"message": {"role": "assistant", "content": "ignored"}},
            ],
        }))
        .unwrap();

        assert_eq!(first_choice_content(resp).unwrap(), "hi there");
    }

    #[test]
    fn missing_choices_is_an_error() {
        let resp: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(first_choice_content(resp).is_err());

        let resp: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert!(first_choice_content(resp).is_err());
    }

    #[test]
    fn null_or_blank_content_is_an_error() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}],
        }))
        .unwrap();
        assert!(first_choice_content(resp).is_err());

        let resp: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "   "}}],
        }))
        .unwrap();
        assert!(first_choice_content(resp).is_err());
    }
}
