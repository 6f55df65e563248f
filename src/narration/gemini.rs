// src/narration/gemini.rs
//! Gemini の `generateContent` を fetch で叩く `TextGenerator` 実装。
//!
//! リクエスト/レスポンスの JSON は serde の構造体で組み立てて読む。
//! ブラウザの外 (ネイティブのテスト) では fetch できないので、
//! JSON の組み立てと読み取りだけを純粋な関数に分けてあるよ。

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::NarrationConfig;
use crate::error::TarotError;
use crate::narration::TextGenerator;

// --- リクエスト ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

// --- レスポンス (使うところだけ) ---

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// 送る JSON。考える時間 (thinking) は 0 にして、すぐ返してもらう。
pub fn request_body(prompt: &str) -> Result<String, TarotError> {
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            thinking_config: ThinkingConfig { thinking_budget: 0 },
        },
    };
    Ok(serde_json::to_string(&request)?)
}

/// 最初の候補のテキストを全部つなげて返す。候補がなければ空文字。
pub fn extract_text(body: &str) -> Result<String, TarotError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

pub struct GeminiGenerator {
    url: String,
}

impl GeminiGenerator {
    pub fn new(config: &NarrationConfig) -> Self {
        Self {
            url: config.generate_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, api_key: &str, prompt: &str) -> Result<String, TarotError> {
        let body = request_body(prompt)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;
        request.headers().set("x-goog-api-key", api_key)?;

        let window = web_sys::window()
            .ok_or_else(|| TarotError::Browser("no global window".to_string()))?;
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TarotError::Request(format!("{:?}", e)))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|_| TarotError::MalformedResponse("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(TarotError::Http {
                status: response.status(),
            });
        }

        let text_value = JsFuture::from(response.text()?).await?;
        let text = text_value
            .as_string()
            .ok_or_else(|| TarotError::MalformedResponse("body is not text".to_string()))?;
        extract_text(&text)
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, TarotError>> {
        self.post(api_key, prompt).boxed_local()
    }
}
