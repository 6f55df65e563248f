// src/config/narration.rs
//! 文章生成 API の接続設定。

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_WORD_LIMIT: u32 = 250;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// モデル名を除いたエンドポイントのベース URL
    pub endpoint: String,
    pub model: String,
    /// プロンプトに書く「何語以内で」のヒント
    pub word_limit: u32,
    /// None か空文字なら API は呼ばない
    pub api_key: Option<String>,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            word_limit: DEFAULT_WORD_LIMIT,
            api_key: None,
        }
    }
}

impl NarrationConfig {
    /// ビルド時の `API_KEY` 環境変数を拾う。ブラウザには実行時の環境変数がないからね。
    pub fn from_env() -> Self {
        Self {
            api_key: option_env!("API_KEY").map(str::to_string),
            ..Self::default()
        }
    }

    /// 明示的に渡されたキーがあればそれを優先する。
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }

    /// 空白だけのキーは「未設定」とみなす。
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
