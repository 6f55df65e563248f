// src/error.rs
//! クレート全体で使うエラー型だよ。
//! JS に返すときは `JsValue` に変換する。

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum TarotError {
    #[error("API key is not configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(String),
    #[error("service answered with HTTP {status}")]
    Http { status: u16 },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("card catalog unavailable: {0}")]
    Catalog(String),
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for TarotError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedResponse(value.to_string())
    }
}

impl From<JsValue> for TarotError {
    fn from(value: JsValue) -> Self {
        // JS 側の例外はメッセージだけ取り出せれば十分
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Browser(message)
    }
}

impl From<TarotError> for JsValue {
    fn from(value: TarotError) -> Self {
        JsValue::from(js_sys::Error::new(&value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status() {
        let err = TarotError::Http { status: 429 };
        assert_eq!(err.to_string(), "service answered with HTTP 429");
    }

    #[test]
    fn serde_errors_become_malformed_response() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TarotError = parse.into();
        assert!(matches!(err, TarotError::MalformedResponse(_)));
    }
}
