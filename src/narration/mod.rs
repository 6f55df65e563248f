// src/narration/mod.rs
//! 引いた3枚から「過去・現在・未来」の解説文を作ってもらうクライアント。
//!
//! 実際の通信は `TextGenerator` トレイトの向こう側に隠してあるので、
//! テストでは偽物の生成器を差し込めるよ。失敗しても例外は投げず、決まった文言を返す。

pub mod gemini;
pub mod ledger;

use futures::future::LocalBoxFuture;
use log::{error, warn};

use crate::components::card::DeckCard;
use crate::config::NarrationConfig;
use crate::error::TarotError;

pub use gemini::GeminiGenerator;

pub const MISSING_KEY_TEXT: &str = "The stars are cloudy... (Please configure API_KEY)";
pub const DISRUPTED_TEXT: &str =
    "The connection to the ether is disrupted. Please try again later.";
pub const SILENT_TEXT: &str = "The spirits are silent.";

/// プロンプトを渡すと文章が返ってくるもの。
/// ブラウザの fetch は Send じゃないので LocalBoxFuture を使う。
pub trait TextGenerator {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, TarotError>>;
}

/// 3枚のカードからプロンプトを組み立てる
pub fn build_prompt(past: &DeckCard, present: &DeckCard, future: &DeckCard, word_limit: u32) -> String {
    let line = |n: usize, label: &str, card: &DeckCard| {
        format!(
            "{}. {}: {} ({})",
            n,
            label,
            card.definition.name_en,
            card.orientation_label()
        )
    };
    [
        "You are a mystical, wise, and empathetic Tarot Reader.".to_string(),
        "Perform a \"Past, Present, Future\" reading based on these three cards.".to_string(),
        String::new(),
        line(1, "Past", past),
        line(2, "Present", present),
        line(3, "Future", future),
        String::new(),
        "Provide a cohesive narrative that weaves these three cards together.".to_string(),
        "Focus on the journey from the past, the current energy, and the potential outcome."
            .to_string(),
        "Keep the tone mysterious but helpful. Use markdown formatting.".to_string(),
        format!("Limit response to {} words.", word_limit),
    ]
    .join("\n")
}

pub struct NarrationClient<G: TextGenerator> {
    config: NarrationConfig,
    generator: G,
}

impl<G: TextGenerator> NarrationClient<G> {
    pub fn new(config: NarrationConfig, generator: G) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// 解説文を1回だけ取りに行く。リトライはしない。
    /// 返り値は常に表示できる文字列 (失敗時は決まった文言)。
    pub async fn narrate(&self, past: &DeckCard, present: &DeckCard, future: &DeckCard) -> String {
        let api_key = match self.config.credential() {
            Some(key) => key,
            None => {
                warn!("{}", TarotError::MissingCredential);
                return MISSING_KEY_TEXT.to_string();
            }
        };

        let prompt = build_prompt(past, present, future, self.config.word_limit);
        match self.generator.generate(api_key, &prompt).await {
            Ok(text) if text.trim().is_empty() => SILENT_TEXT.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("Narration request failed: {}", e);
                DISRUPTED_TEXT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::load_catalog;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    /// 受け取ったプロンプトを覚えておいて、決まった結果を返す偽物
    struct RecordingGenerator {
        reply: Result<String, TarotError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl RecordingGenerator {
        fn replying(reply: Result<String, TarotError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for RecordingGenerator {
        fn generate<'a>(
            &'a self,
            api_key: &'a str,
            prompt: &'a str,
        ) -> LocalBoxFuture<'a, Result<String, TarotError>> {
            self.calls
                .borrow_mut()
                .push((api_key.to_string(), prompt.to_string()));
            let reply = self.reply.clone();
            async move { reply }.boxed_local()
        }
    }

    fn three_cards() -> (DeckCard, DeckCard, DeckCard) {
        let catalog = load_catalog().unwrap();
        (
            DeckCard::new(catalog[0].clone(), 0, false),
            DeckCard::new(catalog[13].clone(), 13, true),
            DeckCard::new(catalog[21].clone(), 21, false),
        )
    }

    fn client(key: Option<&str>, reply: Result<String, TarotError>) -> NarrationClient<RecordingGenerator> {
        let config = NarrationConfig::default().with_api_key(key.map(str::to_string));
        NarrationClient::new(config, RecordingGenerator::replying(reply))
    }

    #[test]
    fn prompt_lists_cards_in_order() {
        let (past, present, future) = three_cards();
        let prompt = build_prompt(&past, &present, &future, 250);
        assert!(prompt.contains("1. Past: The Fool (Upright)"));
        assert!(prompt.contains("2. Present: Death (Reversed)"));
        assert!(prompt.contains("3. Future: The World (Upright)"));
        assert!(prompt.contains("Use markdown formatting."));
        assert!(prompt.ends_with("Limit response to 250 words."));
    }

    #[test]
    fn missing_key_skips_the_transport() {
        let (past, present, future) = three_cards();
        let client = client(None, Ok("unused".into()));
        let text = block_on(client.narrate(&past, &present, &future));
        assert_eq!(text, MISSING_KEY_TEXT);
        assert!(client.generator.calls.borrow().is_empty());
    }

    #[test]
    fn reply_text_is_passed_through() {
        let (past, present, future) = three_cards();
        let client = client(Some("secret"), Ok("## The journey".into()));
        let text = block_on(client.narrate(&past, &present, &future));
        assert_eq!(text, "## The journey");
        let calls = client.generator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "secret");
        assert!(calls[0].1.contains("The Fool"));
    }

    #[test]
    fn empty_reply_becomes_silence() {
        let (past, present, future) = three_cards();
        let client = client(Some("secret"), Ok("  \n".into()));
        assert_eq!(block_on(client.narrate(&past, &present, &future)), SILENT_TEXT);
    }

    #[test]
    fn transport_error_becomes_fixed_message() {
        let (past, present, future) = three_cards();
        let client = client(Some("secret"), Err(TarotError::Http { status: 503 }));
        assert_eq!(block_on(client.narrate(&past, &present, &future)), DISRUPTED_TEXT);
    }
}
