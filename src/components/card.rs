// src/components/card.rs

// serde を使う宣言！カタログ (JSON) から読み込んだり、JS に状態を渡したりするのに使うよ。
use serde::{Deserialize, Serialize};

use crate::components::preferences::Language;

/// カタログに載っているカード1枚分の静的なデータだよ！🃏
///
/// 一度読み込んだら二度と書き換えない。JSON のキーは camelCase。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: u32,
    /// 中国語の名前
    pub name: String,
    /// 英語の名前 (プロンプトにもこっちを使う)
    pub name_en: String,
    pub image: String,
    pub keywords_upright: Vec<String>,
    #[serde(default)]
    pub keywords_reversed: Vec<String>,
    #[serde(default)]
    pub card_description: Option<String>,
    pub meaning_upright: String,
    pub meaning_reversed: String,
}

/// デッキに入っている1枚。カタログのデータに、デッキ内での ID と向きがくっついたもの。
///
/// - `unique_id`: デッキを作った時に振られる。同じデッキの中では使い回さない。
/// - `is_reversed`: デッキを作った時にコイントスで決まって、そのあとは変わらない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    #[serde(flatten)]
    pub definition: CardDefinition,
    pub unique_id: String,
    pub is_reversed: bool,
}

impl DeckCard {
    pub fn new(definition: CardDefinition, index: usize, is_reversed: bool) -> Self {
        Self {
            definition,
            unique_id: format!("deck-{}", index),
            is_reversed,
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Zh => &self.definition.name,
            Language::En => &self.definition.name_en,
        }
    }

    /// 向きに合ったキーワード
    pub fn keywords(&self) -> &[String] {
        if self.is_reversed {
            &self.definition.keywords_reversed
        } else {
            &self.definition.keywords_upright
        }
    }

    /// 向きに合った意味の本文
    pub fn meaning(&self) -> &str {
        if self.is_reversed {
            &self.definition.meaning_reversed
        } else {
            &self.definition.meaning_upright
        }
    }

    /// プロンプト用の向きの表記
    pub fn orientation_label(&self) -> &'static str {
        if self.is_reversed {
            "Reversed"
        } else {
            "Upright"
        }
    }
}
