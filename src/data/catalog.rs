// src/data/catalog.rs
//! 大アルカナ22枚のカタログ。`assets/catalog.json` をバイナリに埋め込んで、起動時に読み込むよ。

use crate::components::card::CardDefinition;
use crate::error::TarotError;

const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// intro 画面に出すカードの裏面
pub const CARD_BACK_IMAGE: &str = "cards/back.jpg";

/// 1回の占いで引く枚数。これより少ないカタログでは占いが成り立たない。
pub const SPREAD_SIZE: usize = 3;

/// 埋め込みのカタログを読み込む。
pub fn load_catalog() -> Result<Vec<CardDefinition>, TarotError> {
    parse_catalog(CATALOG_JSON)
}

/// JSON 文字列からカタログを作る。壊れていたり枚数が足りなかったらエラー。
pub fn parse_catalog(json: &str) -> Result<Vec<CardDefinition>, TarotError> {
    let cards: Vec<CardDefinition> =
        serde_json::from_str(json).map_err(|e| TarotError::Catalog(e.to_string()))?;
    if cards.len() < SPREAD_SIZE {
        return Err(TarotError::Catalog(format!(
            "catalog has {} cards, a reading needs {}",
            cards.len(),
            SPREAD_SIZE
        )));
    }
    Ok(cards)
}
