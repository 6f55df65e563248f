// src/data/mod.rs
//! 読み取り専用の静的データ (カードのカタログと画面の文言)。

pub mod catalog;
pub mod i18n;
