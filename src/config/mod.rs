// src/config/mod.rs
//! 定数と設定値をまとめたモジュール。

pub mod layout;
pub mod narration;
pub mod timing;

pub use narration::NarrationConfig;
