// src/components/preferences.rs
//! 設定パネルで選べるもの。ブラウザの中だけで持っていて、保存はしない。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    White,
    Black,
    Starry,
}

/// カードを引いた瞬間の演出の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawEffect {
    Resonance,
    Stardust,
    Abyss,
    Thread,
}

pub const ALL_DRAW_EFFECTS: [DrawEffect; 4] = [
    DrawEffect::Resonance,
    DrawEffect::Stardust,
    DrawEffect::Abyss,
    DrawEffect::Thread,
];

impl Language {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl BackgroundMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "white" => Some(BackgroundMode::White),
            "black" => Some(BackgroundMode::Black),
            "starry" => Some(BackgroundMode::Starry),
            _ => None,
        }
    }
}

impl DrawEffect {
    pub fn parse(value: &str) -> Option<Self> {
        ALL_DRAW_EFFECTS
            .iter()
            .copied()
            .find(|effect| effect.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrawEffect::Resonance => "resonance",
            DrawEffect::Stardust => "stardust",
            DrawEffect::Abyss => "abyss",
            DrawEffect::Thread => "thread",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: Language,
    pub draw_effect: DrawEffect,
    pub background: BackgroundMode,
    pub settings_open: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        // 中国語・白背景・共鳴エフェクトが初期値
        Self {
            language: Language::Zh,
            draw_effect: DrawEffect::Resonance,
            background: BackgroundMode::White,
            settings_open: false,
        }
    }
}
