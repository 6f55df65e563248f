// src/data/i18n.rs
//! 画面に出す文言。中国語と英語の2種類。

use serde::Serialize;

use crate::components::preferences::Language;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start: &'static str,
    pub draw_card: &'static str,
    pub draw_prompt: &'static str,
    pub past: &'static str,
    pub present: &'static str,
    pub future: &'static str,
    pub click_to_read: &'static str,
    pub new_reading: &'static str,
    pub interpretation: &'static str,
    pub reversed: &'static str,
    pub settings: &'static str,
    pub language: &'static str,
    pub background: &'static str,
    pub bg_white: &'static str,
    pub bg_black: &'static str,
    pub bg_starry: &'static str,
    pub draw_effect: &'static str,
    pub effect_resonance: &'static str,
    pub effect_stardust: &'static str,
    pub effect_abyss: &'static str,
    pub effect_thread: &'static str,
    pub error: &'static str,
}

const ZH: Translations = Translations {
    title: "灵光塔罗",
    subtitle: "静下心来，想着你的问题。三张牌将揭示你的过去、现在与未来。",
    start: "开始占卜",
    draw_card: "抽一张牌",
    draw_prompt: "跟随直觉，点击抽牌",
    past: "过去",
    present: "现在",
    future: "未来",
    click_to_read: "点击卡牌查看解读",
    new_reading: "重新占卜",
    interpretation: "牌面描述",
    reversed: "· 逆位",
    settings: "设置",
    language: "语言",
    background: "背景",
    bg_white: "纯白",
    bg_black: "暗夜",
    bg_starry: "星空",
    draw_effect: "抽牌特效",
    effect_resonance: "灵光共鸣",
    effect_stardust: "星尘凝聚",
    effect_abyss: "深渊牵引",
    effect_thread: "命运之线",
    error: "牌组暂时无法加载",
};

const EN: Translations = Translations {
    title: "LUMINA TAROT",
    subtitle: "Quiet your mind and hold your question. Three cards will reveal your past, present and future.",
    start: "BEGIN",
    draw_card: "DRAW A CARD",
    draw_prompt: "Follow your intuition",
    past: "Past",
    present: "Present",
    future: "Future",
    click_to_read: "Tap a card to read",
    new_reading: "New Reading",
    interpretation: "Card Imagery",
    reversed: "· Reversed",
    settings: "Settings",
    language: "Language",
    background: "Background",
    bg_white: "White",
    bg_black: "Night",
    bg_starry: "Starry",
    draw_effect: "Draw Effect",
    effect_resonance: "Ethereal Resonance",
    effect_stardust: "Stardust Materialization",
    effect_abyss: "Abyssal Pull",
    effect_thread: "Thread of Fate",
    error: "The deck could not be loaded",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Zh => &ZH,
        Language::En => &EN,
    }
}

impl Translations {
    /// 0 = 過去, 1 = 現在, それ以外 = 未来
    pub fn slot_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => self.past,
            1 => self.present,
            _ => self.future,
        }
    }
}
