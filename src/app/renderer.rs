// src/app/renderer.rs
//! セッションの状態から、JS 側がそのまま描けるスナップショット (`ViewState`) を組み立てる。
//!
//! DOM には触らないので、ネイティブのテストでも中身を確かめられる。

use std::collections::HashMap;

use serde::Serialize;

use crate::app::layout_calculator::{
    calculate_card_position, calculate_reading_position, calculate_slot_label_position,
};
use crate::components::{GamePhase, Placement, Preferences};
use crate::data::catalog::{CARD_BACK_IMAGE, SPREAD_SIZE};
use crate::data::i18n::{translations, Translations};
use crate::logic::presentation::{
    card_face, flip_tween, is_hidden, motion_tween, overlays, CardFace, CardFlags, Overlays,
    TweenSpec,
};
use crate::logic::session::ReadingSession;
use crate::narration::ledger::NarrationStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub unique_id: String,
    pub index: usize,
    pub name: String,
    pub is_reversed: bool,
    /// 選ばれていれば 0=過去, 1=現在, 2=未来
    pub slot: Option<usize>,
    pub is_selected: bool,
    pub is_flipped: bool,
    pub is_hovered: bool,
    pub is_hidden: bool,
    pub clickable: bool,
    pub placement: Placement,
    pub motion: TweenSpec,
    pub flip: TweenSpec,
    pub overlays: Overlays,
    pub face: CardFace,
    pub back_image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLabel {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

/// drawing 中の「カードを引く」ボタンまわり
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawPanel {
    pub button: &'static str,
    /// 次に引くのが過去・現在・未来のどれか
    pub step_label: &'static str,
    pub prompt: &'static str,
    pub enabled: bool,
}

/// reading 中にタップしたカードの解説
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusDetail {
    pub slot: usize,
    pub name: String,
    pub reversed_tag: Option<&'static str>,
    pub keywords: Vec<String>,
    pub description: Option<String>,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationView {
    pub status: &'static str,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub phase: GamePhase,
    pub rotation_offset: f64,
    pub cards: Vec<CardView>,
    pub show_intro_screen: bool,
    pub intro_card_back: &'static str,
    /// 画面上部の小さなタイトル (intro と reading 以外で出す)
    pub show_title: bool,
    pub draw_panel: Option<DrawPanel>,
    pub slot_labels: Vec<SlotLabel>,
    pub focused: Option<FocusDetail>,
    /// reading 中で、まだどのカードもタップしていない時の案内
    pub read_hint: Option<&'static str>,
    pub narration: NarrationView,
    pub preferences: Preferences,
    pub strings: &'static Translations,
    pub error: Option<String>,
}

/// 前の描画でカードがどうだったか
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rendered {
    selected: bool,
    flipped: bool,
}

/// 前の描画を覚えておいて、選ばれた瞬間・表になった瞬間だけ演出を出す。
/// 初めて描くカードはすでに選ばれていても演出しない。
#[derive(Debug, Default)]
pub struct Renderer {
    previous: HashMap<String, Rendered>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_view(&mut self, session: &ReadingSession) -> ViewState {
        let phase = session.phase();
        let prefs = session.preferences().clone();
        let strings = translations(prefs.language);
        let viewport = session.viewport();
        let deck = session.deck();
        let hover = session.hover();
        let previous = &self.previous;
        let mut rendered = HashMap::with_capacity(deck.len());

        let cards = deck
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let slot = session.selection_slot(&card.unique_id);
                let is_selected = slot.is_some();
                let is_flipped = phase.shows_faces();
                let hovered = hover.filter(|h| h.unique_id == card.unique_id);
                let before = previous.get(&card.unique_id);
                let flags = CardFlags {
                    is_selected,
                    is_flipped,
                    is_hovered: hovered.is_some(),
                    hover_progress: hovered.map_or(0.0, |h| h.progress),
                    just_selected: is_selected && before.is_some_and(|b| !b.selected),
                    just_flipped: is_flipped && before.is_some_and(|b| !b.flipped),
                };
                let placement = match slot {
                    Some(slot) => calculate_reading_position(slot, viewport),
                    None => calculate_card_position(
                        index,
                        deck.len(),
                        phase,
                        session.rotation_offset(),
                        viewport,
                    ),
                };
                let hidden = is_hidden(phase, is_selected);
                rendered.insert(
                    card.unique_id.clone(),
                    Rendered {
                        selected: is_selected,
                        flipped: is_flipped,
                    },
                );

                CardView {
                    unique_id: card.unique_id.clone(),
                    index,
                    name: card.display_name(prefs.language).to_string(),
                    is_reversed: card.is_reversed,
                    slot,
                    is_selected,
                    is_flipped: flags.is_flipped,
                    is_hovered: flags.is_hovered,
                    is_hidden: hidden,
                    clickable: is_selected && phase == GamePhase::Reading,
                    placement,
                    motion: motion_tween(&placement, &flags, prefs.draw_effect),
                    flip: flip_tween(&flags, prefs.draw_effect),
                    overlays: overlays(prefs.draw_effect, &flags),
                    face: card_face(card, session.image_failed(&card.unique_id)),
                    back_image: CARD_BACK_IMAGE,
                }
            })
            .collect();
        self.previous = rendered;

        let reading_ready = phase == GamePhase::Reading && session.selection().len() == SPREAD_SIZE;

        let draw_panel = (phase == GamePhase::Drawing).then(|| DrawPanel {
            button: strings.draw_card,
            step_label: strings.slot_label(session.draw_step()),
            prompt: strings.draw_prompt,
            enabled: session.selection().len() < SPREAD_SIZE,
        });

        let slot_labels = if reading_ready {
            (0..SPREAD_SIZE)
                .map(|slot| {
                    let (x, y) = calculate_slot_label_position(slot, viewport);
                    SlotLabel {
                        text: strings.slot_label(slot),
                        x,
                        y,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let focused = if reading_ready {
            session.focused().zip(session.focused_card()).map(|(slot, card)| FocusDetail {
                slot,
                name: card.display_name(prefs.language).to_string(),
                reversed_tag: card.is_reversed.then_some(strings.reversed),
                keywords: card.keywords().to_vec(),
                description: card.definition.card_description.clone(),
                meaning: card.meaning().to_string(),
            })
        } else {
            None
        };
        let read_hint = (reading_ready && focused.is_none()).then_some(strings.click_to_read);

        let narration = match session.narration().status() {
            NarrationStatus::Idle => NarrationView { status: "idle", text: None },
            NarrationStatus::Pending => NarrationView { status: "pending", text: None },
            NarrationStatus::Ready(text) => NarrationView {
                status: "ready",
                text: Some(text.clone()),
            },
        };

        ViewState {
            phase,
            rotation_offset: session.rotation_offset(),
            cards,
            show_intro_screen: phase == GamePhase::Intro,
            intro_card_back: CARD_BACK_IMAGE,
            show_title: !matches!(phase, GamePhase::Intro | GamePhase::Reading),
            draw_panel,
            slot_labels,
            focused,
            read_hint,
            narration,
            preferences: prefs,
            strings,
            error: session
                .catalog_error()
                .map(|detail| format!("{} ({})", strings.error, detail)),
        }
    }
}
