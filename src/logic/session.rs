// src/logic/session.rs
//! 1回分の占いの状態をまるごと持つ構造体と、そのフェーズ遷移。
//!
//! 画面や DOM には一切触らない。ユーザー操作 (start / draw / reset / focus) と、
//! フレームループから来る時間の経過 (systems モジュール) だけで状態が変わるよ。

use std::collections::HashSet;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{CardDefinition, DeckCard, GamePhase, Preferences, Viewport};
use crate::config::timing::{
    INITIAL_SHUFFLE_DELAY_MS, READING_DELAY_MS, RESET_SHUFFLE_DELAY_MS, REVEAL_DELAY_MS,
};
use crate::data::catalog::SPREAD_SIZE;
use crate::error::TarotError;
use crate::logic::deck::{build_deck, draw_next, shuffle};
use crate::logic::scheduler::{ScheduledAction, Scheduler};
use crate::narration::ledger::{selection_key, NarrationLedger};

/// 解説を1回リクエストするのに必要なものをまとめたもの。
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationTicket {
    pub key: String,
    pub past: DeckCard,
    pub present: DeckCard,
    pub future: DeckCard,
}

/// ホバー中のカードと、その進み具合 (0〜1)
#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    pub unique_id: String,
    pub progress: f64,
}

pub struct ReadingSession {
    phase: GamePhase,
    deck: Vec<DeckCard>,
    selection: Vec<DeckCard>,
    focused: Option<usize>,
    draw_step: usize,
    pub(crate) rotation_offset: f64,
    pub(crate) scheduler: Scheduler,
    /// やり直すたびに 1 増える。解説の台帳のキーに使う。
    cycle: u32,
    viewport: Viewport,
    preferences: Preferences,
    hover: Option<HoverState>,
    failed_images: HashSet<String>,
    narration: NarrationLedger,
    catalog_error: Option<String>,
    torn_down: bool,
    rng: StdRng,
}

impl ReadingSession {
    /// カタログの読み込み結果からセッションを作る。
    /// 読み込みに失敗していたら `Error` フェーズから始まる (そこから先へは進めない)。
    pub fn new(catalog: Result<Vec<CardDefinition>, TarotError>, mut rng: StdRng) -> Self {
        let (phase, deck, catalog_error) = match catalog {
            Ok(definitions) => (GamePhase::Intro, build_deck(&definitions, &mut rng), None),
            Err(e) => {
                error!("Card catalog failed to load: {}", e);
                (GamePhase::Error, Vec::new(), Some(e.to_string()))
            }
        };
        Self {
            phase,
            deck,
            selection: Vec::new(),
            focused: None,
            draw_step: 0,
            rotation_offset: 0.0,
            scheduler: Scheduler::new(),
            cycle: 0,
            viewport: Viewport::default(),
            preferences: Preferences::default(),
            hover: None,
            failed_images: HashSet::new(),
            narration: NarrationLedger::default(),
            catalog_error,
            torn_down: false,
            rng,
        }
    }

    /// OS の乱数で初期化する (ブラウザでは getrandom の js バックエンド)
    pub fn from_entropy(catalog: Result<Vec<CardDefinition>, TarotError>) -> Self {
        Self::new(catalog, StdRng::from_entropy())
    }

    pub fn with_seed(catalog: Result<Vec<CardDefinition>, TarotError>, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }

    // --- 読み取り用 ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn deck(&self) -> &[DeckCard] {
        &self.deck
    }

    pub fn selection(&self) -> &[DeckCard] {
        &self.selection
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_card(&self) -> Option<&DeckCard> {
        self.focused.and_then(|slot| self.selection.get(slot))
    }

    pub fn draw_step(&self) -> usize {
        self.draw_step
    }

    pub fn rotation_offset(&self) -> f64 {
        self.rotation_offset
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn narration(&self) -> &NarrationLedger {
        &self.narration
    }

    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// 選択の中でのスロット番号 (0=過去, 1=現在, 2=未来)
    pub fn selection_slot(&self, unique_id: &str) -> Option<usize> {
        self.selection.iter().position(|card| card.unique_id == unique_id)
    }

    pub fn image_failed(&self, unique_id: &str) -> bool {
        self.failed_images.contains(unique_id)
    }

    /// フレームループを回し続ける必要があるか。
    /// 回転中のフェーズか、まだ発火していない遷移が残っている間は true。
    pub fn needs_frames(&self) -> bool {
        !self.torn_down && (self.phase.is_spinning() || !self.scheduler.is_idle())
    }

    // --- ユーザー操作 ---

    /// intro → shuffling。2.5秒後にシャッフルして drawing へ。
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.torn_down || self.phase != GamePhase::Intro {
            debug!("start ignored in phase {}", self.phase.as_str());
            return false;
        }
        info!("Reading started");
        self.phase = GamePhase::Shuffling;
        self.scheduler
            .schedule(now_ms, INITIAL_SHUFFLE_DELAY_MS, ScheduledAction::FinishShuffle);
        true
    }

    /// drawing 中に1枚引く。3枚そろったら revealing と reading を同時に予約する。
    pub fn draw(&mut self, now_ms: f64) -> bool {
        if self.torn_down || self.phase != GamePhase::Drawing || self.selection.len() >= SPREAD_SIZE {
            debug!(
                "draw ignored in phase {} with {} selected",
                self.phase.as_str(),
                self.selection.len()
            );
            return false;
        }
        let next = draw_next(&self.deck, &self.selection, &mut self.rng);
        if next.len() == self.selection.len() {
            return false;
        }
        self.selection = next;
        if let Some(card) = self.selection.last() {
            info!(
                "Drew {} ({}) for slot {}",
                card.definition.name_en,
                card.orientation_label(),
                self.selection.len() - 1
            );
        }

        if self.selection.len() == SPREAD_SIZE {
            self.scheduler.schedule(now_ms, REVEAL_DELAY_MS, ScheduledAction::Reveal);
            self.scheduler
                .schedule(now_ms, READING_DELAY_MS, ScheduledAction::BeginReading);
        } else {
            self.draw_step += 1;
        }
        true
    }

    /// reading → shuffling。選択とフォーカスはすぐ消して、1.5秒後に drawing へ。
    pub fn reset(&mut self, now_ms: f64) -> bool {
        if self.torn_down || self.phase != GamePhase::Reading {
            debug!("reset ignored in phase {}", self.phase.as_str());
            return false;
        }
        info!("Reading reset");
        self.selection.clear();
        self.focused = None;
        self.hover = None;
        self.narration.clear();
        self.cycle += 1;
        self.phase = GamePhase::Shuffling;
        self.scheduler.cancel_all();
        self.scheduler
            .schedule(now_ms, RESET_SHUFFLE_DELAY_MS, ScheduledAction::FinishShuffle);
        true
    }

    /// reading 中に選んだカードをタップして、その解説を表示する。
    pub fn focus(&mut self, slot: usize) -> bool {
        if self.phase != GamePhase::Reading || slot >= self.selection.len() {
            return false;
        }
        self.focused = Some(slot);
        true
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_hover(&mut self, unique_id: Option<String>, progress: f64) {
        self.hover = unique_id.map(|unique_id| HoverState {
            unique_id,
            progress: progress.clamp(0.0, 1.0),
        });
    }

    /// カードの画像が読み込めなかったことを記録する (そのカードだけ代わりの表示になる)
    pub fn mark_image_failed(&mut self, unique_id: &str) -> bool {
        if !self.deck.iter().any(|card| card.unique_id == unique_id) {
            return false;
        }
        self.failed_images.insert(unique_id.to_string())
    }

    /// 破棄する。予約済みの遷移は全部キャンセルして、以後の操作はすべて無視する。
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        self.torn_down = true;
    }

    // --- 時間で進む遷移 (systems::ScheduleSystem から呼ばれる) ---

    pub(crate) fn apply_scheduled(&mut self, action: ScheduledAction) {
        if self.torn_down {
            return;
        }
        match action {
            ScheduledAction::FinishShuffle => {
                shuffle(&mut self.deck, &mut self.rng);
                self.phase = GamePhase::Drawing;
                self.draw_step = 0;
                debug!("Deck reshuffled, drawing begins");
            }
            ScheduledAction::Reveal => {
                self.phase = GamePhase::Revealing;
            }
            ScheduledAction::BeginReading => {
                self.phase = GamePhase::Reading;
                info!("Reading phase entered");
            }
        }
    }

    // --- 解説 ---

    /// 3枚そろっていて、どれかにフォーカスしているなら、解説のリクエストを1回分だけ発行する。
    /// 同じ選択に対してはもう発行しない。
    pub fn request_narration(&mut self) -> Option<NarrationTicket> {
        if self.phase != GamePhase::Reading || self.focused.is_none() {
            return None;
        }
        let [past, present, future] = match self.selection.as_slice() {
            [a, b, c] => [a.clone(), b.clone(), c.clone()],
            _ => return None,
        };
        let key = selection_key(self.cycle, &self.selection);
        if !self.narration.begin(&key) {
            return None;
        }
        Some(NarrationTicket {
            key,
            past,
            present,
            future,
        })
    }

    pub fn finish_narration(&mut self, key: &str, text: String) -> bool {
        if self.torn_down {
            return false;
        }
        self.narration.complete(key, text)
    }
}
