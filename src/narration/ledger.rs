// src/narration/ledger.rs
//! 同じ選択 (3枚) に対して、解説のリクエストを二重に飛ばさないための台帳。
//!
//! キーは「何回目の占いか」と3枚の unique_id から作る。やり直すと回数が進むので、
//! 前の占いの遅れて返ってきた返事はキーが合わずに捨てられる。

use crate::components::card::DeckCard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationStatus {
    Idle,
    Pending,
    Ready(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationLedger {
    key: Option<String>,
    status: NarrationStatus,
}

impl Default for NarrationLedger {
    fn default() -> Self {
        Self {
            key: None,
            status: NarrationStatus::Idle,
        }
    }
}

/// 選択のキーを作る
pub fn selection_key(cycle: u32, selection: &[DeckCard]) -> String {
    let ids: Vec<&str> = selection.iter().map(|card| card.unique_id.as_str()).collect();
    format!("{}:{}", cycle, ids.join(","))
}

impl NarrationLedger {
    /// リクエストを始めてよければ true。同じキーで送信中か完了済みなら false。
    pub fn begin(&mut self, key: &str) -> bool {
        if self.key.as_deref() == Some(key) && self.status != NarrationStatus::Idle {
            return false;
        }
        self.key = Some(key.to_string());
        self.status = NarrationStatus::Pending;
        true
    }

    /// 返事を記録する。キーが今のものと違えば (やり直し済みなら) 捨てて false。
    pub fn complete(&mut self, key: &str, text: String) -> bool {
        if self.key.as_deref() != Some(key) || self.status != NarrationStatus::Pending {
            return false;
        }
        self.status = NarrationStatus::Ready(text);
        true
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.status = NarrationStatus::Idle;
    }

    pub fn status(&self) -> &NarrationStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == NarrationStatus::Pending
    }

    pub fn text(&self) -> Option<&str> {
        match &self.status {
            NarrationStatus::Ready(text) => Some(text),
            _ => None,
        }
    }
}
