// src/logic/scheduler.rs
//! 「○秒後にフェーズを進める」を、タイマーではなく締め切り時刻のリストで持つよ。
//!
//! フレームループが現在時刻を渡して `take_due` を呼ぶと、時刻を過ぎたものだけが取り出される。
//! `cancel_all` したあとは何も発火しない。

/// 時間が来たら実行するフェーズ遷移の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// デッキをシャッフルし直して drawing へ
    FinishShuffle,
    /// revealing へ
    Reveal,
    /// reading へ
    BeginReading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTransition {
    pub due_at_ms: f64,
    pub action: ScheduledAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledTransition>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: ScheduledAction) {
        self.pending.push(ScheduledTransition {
            due_at_ms: now_ms + delay_ms,
            action,
        });
    }

    /// 締め切りを過ぎたものを、締め切りの早い順に取り出す。
    /// 同じ締め切りなら登録した順。
    pub fn take_due(&mut self, now_ms: f64) -> Vec<ScheduledAction> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|entry| entry.due_at_ms <= now_ms);
        self.pending = rest;
        // sort_by は安定ソートなので登録順が保たれる
        due.sort_by(|a, b| a.due_at_ms.total_cmp(&b.due_at_ms));
        due.into_iter().map(|entry| entry.action).collect()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[ScheduledTransition] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_early() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 2500.0, ScheduledAction::FinishShuffle);
        assert!(scheduler.take_due(2499.9).is_empty());
        assert_eq!(scheduler.take_due(2500.0), vec![ScheduledAction::FinishShuffle]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn late_frame_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(100.0, 2500.0, ScheduledAction::BeginReading);
        scheduler.schedule(100.0, 1000.0, ScheduledAction::Reveal);
        // タブが裏に回っていて、次のフレームがかなり遅れて来た場合
        let fired = scheduler.take_due(10_000.0);
        assert_eq!(fired, vec![ScheduledAction::Reveal, ScheduledAction::BeginReading]);
    }

    #[test]
    fn partial_drain_keeps_the_rest() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 1000.0, ScheduledAction::Reveal);
        scheduler.schedule(0.0, 2500.0, ScheduledAction::BeginReading);
        assert_eq!(scheduler.take_due(1500.0), vec![ScheduledAction::Reveal]);
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].due_at_ms, 2500.0);
    }

    #[test]
    fn cancel_all_drops_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 10.0, ScheduledAction::Reveal);
        scheduler.cancel_all();
        assert!(scheduler.take_due(1e9).is_empty());
    }
}
