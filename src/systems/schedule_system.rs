// src/systems/schedule_system.rs

use log::debug;

use crate::logic::session::ReadingSession;
use crate::systems::{FrameContext, System};

/// 締め切りを過ぎた遷移を取り出して、順番にセッションへ適用するシステム。⏰
///
/// 裏タブなどでフレームが大きく遅れても、締め切りの早い順に全部発火する。
pub struct ScheduleSystem;

impl System for ScheduleSystem {
    fn run(&mut self, session: &mut ReadingSession, frame: FrameContext) {
        let due = session.scheduler.take_due(frame.now_ms);
        for action in due {
            debug!("ScheduleSystem: firing {:?} at {:.0}ms", action, frame.now_ms);
            session.apply_scheduled(action);
        }
    }
}
