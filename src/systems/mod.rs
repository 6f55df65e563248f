// src/systems/mod.rs
//! フレームループから毎フレーム呼ばれるシステムたち。
//!
//! 1つのシステムは1つの関心事だけを見る。`FrameDriver` が決まった順番で全部回すよ。

pub mod rotation_system;
pub mod schedule_system;

use crate::logic::session::ReadingSession;

pub use rotation_system::RotationSystem;
pub use schedule_system::ScheduleSystem;

/// 1フレーム分の情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// `performance.now()` のミリ秒
    pub now_ms: f64,
}

/// System（システム）トレイトだよ！
///
/// `run` はフレームループから毎フレーム呼ばれて、セッションの状態を時間に合わせて進める。
pub trait System {
    fn run(&mut self, session: &mut ReadingSession, frame: FrameContext);
}

/// システムを登録順に回すもの。
pub struct FrameDriver {
    systems: Vec<Box<dyn System>>,
}

impl FrameDriver {
    /// 予約された遷移を先に処理してから、回転を進める。
    pub fn new() -> Self {
        Self {
            systems: vec![Box::new(ScheduleSystem), Box::new(RotationSystem)],
        }
    }

    pub fn tick(&mut self, session: &mut ReadingSession, now_ms: f64) {
        if session.is_torn_down() {
            return;
        }
        let frame = FrameContext { now_ms };
        for system in self.systems.iter_mut() {
            system.run(session, frame);
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
