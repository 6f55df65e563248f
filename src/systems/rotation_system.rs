// src/systems/rotation_system.rs

use crate::config::timing::ROTATION_STEP_DEG;
use crate::logic::session::ReadingSession;
use crate::systems::{FrameContext, System};

/// 円形に並んだカード全体をゆっくり回すシステム。🌀
///
/// 回るのは drawing / revealing / reading の間だけ。それ以外のフェーズでは 0 に戻す。
/// 1フレームあたりの量で進めるので、フレームレートが違えば回る速さも変わる。
pub struct RotationSystem;

impl System for RotationSystem {
    fn run(&mut self, session: &mut ReadingSession, _frame: FrameContext) {
        if session.phase().is_spinning() {
            session.rotation_offset = (session.rotation_offset + ROTATION_STEP_DEG) % 360.0;
        } else {
            session.rotation_offset = 0.0;
        }
    }
}
