// src/config/timing.rs
//! フェーズ遷移の待ち時間と、回転アニメーションの速さ。単位はミリ秒。

/// intro から始めたときのシャッフル演出の長さ
pub const INITIAL_SHUFFLE_DELAY_MS: f64 = 2500.0;
/// reading からやり直すときのシャッフル (最初より短い)
pub const RESET_SHUFFLE_DELAY_MS: f64 = 1500.0;
/// 3枚目を引いてから revealing に入るまで
pub const REVEAL_DELAY_MS: f64 = 1000.0;
/// 3枚目を引いてから reading に入るまで (REVEAL_DELAY_MS と同じ起点)
pub const READING_DELAY_MS: f64 = 2500.0;

/// 1フレームごとに進める回転量 (度)
pub const ROTATION_STEP_DEG: f64 = 0.1;
