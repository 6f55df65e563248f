// src/app/layout_calculator.rs
//! Calculates where each card is drawn for the current phase and window size.
//!
//! Everything here is a pure function of its arguments: the same index, phase,
//! rotation offset and viewport always give bit-identical placements. The
//! "random looking" intro and shuffle layouts come from fixed formulas of the
//! index so they stay put across re-renders.

use crate::components::{GamePhase, Placement, Viewport};
use crate::config::layout::*;

/// デッキの中の `index` 番目のカードの置き場所を計算します。
/// 選ばれたカードは [`calculate_reading_position`] を使うので、ここには来ない想定。
///
/// # 引数
/// * `index`: デッキ内での並び順 (0 から)。
/// * `deck_size`: デッキの枚数。円形スプレッドの角度の刻みに使う。
/// * `phase`: 今のフェーズ。
/// * `rotation_offset`: 円形スプレッド全体の回転量 (度)。
/// * `viewport`: ウィンドウの大きさ。
pub fn calculate_card_position(
    index: usize,
    deck_size: usize,
    phase: GamePhase,
    rotation_offset: f64,
    viewport: Viewport,
) -> Placement {
    match phase {
        GamePhase::Intro | GamePhase::Error => intro_position(index),
        GamePhase::Shuffling => shuffle_position(index, viewport),
        GamePhase::Drawing | GamePhase::Revealing | GamePhase::Reading => {
            spread_position(index, deck_size, rotation_offset, viewport)
        }
    }
}

/// 少しだけずれた「ちょっと散らかった山」。
fn intro_position(index: usize) -> Placement {
    let seed = index as f64 * INTRO_SEED_STEP;
    let rotation = (seed % 100.0) / 100.0 - 0.5;
    let x = ((seed * 2.0 % 100.0) / 100.0 - 0.5) * INTRO_JITTER;
    let y = ((seed * 3.0 % 100.0) / 100.0 - 0.5) * INTRO_JITTER;
    let lift = index as f64 * INTRO_STACK_STEP;
    Placement::new(x, y - lift, rotation, index as i32)
}

/// 画面の短い辺に比例した円盤の中にばらまく。
fn shuffle_position(index: usize, viewport: Viewport) -> Placement {
    let radius = viewport.min_side() * SHUFFLE_RADIUS_RATIO;
    let seed = index as f64 * SHUFFLE_SEED_STEP;
    let r = ((seed % 100.0) / 100.0).sqrt() * radius;
    let theta = (seed % 360.0).to_radians();
    Placement::new(r * theta.cos(), r * theta.sin(), seed % 360.0, index as i32)
}

/// Radius of the rotating halo for this viewport.
pub fn spread_radius(viewport: Viewport) -> f64 {
    let base = viewport.min_side();
    if viewport.is_mobile() {
        (base * SPREAD_RADIUS_RATIO_MOBILE).clamp(SPREAD_RADIUS_MIN_MOBILE, SPREAD_RADIUS_MAX_MOBILE)
    } else {
        (base * SPREAD_RADIUS_RATIO_DESKTOP).clamp(SPREAD_RADIUS_MIN_DESKTOP, SPREAD_RADIUS_MAX_DESKTOP)
    }
}

/// Vertical shift applied to the whole halo so its top arc sits nicely on screen.
pub fn spread_vertical_offset(viewport: Viewport) -> f64 {
    let base = viewport.min_side();
    let ratio = if viewport.is_mobile() {
        if viewport.is_landscape() {
            SPREAD_OFFSET_MOBILE_LANDSCAPE
        } else {
            SPREAD_OFFSET_MOBILE_PORTRAIT
        }
    } else if viewport.is_landscape() && viewport.is_short() {
        SPREAD_OFFSET_SHORT_LANDSCAPE
    } else {
        SPREAD_OFFSET_DEFAULT
    };
    base * ratio
}

/// Angle in degrees of card `index` around the halo, before wrapping.
pub fn spread_angle(index: usize, deck_size: usize, rotation_offset: f64) -> f64 {
    let step = 360.0 / deck_size.max(1) as f64;
    index as f64 * step + rotation_offset
}

fn spread_position(index: usize, deck_size: usize, rotation_offset: f64, viewport: Viewport) -> Placement {
    let radius = spread_radius(viewport);
    // index 0 が真上 (0度) から始まる
    let angle_deg = spread_angle(index, deck_size, rotation_offset);
    let angle_rad = angle_deg.to_radians();
    let x = radius * angle_rad.sin();
    let y = (radius - radius * angle_rad.cos()) + spread_vertical_offset(viewport);
    Placement::new(x, y, angle_deg, index as i32)
}

/// 選ばれたカードの置き場所 (過去・現在・未来の横並び)。円形の配置とは無関係。
pub fn calculate_reading_position(slot: usize, viewport: Viewport) -> Placement {
    let spacing = if viewport.is_mobile() {
        SLOT_SPACING_MAX_MOBILE.min(viewport.width * SLOT_SPACING_RATIO_MOBILE)
    } else {
        SLOT_SPACING_DESKTOP
    };
    let x = (slot as f64 - 1.0) * spacing;
    let y_ratio = if viewport.is_mobile() {
        if viewport.is_landscape() {
            SLOT_Y_RATIO_MOBILE_LANDSCAPE
        } else {
            SLOT_Y_RATIO_MOBILE_PORTRAIT
        }
    } else {
        SLOT_Y_RATIO_DESKTOP
    };
    Placement::new(x, viewport.height * y_ratio, 0.0, SLOT_Z_INDEX_BASE + slot as i32)
}

/// reading 中の「過去」「現在」「未来」ラベルの位置。カードの少し上。
pub fn calculate_slot_label_position(slot: usize, viewport: Viewport) -> (f64, f64) {
    let placement = calculate_reading_position(slot, viewport);
    (placement.x, placement.y - SLOT_LABEL_RISE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport { width: 1440.0, height: 900.0 };
    const PHONE: Viewport = Viewport { width: 390.0, height: 844.0 };
    const PHONE_LANDSCAPE: Viewport = Viewport { width: 700.0, height: 390.0 };
    const SHORT_LAPTOP: Viewport = Viewport { width: 1280.0, height: 640.0 };

    #[test]
    fn every_phase_is_deterministic() {
        let phases = [
            GamePhase::Intro,
            GamePhase::Shuffling,
            GamePhase::Drawing,
            GamePhase::Revealing,
            GamePhase::Reading,
        ];
        for phase in phases {
            for index in 0..22 {
                let a = calculate_card_position(index, 22, phase, 123.4, DESKTOP);
                let b = calculate_card_position(index, 22, phase, 123.4, DESKTOP);
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
                assert_eq!(a.rotation.to_bits(), b.rotation.to_bits());
                assert_eq!(a.z_index, b.z_index);
            }
        }
    }

    #[test]
    fn intro_stack_is_tight() {
        for index in 0..22 {
            let p = calculate_card_position(index, 22, GamePhase::Intro, 0.0, DESKTOP);
            assert!(p.x.abs() <= 2.0);
            assert!(p.rotation.abs() <= 0.5);
            assert_eq!(p.z_index, index as i32);
        }
        let first = calculate_card_position(0, 22, GamePhase::Intro, 0.0, DESKTOP);
        assert_eq!(first, Placement::new(-2.0, -2.0, -0.5, 0));
    }

    #[test]
    fn intro_ignores_viewport_and_rotation() {
        let a = calculate_card_position(5, 22, GamePhase::Intro, 0.0, DESKTOP);
        let b = calculate_card_position(5, 22, GamePhase::Intro, 90.0, PHONE);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_scatter_stays_inside_disc() {
        let radius = DESKTOP.min_side() * SHUFFLE_RADIUS_RATIO;
        for index in 0..22 {
            let p = calculate_card_position(index, 22, GamePhase::Shuffling, 0.0, DESKTOP);
            let distance = (p.x * p.x + p.y * p.y).sqrt();
            assert!(distance <= radius + 1e-9, "card {} at {}", index, distance);
            assert!(p.rotation >= 0.0 && p.rotation < 360.0);
        }
    }

    #[test]
    fn spread_angles_are_evenly_spaced() {
        let n = 22;
        let offset = 37.5;
        let step = 360.0 / n as f64;
        for index in 0..n {
            let p = calculate_card_position(index, n, GamePhase::Drawing, offset, DESKTOP);
            let expected = index as f64 * step + offset;
            assert!((p.rotation - expected).abs() < 1e-9);
            if index > 0 {
                let prev = calculate_card_position(index - 1, n, GamePhase::Drawing, offset, DESKTOP);
                assert!((p.rotation - prev.rotation - step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn spread_points_lie_on_the_circle() {
        let radius = spread_radius(DESKTOP);
        let offset = spread_vertical_offset(DESKTOP);
        for index in 0..22 {
            let p = calculate_card_position(index, 22, GamePhase::Reading, 10.0, DESKTOP);
            // 円の中心は (0, radius + offset)
            let dy = p.y - (radius + offset);
            let distance = (p.x * p.x + dy * dy).sqrt();
            assert!((distance - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn spread_radius_breakpoints() {
        // desktop: 900 * 0.85 = 765 -> 520 で頭打ち
        assert_eq!(spread_radius(DESKTOP), 520.0);
        // phone: 390 * 0.62 = 241.8
        assert!((spread_radius(PHONE) - 241.8).abs() < 1e-9);
        // 小さい phone は 180 まで
        assert_eq!(spread_radius(Viewport::new(250.0, 500.0)), 180.0);
    }

    #[test]
    fn spread_vertical_offset_breakpoints() {
        assert!((spread_vertical_offset(PHONE) - 390.0 * -0.18).abs() < 1e-9);
        assert!((spread_vertical_offset(PHONE_LANDSCAPE) - 390.0 * -0.28).abs() < 1e-9);
        assert!((spread_vertical_offset(SHORT_LAPTOP) - 640.0 * -0.12).abs() < 1e-9);
        assert!((spread_vertical_offset(DESKTOP) - 900.0 * 0.06).abs() < 1e-9);
    }

    #[test]
    fn reading_slots_are_centered_row() {
        let past = calculate_reading_position(0, DESKTOP);
        let present = calculate_reading_position(1, DESKTOP);
        let future = calculate_reading_position(2, DESKTOP);
        assert_eq!(past.x, -250.0);
        assert_eq!(present.x, 0.0);
        assert_eq!(future.x, 250.0);
        assert_eq!(present.y, 900.0 * -0.25);
        assert_eq!(future.z_index, 2002);
        assert_eq!(past.rotation, 0.0);
    }

    #[test]
    fn reading_slots_on_phone() {
        let future = calculate_reading_position(2, PHONE);
        // min(120, 390 * 0.28 = 109.2)
        assert!((future.x - 109.2).abs() < 1e-9);
        assert!((future.y - 844.0 * -0.20).abs() < 1e-9);
        let landscape = calculate_reading_position(0, PHONE_LANDSCAPE);
        assert!((landscape.y - 390.0 * -0.16).abs() < 1e-9);
    }

    #[test]
    fn label_sits_above_slot() {
        let (x, y) = calculate_slot_label_position(1, DESKTOP);
        assert_eq!(x, 0.0);
        assert_eq!(y, 900.0 * -0.25 - 180.0);
    }
}
