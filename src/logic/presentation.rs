// src/logic/presentation.rs
//! カード1枚をどう見せるか (トゥイーンのパラメータ、重ねる演出、表の絵) を決めるよ。✨
//!
//! 実際にアニメーションさせるのは JS 側のトゥイーンライブラリ。
//! ここではその「指示書」を作るだけなので、全部ただの関数とデータ。

use serde::Serialize;

use crate::components::{DeckCard, DrawEffect, GamePhase, Placement};
use crate::config::layout::{HOVERED_SCALE, SELECTED_SCALE};

pub const DEFAULT_DURATION: f64 = 0.5;
pub const DEFAULT_EASE: &str = "power2.out";

pub const SHADOW_IDLE: &str = "2px 2px 5px rgba(0,0,0,0.5)";
pub const SHADOW_SELECTED: &str = "0 20px 50px rgba(0,0,0,0.8)";
pub const SHADOW_RESONANCE_SELECTED: &str =
    "0 0 50px 10px rgba(255, 255, 255, 0.6), 0 0 100px 20px rgba(100, 200, 255, 0.4)";
pub const SHADOW_RESONANCE_HOVER: &str = "0 0 20px 2px rgba(100, 200, 255, 0.6)";

pub const FLIP_DURATION: f64 = 0.8;
pub const FLIP_EASE: &str = "back.out(1.2)";

/// 円形の進捗リングの周の長さ。dash offset はここから減っていく。
pub const PROGRESS_CIRCUMFERENCE: f64 = 175.0;

pub const PLACEHOLDER_GLYPH: &str = "?";
pub const PLACEHOLDER_LABEL: &str = "Image Unavailable";

/// 描画に使うカードの状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardFlags {
    pub is_selected: bool,
    pub is_flipped: bool,
    pub is_hovered: bool,
    pub hover_progress: f64,
    /// 前の描画では選ばれていなくて、この描画で選ばれた
    pub just_selected: bool,
    /// 前の描画では裏で、この描画で表になった
    pub just_flipped: bool,
}

/// トゥイーンで動かすプロパティ。None のものは触らない。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<&'static str>,
}

/// 光の層 (共鳴エフェクトのグロー) を動かす指示
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowTween {
    pub from_opacity: f64,
    pub to_opacity: f64,
    pub from_scale: f64,
    pub to_scale: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenSpec {
    pub duration: f64,
    pub ease: &'static str,
    pub delay: f64,
    /// true なら前のトゥイーンを止めてから始める
    pub kill_existing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<TweenVars>,
    pub to: TweenVars,
    /// 動き終わったあとにグローをどうするか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_complete_glow: Option<GlowTween>,
}

/// エフェクトごとの「選ばれた瞬間」の動き方。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectProfile {
    pub effect: DrawEffect,
    pub duration: f64,
    pub ease: &'static str,
    pub delay: f64,
    pub kill_existing: bool,
    pub entry: Entry,
}

/// どこから出てくるか
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// その場から目的地へ動くだけ
    InPlace,
    /// 共鳴: 着いたらグローがすっと消える
    GlowFade,
    /// 星屑: ぼやけた小さい光の粒から集まってくる
    StardustBurst,
    /// 深淵: 下の暗がりから浮かび上がる
    AbyssRise { depth: f64 },
}

pub fn effect_profile(effect: DrawEffect) -> EffectProfile {
    match effect {
        DrawEffect::Resonance => EffectProfile {
            effect,
            duration: DEFAULT_DURATION,
            ease: "back.out(0.8)",
            delay: 0.0,
            kill_existing: false,
            entry: Entry::GlowFade,
        },
        DrawEffect::Stardust => EffectProfile {
            effect,
            duration: 1.5,
            ease: "power2.inOut",
            delay: 0.0,
            kill_existing: true,
            entry: Entry::StardustBurst,
        },
        DrawEffect::Abyss => EffectProfile {
            effect,
            duration: 2.5,
            ease: "power3.out",
            delay: 0.2,
            kill_existing: true,
            entry: Entry::AbyssRise { depth: 200.0 },
        },
        DrawEffect::Thread => EffectProfile {
            effect,
            duration: 1.2,
            ease: "elastic.out(1, 0.75)",
            delay: 0.0,
            kill_existing: false,
            entry: Entry::InPlace,
        },
    }
}

pub fn card_scale(flags: &CardFlags) -> f64 {
    if flags.is_selected {
        SELECTED_SCALE
    } else if flags.is_hovered {
        HOVERED_SCALE
    } else {
        1.0
    }
}

pub fn card_shadow(effect: DrawEffect, flags: &CardFlags) -> &'static str {
    let resonance = effect == DrawEffect::Resonance;
    if resonance && flags.is_selected {
        SHADOW_RESONANCE_SELECTED
    } else if resonance && flags.is_hovered {
        SHADOW_RESONANCE_HOVER
    } else if flags.is_selected {
        SHADOW_SELECTED
    } else {
        SHADOW_IDLE
    }
}

/// 置き場所へ動かすトゥイーンを作る。
///
/// エフェクトの演出は選ばれた瞬間の1回だけ。それ以外はどのエフェクトでも同じ落ち着いた動き。
pub fn motion_tween(placement: &Placement, flags: &CardFlags, effect: DrawEffect) -> TweenSpec {
    let mut to = TweenVars {
        x: Some(placement.x),
        y: Some(placement.y),
        rotation: Some(placement.rotation),
        scale: Some(card_scale(flags)),
        box_shadow: Some(card_shadow(effect, flags)),
        ..TweenVars::default()
    };

    if !(flags.is_selected && flags.just_selected) {
        return TweenSpec {
            duration: DEFAULT_DURATION,
            ease: DEFAULT_EASE,
            delay: 0.0,
            kill_existing: false,
            from: None,
            to,
            on_complete_glow: None,
        };
    }

    let profile = effect_profile(effect);
    let mut from = None;
    let mut on_complete_glow = None;
    match profile.entry {
        Entry::InPlace => {}
        Entry::GlowFade => {
            on_complete_glow = Some(GlowTween {
                from_opacity: 1.0,
                to_opacity: 0.0,
                from_scale: 1.0,
                to_scale: 1.0,
                duration: 0.5,
            });
        }
        Entry::StardustBurst => {
            from = Some(TweenVars {
                filter: Some("blur(20px) brightness(2)"),
                scale: Some(0.2),
                opacity: Some(0.8),
                ..TweenVars::default()
            });
            to.filter = Some("blur(0px) brightness(1)");
            to.scale = Some(SELECTED_SCALE);
            to.opacity = Some(1.0);
        }
        Entry::AbyssRise { depth } => {
            from = Some(TweenVars {
                y: Some(placement.y + depth),
                opacity: Some(0.0),
                ..TweenVars::default()
            });
            to.opacity = Some(1.0);
        }
    }

    TweenSpec {
        duration: profile.duration,
        ease: profile.ease,
        delay: profile.delay,
        kill_existing: profile.kill_existing,
        from,
        to,
        on_complete_glow,
    }
}

/// 裏返しのトゥイーン。共鳴エフェクトで表になったその描画だけグローが脈打つ。
pub fn flip_tween(flags: &CardFlags, effect: DrawEffect) -> TweenSpec {
    let is_flipped = flags.is_flipped;
    let glow = if is_flipped && flags.just_flipped && effect == DrawEffect::Resonance {
        Some(GlowTween {
            from_opacity: 0.8,
            to_opacity: 0.0,
            from_scale: 1.5,
            to_scale: 1.0,
            duration: FLIP_DURATION,
        })
    } else {
        None
    };
    TweenSpec {
        duration: FLIP_DURATION,
        ease: FLIP_EASE,
        delay: 0.0,
        kill_existing: false,
        from: None,
        to: TweenVars {
            rotation_y: Some(if is_flipped { 180.0 } else { 0.0 }),
            ..TweenVars::default()
        },
        on_complete_glow: glow,
    }
}

/// ホバー中に出る進捗の表示
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProgressIndicator {
    PulseRing,
    #[serde(rename_all = "camelCase")]
    Stroke { dash_offset: f64 },
}

/// カードの上に重ねる飾り
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlays {
    pub thread_line: bool,
    pub stardust_particles: bool,
    pub abyss_ripple: bool,
    pub resonance_glow: bool,
    pub progress: Option<ProgressIndicator>,
}

pub fn overlays(effect: DrawEffect, flags: &CardFlags) -> Overlays {
    let engaged = flags.is_hovered || flags.is_selected;
    let progress = if flags.is_hovered && !flags.is_selected {
        Some(match effect {
            DrawEffect::Resonance => ProgressIndicator::PulseRing,
            _ => ProgressIndicator::Stroke {
                dash_offset: PROGRESS_CIRCUMFERENCE
                    - PROGRESS_CIRCUMFERENCE * flags.hover_progress.clamp(0.0, 1.0),
            },
        })
    } else {
        None
    };
    Overlays {
        thread_line: effect == DrawEffect::Thread && engaged && !flags.is_flipped,
        stardust_particles: effect == DrawEffect::Stardust && engaged,
        abyss_ripple: effect == DrawEffect::Abyss && flags.is_hovered,
        resonance_glow: effect == DrawEffect::Resonance,
        progress,
    }
}

/// 表の絵。画像が読めなかったカードは「?」の代わりの表示になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CardFace {
    #[serde(rename_all = "camelCase")]
    Image { src: String, upside_down: bool },
    #[serde(rename_all = "camelCase")]
    Placeholder {
        glyph: &'static str,
        label: &'static str,
        upside_down: bool,
    },
}

pub fn card_face(card: &DeckCard, image_failed: bool) -> CardFace {
    if image_failed {
        CardFace::Placeholder {
            glyph: PLACEHOLDER_GLYPH,
            label: PLACEHOLDER_LABEL,
            upside_down: card.is_reversed,
        }
    } else {
        CardFace::Image {
            src: card.definition.image.clone(),
            upside_down: card.is_reversed,
        }
    }
}

/// reading では選ばれなかったカードは消える (クリックもできない)
pub fn is_hidden(phase: GamePhase, is_selected: bool) -> bool {
    phase == GamePhase::Reading && !is_selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::preferences::ALL_DRAW_EFFECTS;

    fn at() -> Placement {
        Placement::new(10.0, -40.0, 0.0, 2001)
    }

    fn selected() -> CardFlags {
        CardFlags {
            is_selected: true,
            just_selected: true,
            ..CardFlags::default()
        }
    }

    fn flipped(just_flipped: bool) -> CardFlags {
        CardFlags {
            is_flipped: true,
            just_flipped,
            ..CardFlags::default()
        }
    }

    #[test]
    fn idle_card_uses_default_tween() {
        for effect in ALL_DRAW_EFFECTS {
            let spec = motion_tween(&at(), &CardFlags::default(), effect);
            assert_eq!(spec.duration, 0.5);
            assert_eq!(spec.ease, "power2.out");
            assert_eq!(spec.to.scale, Some(1.0));
            assert_eq!(spec.to.box_shadow, Some(SHADOW_IDLE));
            assert!(spec.from.is_none());
        }
    }

    #[test]
    fn settled_selection_is_the_same_for_every_effect() {
        let flags = CardFlags {
            is_selected: true,
            ..CardFlags::default()
        };
        for effect in ALL_DRAW_EFFECTS {
            let spec = motion_tween(&at(), &flags, effect);
            assert_eq!(spec.duration, DEFAULT_DURATION);
            assert_eq!(spec.ease, DEFAULT_EASE);
            assert!(!spec.kill_existing);
            assert!(spec.from.is_none());
            assert!(spec.on_complete_glow.is_none());
            assert_eq!(spec.to.scale, Some(1.2));
        }
    }

    #[test]
    fn hover_scale_and_shadow() {
        let flags = CardFlags {
            is_hovered: true,
            ..CardFlags::default()
        };
        let resonance = motion_tween(&at(), &flags, DrawEffect::Resonance);
        assert_eq!(resonance.to.scale, Some(1.1));
        assert_eq!(resonance.to.box_shadow, Some(SHADOW_RESONANCE_HOVER));
        let thread = motion_tween(&at(), &flags, DrawEffect::Thread);
        assert_eq!(thread.to.box_shadow, Some(SHADOW_IDLE));
    }

    #[test]
    fn resonance_selection_glows_then_fades() {
        let spec = motion_tween(&at(), &selected(), DrawEffect::Resonance);
        assert_eq!(spec.ease, "back.out(0.8)");
        assert_eq!(spec.to.box_shadow, Some(SHADOW_RESONANCE_SELECTED));
        let glow = spec.on_complete_glow.unwrap();
        assert_eq!((glow.from_opacity, glow.to_opacity, glow.duration), (1.0, 0.0, 0.5));
    }

    #[test]
    fn stardust_gathers_from_a_blur() {
        let spec = motion_tween(&at(), &selected(), DrawEffect::Stardust);
        assert_eq!(spec.duration, 1.5);
        assert_eq!(spec.ease, "power2.inOut");
        assert!(spec.kill_existing);
        let from = spec.from.unwrap();
        assert_eq!(from.filter, Some("blur(20px) brightness(2)"));
        assert_eq!(from.scale, Some(0.2));
        assert_eq!(from.opacity, Some(0.8));
        assert_eq!(spec.to.filter, Some("blur(0px) brightness(1)"));
        assert_eq!(spec.to.scale, Some(1.2));
        assert_eq!(spec.to.box_shadow, Some(SHADOW_SELECTED));
    }

    #[test]
    fn abyss_rises_from_below() {
        let spec = motion_tween(&at(), &selected(), DrawEffect::Abyss);
        assert_eq!(spec.duration, 2.5);
        assert_eq!(spec.ease, "power3.out");
        assert_eq!(spec.delay, 0.2);
        let from = spec.from.unwrap();
        assert_eq!(from.y, Some(160.0));
        assert_eq!(from.opacity, Some(0.0));
        assert_eq!(spec.to.y, Some(-40.0));
        assert_eq!(spec.to.opacity, Some(1.0));
    }

    #[test]
    fn thread_snaps_elastically() {
        let spec = motion_tween(&at(), &selected(), DrawEffect::Thread);
        assert_eq!(spec.duration, 1.2);
        assert_eq!(spec.ease, "elastic.out(1, 0.75)");
        assert!(spec.from.is_none());
    }

    #[test]
    fn flip_turns_half_way() {
        let up = flip_tween(&flipped(true), DrawEffect::Thread);
        assert_eq!(up.to.rotation_y, Some(180.0));
        assert_eq!(up.ease, "back.out(1.2)");
        assert!(up.on_complete_glow.is_none());
        assert_eq!(
            flip_tween(&CardFlags::default(), DrawEffect::Resonance).to.rotation_y,
            Some(0.0)
        );
        let pulse = flip_tween(&flipped(true), DrawEffect::Resonance).on_complete_glow.unwrap();
        assert_eq!((pulse.from_scale, pulse.to_scale), (1.5, 1.0));
        // 表のまま次の描画に来たらもう脈打たない
        let settled = flip_tween(&flipped(false), DrawEffect::Resonance);
        assert_eq!(settled.to.rotation_y, Some(180.0));
        assert!(settled.on_complete_glow.is_none());
    }

    #[test]
    fn overlay_visibility() {
        let hovered = CardFlags {
            is_hovered: true,
            hover_progress: 0.5,
            ..CardFlags::default()
        };
        let thread = overlays(DrawEffect::Thread, &hovered);
        assert!(thread.thread_line);
        assert_eq!(
            thread.progress,
            Some(ProgressIndicator::Stroke { dash_offset: 87.5 })
        );

        let flipped = CardFlags {
            is_flipped: true,
            ..selected()
        };
        assert!(!overlays(DrawEffect::Thread, &flipped).thread_line);
        assert!(overlays(DrawEffect::Stardust, &selected()).stardust_particles);
        assert!(!overlays(DrawEffect::Abyss, &selected()).abyss_ripple);
        assert!(overlays(DrawEffect::Abyss, &hovered).abyss_ripple);

        let resonance = overlays(DrawEffect::Resonance, &hovered);
        assert!(resonance.resonance_glow);
        assert_eq!(resonance.progress, Some(ProgressIndicator::PulseRing));
        assert_eq!(overlays(DrawEffect::Resonance, &selected()).progress, None);
    }

    #[test]
    fn broken_image_shows_placeholder() {
        let catalog = crate::data::catalog::load_catalog().unwrap();
        let card = DeckCard::new(catalog[2].clone(), 2, true);
        match card_face(&card, true) {
            CardFace::Placeholder { glyph, label, upside_down } => {
                assert_eq!(glyph, "?");
                assert_eq!(label, "Image Unavailable");
                assert!(upside_down);
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert!(matches!(card_face(&card, false), CardFace::Image { .. }));
    }

    #[test]
    fn only_unselected_cards_hide_in_reading() {
        assert!(is_hidden(GamePhase::Reading, false));
        assert!(!is_hidden(GamePhase::Reading, true));
        assert!(!is_hidden(GamePhase::Revealing, false));
    }
}
