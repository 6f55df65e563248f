// src/config/layout.rs
//! 画面レイアウトに関する定数を定義するよ！
//! ブレークポイント、円形スプレッドの半径、3枚並べたときの間隔など。

// --- ブレークポイント ---
pub const MOBILE_MAX_WIDTH: f64 = 768.0; // これ未満ならモバイル扱い
pub const SHORT_MAX_HEIGHT: f64 = 700.0; // これ未満なら背の低い画面

// --- intro: ちょっとだけ散らかった山 ---
pub const INTRO_SEED_STEP: f64 = 123.45;
pub const INTRO_JITTER: f64 = 4.0; // x, y のぶれ幅 (px)
pub const INTRO_STACK_STEP: f64 = 0.2; // 1枚ごとに上へずらす量

// --- shuffling: 円盤の中にばらまく ---
pub const SHUFFLE_SEED_STEP: f64 = 999.0;
pub const SHUFFLE_RADIUS_RATIO: f64 = 0.4;

// --- 円形スプレッド (drawing / revealing / reading) ---
pub const SPREAD_RADIUS_RATIO_MOBILE: f64 = 0.62;
pub const SPREAD_RADIUS_MIN_MOBILE: f64 = 180.0;
pub const SPREAD_RADIUS_MAX_MOBILE: f64 = 280.0;
pub const SPREAD_RADIUS_RATIO_DESKTOP: f64 = 0.85;
pub const SPREAD_RADIUS_MIN_DESKTOP: f64 = 320.0;
pub const SPREAD_RADIUS_MAX_DESKTOP: f64 = 520.0;

pub const SPREAD_OFFSET_MOBILE_LANDSCAPE: f64 = -0.28;
pub const SPREAD_OFFSET_MOBILE_PORTRAIT: f64 = -0.18;
pub const SPREAD_OFFSET_SHORT_LANDSCAPE: f64 = -0.12;
pub const SPREAD_OFFSET_DEFAULT: f64 = 0.06;

// --- reading: 過去・現在・未来の3スロット ---
pub const SLOT_SPACING_DESKTOP: f64 = 250.0;
pub const SLOT_SPACING_MAX_MOBILE: f64 = 120.0;
pub const SLOT_SPACING_RATIO_MOBILE: f64 = 0.28;
pub const SLOT_Y_RATIO_MOBILE_LANDSCAPE: f64 = -0.16;
pub const SLOT_Y_RATIO_MOBILE_PORTRAIT: f64 = -0.20;
pub const SLOT_Y_RATIO_DESKTOP: f64 = -0.25;
pub const SLOT_Z_INDEX_BASE: i32 = 2000;
pub const SLOT_LABEL_RISE: f64 = 180.0; // ラベルはカードの上に置く

pub const SELECTED_SCALE: f64 = 1.2;
pub const HOVERED_SCALE: f64 = 1.1;
