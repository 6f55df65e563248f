// src/components/position.rs

use serde::{Deserialize, Serialize};

/// カード1枚の画面上の置き場所。毎フレーム計算し直すだけで、保存はしないよ。📍
///
/// 座標はステージ中央からのピクセル、`rotation` は度。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub z_index: i32,
    pub scale: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64, rotation: f64, z_index: i32) -> Self {
        Self { x, y, rotation, z_index, scale: 1.0 }
    }
}

/// ウィンドウの大きさ。ブレークポイントの判定もここでやる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < crate::config::layout::MOBILE_MAX_WIDTH
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn is_short(&self) -> bool {
        self.height < crate::config::layout::SHORT_MAX_HEIGHT
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
