// src/logic/starfield.rs
//! 「星空」背景の星の動き。描画は app::starry_background がやる。
//!
//! 星はゆっくり上へ流れて、上端を越えたら下端の適当な x から出直す。
//! ときどき明るさが変わってまたたく。

use rand::Rng;

pub const STAR_COUNT: usize = 200;
pub const MAX_STAR_SIZE: f64 = 2.0;
pub const MIN_STAR_SPEED: f64 = 0.01;
pub const STAR_SPEED_RANGE: f64 = 0.05;
/// 1フレームで1つの星の明るさが変わる確率
pub const TWINKLE_CHANCE: f64 = 0.01;

/// 背景のグラデーション (中心から外へ)
pub const GRADIENT_STOPS: [(f64, &str); 3] = [(0.0, "#1a0b2e"), (0.5, "#0f172a"), (1.0, "#020202")];
pub const GRADIENT_RADIUS_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f64,
    height: f64,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                size: rng.gen::<f64>() * MAX_STAR_SIZE,
                alpha: rng.gen::<f64>(),
                speed: rng.gen::<f64>() * STAR_SPEED_RANGE + MIN_STAR_SPEED,
            })
            .collect();
        Self { stars, width, height }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// キャンバスの大きさが変わったら星を撒き直す
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        *self = Self::new(width, height, rng);
    }

    pub fn gradient_radius(&self) -> f64 {
        self.width.max(self.height) * GRADIENT_RADIUS_RATIO
    }

    /// 1フレーム分進める
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for star in self.stars.iter_mut() {
            star.y -= star.speed;
            if star.y < 0.0 {
                star.y = self.height;
                star.x = rng.gen::<f64>() * self.width;
            }
            if rng.gen_bool(TWINKLE_CHANCE) {
                star.alpha = rng.gen::<f64>();
            }
        }
    }
}
