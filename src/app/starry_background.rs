// src/app/starry_background.rs
//! 「星空」背景を canvas に描く。星の動きそのものは logic::starfield にある。

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::logic::starfield::{Starfield, GRADIENT_STOPS};

pub struct StarryBackground {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: Starfield,
    rng: StdRng,
}

impl StarryBackground {
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("2d context is not available")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut rng = StdRng::from_entropy();
        let field = Starfield::new(width, height, &mut rng);
        let background = Self {
            canvas,
            context,
            field,
            rng,
        };
        background.fit_canvas();
        Ok(background)
    }

    fn fit_canvas(&self) {
        let (width, height) = self.field.size();
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    /// ウィンドウの大きさが変わったら星を撒き直す
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.field.size() == (width, height) {
            return;
        }
        self.field.resize(width, height, &mut self.rng);
        self.fit_canvas();
    }

    /// 星を1フレーム分動かして描く
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.field.step(&mut self.rng);
        self.paint()
    }

    /// 星空モードをやめた時に消す
    pub fn clear(&self) {
        let (width, height) = self.field.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn paint(&self) -> Result<(), JsValue> {
        let ctx = &self.context;
        let (width, height) = self.field.size();
        let (cx, cy) = (width / 2.0, height / 2.0);

        let gradient =
            ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, self.field.gradient_radius())?;
        for (offset, color) in GRADIENT_STOPS {
            gradient.add_color_stop(offset as f32, color)?;
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, height);

        for star in self.field.stars() {
            ctx.begin_path();
            ctx.arc(star.x, star.y, star.size, 0.0, PI * 2.0)?;
            ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", star.alpha));
            ctx.fill();
        }
        Ok(())
    }
}
