//! Canvas 2D surface (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, Font, LinearGradient, Paint, Shadow, Surface};
use crate::sim::Rect;

/// A `<canvas>` element's 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    fn set_shadow(&self, shadow: Option<Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_color(&shadow.color.css());
                self.ctx.set_shadow_blur(shadow.blur as f64);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.set_shadow(paint.shadow);
        self.ctx.set_fill_style_str(&paint.color.css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.set_shadow(paint.shadow);
        self.ctx.set_fill_style_str(&paint.color.css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color) {
        self.set_shadow(None);
        self.ctx.set_font(&font.css());
        self.ctx.set_fill_style_str(&color.css());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        let fill = self.ctx.create_linear_gradient(
            gradient.start.x as f64,
            gradient.start.y as f64,
            gradient.end.x as f64,
            gradient.end.y as f64,
        );
        for (offset, color) in &gradient.stops {
            if let Err(e) = fill.add_color_stop(*offset, &color.css()) {
                log::warn!("bad gradient stop {}: {:?}", offset, e);
            }
        }
        self.set_shadow(None);
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
