use crate::constants::SNOW_FILL_STYLE;
use crate::core::ParticleSprite;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct SnowRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl SnowRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Clears the canvas and fills every sprite as one path of circles.
    pub fn draw(&self, sprites: impl Iterator<Item = ParticleSprite>) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(SNOW_FILL_STYLE));
        self.ctx.begin_path();
        for s in sprites {
            self.ctx.move_to(s.x, s.y);
            if let Err(e) = self.ctx.arc(s.x, s.y, s.radius, 0.0, TAU) {
                log::error!("arc error: {:?}", e);
                break;
            }
        }
        self.ctx.fill();
    }
}
