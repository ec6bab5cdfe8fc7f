use lib_2048::{
    surface::{Line, Rect, Surface},
    Error, Result,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::describe;

const FONT_FAMILY: &str = "Arial";

fn surface_error(err: JsValue) -> Error {
    Error::Surface(describe(&err))
}

/// `Surface` over a canvas element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.canvas.set_width(width.ceil() as u32);
        self.canvas.set_height(height.ceil() as u32);

        // Resizing wipes the context state.
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("center");

        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<()> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        Ok(())
    }

    fn stroke_lines(&mut self, lines: &[Line], color: &str) -> Result<()> {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);

        for line in lines {
            self.ctx.move_to(line.from.0, line.from.1);
            self.ctx.line_to(line.to.0, line.to.1);
        }

        self.ctx.stroke();

        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64, color: &str) -> Result<()> {
        self.ctx.set_font(&format!("{font_px:.0}px {FONT_FAMILY}"));
        self.ctx.set_fill_style_str(color);

        self.ctx.fill_text(text, x, y).map_err(surface_error)
    }
}
