//! The drawing target. The browser implements it over a 2D canvas context;
//! `Recorder` keeps the calls in memory.

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

pub trait Surface {
    fn resize(&mut self, width: f64, height: f64) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<()>;

    /// Strokes all `lines` as a single path.
    fn stroke_lines(&mut self, lines: &[Line], color: &str) -> Result<()>;

    /// Draws `text` centred on `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64, color: &str) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize {
        width: f64,
        height: f64,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeLines {
        lines: Vec<Line>,
        color: String,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font_px: f64,
        color: String,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.calls.push(DrawCall::Resize { width, height });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<()> {
        self.calls.push(DrawCall::FillRect {
            rect,
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_lines(&mut self, lines: &[Line], color: &str) -> Result<()> {
        self.calls.push(DrawCall::StrokeLines {
            lines: lines.to_vec(),
            color: color.to_string(),
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64, color: &str) -> Result<()> {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
            font_px,
            color: color.to_string(),
        });
        Ok(())
    }
}
