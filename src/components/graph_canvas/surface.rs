use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::Point;

/// Colour and width of a line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
	pub color: String,
	pub width: f64,
}

/// How text is positioned relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Text starts at the anchor point, baseline through it.
	Start,
	/// Text is centred horizontally and vertically on the anchor point.
	Center,
}

/// Colour, CSS font and anchoring of a text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	pub color: String,
	pub font: String,
	pub anchor: TextAnchor,
}

/// The primitive operations the renderer needs from a 2D target.
pub trait DrawingSurface {
	/// Erases the whole surface.
	fn clear(&mut self);
	/// Draws a straight segment between two points.
	fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle);
	/// Draws a filled disc.
	fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
	/// Draws a text label at `at`, placed according to the style's anchor.
	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
}

/// [`DrawingSurface`] over a browser 2D canvas context.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self { ctx, width, height }
	}
}

impl DrawingSurface for CanvasSurface<'_> {
	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
		self.ctx.set_stroke_style_str(&style.color);
		self.ctx.set_line_width(style.width);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(color);
		self.ctx.fill();
	}

	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
		let (align, baseline) = match style.anchor {
			TextAnchor::Start => ("start", "alphabetic"),
			TextAnchor::Center => ("center", "middle"),
		};
		self.ctx.set_text_align(align);
		self.ctx.set_text_baseline(baseline);
		self.ctx.set_font(&style.font);
		self.ctx.set_fill_style_str(&style.color);
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
