use super::RenderingHandle;
use crate::engine::{Segment, StrokeStyle};
use wasm_bindgen::JsValue;

impl RenderingHandle for web_sys::CanvasRenderingContext2d {
	fn draw_segment(&self, segment: &Segment, style: &StrokeStyle) {
		let Segment { from, to } = segment;
		self.begin_path();
		self.move_to(from.x(), from.y());
		self.line_to(to.x(), to.y());

		// `set_stroke_style_str` only exists on newer `web-sys`.
		#[allow(deprecated)]
		self.set_stroke_style(&JsValue::from_str(style.color.as_str()));
		self.set_line_width(style.width.get() as f64);
		self.set_line_cap(style.line_cap());
		self.stroke();
		self.close_path();
	}
}
