use crate::engine::{Segment, StrokeStyle};
use crate::util::JsError;
use wasm_bindgen::JsCast;

mod canvas2d;

/// Something segments can be painted onto.
///
/// Implementations paint immediately and retain nothing; a segment, once drawn, is never
/// revisited.
pub trait RenderingHandle {
	fn draw_segment(&self, segment: &Segment, style: &StrokeStyle);
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	#[error("2d rendering context unsupported")]
	Unsupported,

	#[error("unexpected rendering context type")]
	UnexpectedContext,

	#[error("failed to get rendering context")]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(RenderError: std::error::Error, Send, Sync);

/// Acquires the 2D rendering context of `canvas`.
#[tracing::instrument(err, skip(canvas))]
pub fn acquire_context(
	canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, RenderError> {
	canvas
		.get_context("2d")
		.map_err(JsError::from)?
		.ok_or(RenderError::Unsupported)?
		.dyn_into::<web_sys::CanvasRenderingContext2d>()
		.map_err(|_| RenderError::UnexpectedContext)
}
