mod result_ext;
pub use result_ext::*;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

pub trait CoordinateSource {
	/// Position of the event in client (viewport) coordinates.
	fn client_position(&self) -> glam::DVec2;
}

impl CoordinateSource for web_sys::MouseEvent {
	fn client_position(&self) -> glam::DVec2 {
		glam::DVec2::new(self.client_x() as f64, self.client_y() as f64)
	}
}

/// Viewport position of the top-left corner of `element`'s padding box, just inside its border.
///
/// Read from the live layout, so it follows scrolling and any layout shift since mount.
pub fn content_origin(element: &web_sys::Element) -> glam::DVec2 {
	let rect = element.get_bounding_client_rect();
	glam::DVec2::new(
		rect.left() + element.client_left() as f64,
		rect.top() + element.client_top() as f64,
	)
}

/// Current inner size of the browser window, if there is one.
pub fn viewport_size() -> Option<glam::DVec2> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok_or_log_js()?.as_f64()?;
	let height = window.inner_height().ok_or_log_js()?.as_f64()?;
	Some(glam::DVec2::new(width, height))
}
