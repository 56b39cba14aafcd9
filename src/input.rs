//! Wiring of browser pointer events to a [`Pen`].
//!
//! Only `pointerdown`, `pointermove` and `pointerup` on the surface itself are observed. A
//! release outside the surface is never seen, so a drag that leaves the surface keeps drawing when
//! the pointer comes back, until the next press or release over the surface.
//!
//! Events from non-primary pointers, such as a second finger on a touch screen, are ignored, so
//! only one pointer draws at a time.

use crate::engine::{Pen, PointerPosition, StrokeStyle};
use crate::render::RenderingHandle;
use crate::util::{content_origin, CoordinateSource, JsError, ResultExt};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const POINTER_DOWN: &str = "pointerdown";
pub const POINTER_MOVE: &str = "pointermove";
pub const POINTER_UP: &str = "pointerup";

type PointerHandler = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Pointer listeners registered on one surface element.
///
/// The listeners stay attached for as long as this value lives; dropping it removes all of them.
pub struct PointerListeners {
	target: web_sys::EventTarget,
	handlers: Vec<(&'static str, PointerHandler)>,
}

impl PointerListeners {
	/// Attaches press, move and release listeners to `canvas` that drive `pen`.
	///
	/// `style` is called on every event that draws, so style changes take effect on the very next
	/// segment. Positions are relative to the inside of the canvas's border, measured against the
	/// canvas's layout at the time of each event.
	pub fn attach<H, S>(
		canvas: &web_sys::HtmlCanvasElement,
		pen: Pen<H>,
		style: S,
	) -> Result<Self, JsError>
	where
		H: RenderingHandle + 'static,
		S: Fn() -> StrokeStyle + 'static,
	{
		let surface = canvas.clone();
		let locate = move |e: &web_sys::PointerEvent| {
			PointerPosition::from_client(e.client_position(), content_origin(&surface))
		};

		let pen = Rc::new(RefCell::new(pen));
		let style = Rc::new(style);

		let mut listeners = Self {
			target: canvas.clone().into(),
			handlers: Vec::with_capacity(3),
		};

		{
			let pen = pen.clone();
			let style = style.clone();
			let locate = locate.clone();
			listeners.listen(POINTER_DOWN, move |e| {
				if !e.is_primary() {
					return;
				}
				pen.borrow_mut().press(locate(&e), &(*style)());
			})?;
		}
		{
			let pen = pen.clone();
			listeners.listen(POINTER_MOVE, move |e| {
				if !e.is_primary() {
					return;
				}
				let mut pen = pen.borrow_mut();
				// Only read the style when a segment can be drawn.
				if pen.is_drawing() {
					pen.motion(locate(&e), &(*style)());
				}
			})?;
		}
		listeners.listen(POINTER_UP, move |e| {
			if e.is_primary() {
				pen.borrow_mut().release();
			}
		})?;

		tracing::debug!(origin = ?content_origin(canvas), "attached pointer listeners");
		Ok(listeners)
	}

	fn listen(
		&mut self,
		event: &'static str,
		handler: impl FnMut(web_sys::PointerEvent) + 'static,
	) -> Result<(), JsError> {
		let handler = PointerHandler::new(handler);
		self
			.target
			.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
		self.handlers.push((event, handler));
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}
}

impl Drop for PointerListeners {
	fn drop(&mut self) {
		for (event, handler) in self.handlers.drain(..) {
			self
				.target
				.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
				.map_err(JsError::from)
				.ok_or_log();
		}
		tracing::debug!("detached pointer listeners");
	}
}
