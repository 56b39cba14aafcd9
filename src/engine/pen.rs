use super::{Gesture, PointerPosition, Segment, StrokeStyle};
use crate::render::RenderingHandle;

/// Turns pointer events into segments drawn through a rendering handle.
///
/// Without a handle (the surface could not provide a 2D context) the pen still tracks presses and
/// releases but never draws, and moves leave the gesture untouched.
pub struct Pen<H> {
	gesture: Gesture,
	handle: Option<H>,
}

impl<H: RenderingHandle> Pen<H> {
	pub fn new(handle: Option<H>) -> Self {
		Self {
			gesture: Gesture::new(),
			handle,
		}
	}

	pub fn can_draw(&self) -> bool {
		self.handle.is_some()
	}

	pub fn is_drawing(&self) -> bool {
		self.gesture.is_active()
	}

	pub fn gesture(&self) -> &Gesture {
		&self.gesture
	}

	/// Starts a gesture at `at` and immediately paints a dot there.
	pub fn press(&mut self, at: PointerPosition, style: &StrokeStyle) -> Option<Segment> {
		tracing::debug!(x = at.x(), y = at.y(), "press");
		self.gesture.press(at);
		self.motion(at, style)
	}

	/// Draws from the last position to `at` using `style`, which the caller must read at the time
	/// of the event.
	pub fn motion(&mut self, at: PointerPosition, style: &StrokeStyle) -> Option<Segment> {
		let handle = self.handle.as_ref()?;
		let segment = self.gesture.advance(at)?;
		tracing::trace!(?segment, length = segment.length(), color = %style.color, width = style.width.get(), "segment");
		handle.draw_segment(&segment, style);
		Some(segment)
	}

	pub fn release(&mut self) {
		if self.gesture.is_active() {
			tracing::debug!("release");
		}
		self.gesture.release();
	}
}
