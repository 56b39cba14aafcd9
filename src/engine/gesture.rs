use glam::DVec2;

/// Offset in CSS pixels from the top-left corner of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition(pub DVec2);

impl PointerPosition {
	pub fn new(x: f64, y: f64) -> Self {
		Self(DVec2::new(x, y))
	}

	/// Converts client (viewport) coordinates into surface coordinates given the surface's origin.
	pub fn from_client(client: DVec2, origin: DVec2) -> Self {
		Self(client - origin)
	}

	pub fn x(self) -> f64 {
		self.0.x
	}

	pub fn y(self) -> f64 {
		self.0.y
	}
}

/// One line between two consecutive pointer positions. `from == to` is a dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: PointerPosition,
	pub to: PointerPosition,
}

impl Segment {
	pub fn is_dot(&self) -> bool {
		self.from == self.to
	}

	pub fn length(&self) -> f64 {
		self.from.0.distance(self.to.0)
	}
}

/// Tracks a single press-to-release drag.
///
/// `previous` always holds the position reported by the event before `current`, except right
/// after a press, when both are the press position.
#[derive(Clone, Debug, Default)]
pub struct Gesture {
	active: bool,
	previous: PointerPosition,
	current: PointerPosition,
}

impl Gesture {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn previous(&self) -> PointerPosition {
		self.previous
	}

	pub fn current(&self) -> PointerPosition {
		self.current
	}

	pub fn press(&mut self, at: PointerPosition) {
		self.active = true;
		self.previous = at;
		self.current = at;
	}

	/// Moves the pointer to `at`, returning the segment it traced, or `None` when no drag is in
	/// progress.
	pub fn advance(&mut self, at: PointerPosition) -> Option<Segment> {
		if !self.active {
			return None;
		}
		self.previous = self.current;
		self.current = at;
		Some(Segment {
			from: self.previous,
			to: self.current,
		})
	}

	pub fn release(&mut self) {
		self.active = false;
	}
}
