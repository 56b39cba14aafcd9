use crate::engine::StrokeStyle;
use bon::Builder;
use glam::DVec2;

/// Settings for a `DrawingSurface`.
///
/// ```ignore
/// let config = SurfaceConfig::builder().inset(40.0).build();
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
	/// Subtracted from the viewport's width and height to size the surface.
	#[builder(default = 20.0)]
	pub inset: f64,

	/// Border width in CSS pixels.
	#[builder(default = 2)]
	pub border_width: u32,

	/// Style in effect before the user touches either control.
	#[builder(default)]
	pub initial_style: StrokeStyle,
}

impl Default for SurfaceConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl SurfaceConfig {
	/// Pixel size of the surface for a viewport of the given size. This is evaluated once, at
	/// mount; later viewport changes do not resize the surface.
	pub fn surface_size(&self, viewport: DVec2) -> (u32, u32) {
		let size = (viewport - DVec2::splat(self.inset)).max(DVec2::ZERO);
		(size.x as u32, size.y as u32)
	}

	pub fn surface_css(&self) -> String {
		format!(
			"border: {}px solid #000; margin-top: 10px; touch-action: none;",
			self.border_width
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{StrokeColor, StrokeWidth};

	#[test]
	fn defaults() {
		let config = SurfaceConfig::default();
		assert_eq!(config.inset, 20.0);
		assert_eq!(config.border_width, 2);
		assert_eq!(config.initial_style, StrokeStyle::default());
	}

	#[test]
	fn builder_overrides() {
		let style = StrokeStyle::new(StrokeColor::parse("#123456").unwrap(), StrokeWidth::new(3));
		let config = SurfaceConfig::builder()
			.inset(0.0)
			.border_width(0)
			.initial_style(style.clone())
			.build();
		assert_eq!(config.inset, 0.0);
		assert_eq!(config.border_width, 0);
		assert_eq!(config.initial_style, style);
	}

	#[test]
	fn surface_size_subtracts_inset() {
		let config = SurfaceConfig::default();
		assert_eq!(config.surface_size(DVec2::new(1280.0, 720.0)), (1260, 700));
		assert_eq!(config.surface_size(DVec2::new(1280.9, 720.5)), (1260, 700));
	}

	#[test]
	fn surface_size_never_negative() {
		let config = SurfaceConfig::default();
		assert_eq!(config.surface_size(DVec2::new(10.0, 500.0)), (0, 480));
	}

	#[test]
	fn css_includes_border() {
		let config = SurfaceConfig::builder().border_width(5).build();
		assert!(config.surface_css().contains("border: 5px solid #000"));
		assert!(config.surface_css().contains("touch-action: none"));
	}
}
