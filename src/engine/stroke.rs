use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
	#[error("invalid stroke color {value:?}")]
	InvalidColor {
		value: String,
		#[source]
		source: csscolorparser::ParseColorError,
	},
}

static_assertions::assert_impl_all!(StyleError: std::error::Error, Send, Sync);

/// A stroke color, normalized to lowercase `#rrggbb`. Alpha is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StrokeColor(String);

impl StrokeColor {
	pub fn parse(value: &str) -> Result<Self, StyleError> {
		let color = csscolorparser::parse(value).map_err(|source| StyleError::InvalidColor {
			value: value.to_owned(),
			source,
		})?;
		let [r, g, b, _] = color.to_rgba8();
		Ok(Self(format!("#{r:02x}{g:02x}{b:02x}")))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for StrokeColor {
	fn default() -> Self {
		Self("#ffff00".to_owned())
	}
}

impl fmt::Display for StrokeColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Line width in CSS pixels, always within `StrokeWidth::MIN..=StrokeWidth::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct StrokeWidth(u32);

impl StrokeWidth {
	pub const MIN: u32 = 1;
	pub const MAX: u32 = 100;

	/// Clamps `width` into range.
	pub fn new(width: u32) -> Self {
		Self(width.clamp(Self::MIN, Self::MAX))
	}

	/// Parses the value of a width control. Out-of-range numbers are clamped and fractional ones
	/// rounded; anything that is not a number yields `None`.
	pub fn parse(value: &str) -> Option<Self> {
		let width: f64 = value.trim().parse().ok()?;
		if width.is_nan() {
			return None;
		}
		let width = width.round().clamp(Self::MIN as f64, Self::MAX as f64);
		Some(Self(width as u32))
	}

	pub fn get(self) -> u32 {
		self.0
	}
}

impl Default for StrokeWidth {
	fn default() -> Self {
		Self(10)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrokeStyle {
	pub color: StrokeColor,
	pub width: StrokeWidth,
}

impl StrokeStyle {
	pub fn new(color: StrokeColor, width: StrokeWidth) -> Self {
		Self { color, width }
	}

	/// Segments are always capped round so consecutive segments join without gaps.
	pub fn line_cap(&self) -> &'static str {
		"round"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn width_is_clamped() {
		assert_eq!(StrokeWidth::new(0).get(), 1);
		assert_eq!(StrokeWidth::new(1).get(), 1);
		assert_eq!(StrokeWidth::new(55).get(), 55);
		assert_eq!(StrokeWidth::new(100).get(), 100);
		assert_eq!(StrokeWidth::new(101).get(), 100);
		assert_eq!(StrokeWidth::new(u32::MAX).get(), 100);
	}

	#[test]
	fn width_parse() {
		assert_eq!(StrokeWidth::parse("42"), Some(StrokeWidth::new(42)));
		assert_eq!(StrokeWidth::parse(" 7 "), Some(StrokeWidth::new(7)));
		assert_eq!(StrokeWidth::parse("2.6"), Some(StrokeWidth::new(3)));
		assert_eq!(StrokeWidth::parse("-5"), Some(StrokeWidth::new(1)));
		assert_eq!(StrokeWidth::parse("0"), Some(StrokeWidth::new(1)));
		assert_eq!(StrokeWidth::parse("250"), Some(StrokeWidth::new(100)));
		assert_eq!(StrokeWidth::parse("1e9"), Some(StrokeWidth::new(100)));
		assert_eq!(StrokeWidth::parse(""), None);
		assert_eq!(StrokeWidth::parse("wide"), None);
		assert_eq!(StrokeWidth::parse("NaN"), None);
	}

	#[test]
	fn width_display() {
		assert_eq!(StrokeWidth::new(12).to_string(), "12");
	}

	#[test]
	fn color_parse_normalizes() {
		assert_eq!(StrokeColor::parse("#FF8800").unwrap().as_str(), "#ff8800");
		assert_eq!(StrokeColor::parse("#ff0").unwrap().as_str(), "#ffff00");
		assert_eq!(StrokeColor::parse("red").unwrap().as_str(), "#ff0000");
	}

	#[test]
	fn color_parse_rejects_garbage() {
		let err = StrokeColor::parse("not a color").unwrap_err();
		assert!(matches!(err, StyleError::InvalidColor { ref value, .. } if value == "not a color"));
	}

	#[test]
	fn default_style() {
		let style = StrokeStyle::default();
		assert_eq!(style.color.as_str(), "#ffff00");
		assert_eq!(style.width.get(), 10);
		assert_eq!(style.line_cap(), "round");
	}
}
