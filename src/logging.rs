use tracing::Level;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid log level {0:?}")]
pub struct InvalidLevel(String);

/// Compile-time override for the maximum log level, e.g. `FREEHAND_LOG=debug trunk serve`.
const LEVEL_OVERRIDE: Option<&str> = option_env!("FREEHAND_LOG");

fn default_level() -> Level {
	if cfg!(debug_assertions) {
		Level::TRACE
	} else {
		Level::INFO
	}
}

/// Resolves the maximum level from an optional override.
pub fn max_level(level_override: Option<&str>) -> Result<Level, InvalidLevel> {
	match level_override {
		None => Ok(default_level()),
		Some(level) => level
			.trim()
			.parse()
			.map_err(|_| InvalidLevel(level.to_owned())),
	}
}

fn configure_tracing(max_level: Level) -> anyhow::Result<()> {
	let result = Err(NoTracingSubscriber);

	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	let result = result.or_else(|_| {
		use tracing_subscriber::layer::SubscriberExt;
		let config = tracing_wasm::WASMLayerConfigBuilder::new()
			.set_max_level(max_level)
			.build();
		tracing::subscriber::set_global_default(
			tracing_subscriber::registry().with(tracing_wasm::WASMLayer::new(config)),
		)
	});

	let result = result.or_else(|_| {
		tracing::subscriber::set_global_default(
			tracing_subscriber::FmtSubscriber::builder()
				.with_max_level(max_level)
				.finish(),
		)
	});

	Ok(result?)
}

/// Installs the global tracing subscriber and, with the "log" feature, forwards `log` records
/// from dependencies into it.
pub fn init() -> anyhow::Result<()> {
	let level = max_level(LEVEL_OVERRIDE);
	configure_tracing(level.as_ref().copied().unwrap_or_else(|_| default_level()))?;
	if let Err(err) = level {
		tracing::warn!(%err, "falling back to default log level");
	}

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, the
	// reverse is what happens if we fail to set the global subscriber above.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_when_unset() {
		assert_eq!(max_level(None), Ok(default_level()));
	}

	#[test]
	fn override_is_parsed() {
		assert_eq!(max_level(Some("debug")), Ok(Level::DEBUG));
		assert_eq!(max_level(Some(" WARN ")), Ok(Level::WARN));
		assert_eq!(max_level(Some("error")), Ok(Level::ERROR));
	}

	#[test]
	fn invalid_override_is_reported() {
		assert_eq!(
			max_level(Some("loud")),
			Err(InvalidLevel("loud".to_owned()))
		);
	}
}
