use super::JsError;

pub trait ResultExt<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self.inspect_err(|err| tracing::error!("{}", err)).ok()
	}
}

/// `JsValue` has no `Display`, so browser results go through `JsError` first.
pub trait JsResultExt<T> {
	fn ok_or_log_js(self) -> Option<T>;
}

impl<T> JsResultExt<T> for Result<T, wasm_bindgen::JsValue> {
	fn ok_or_log_js(self) -> Option<T> {
		self.map_err(JsError::from).ok_or_log()
	}
}
