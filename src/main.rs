fn main() {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	if let Err(error) = freehand::logging::init() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	leptos::mount_to_body(freehand::App)
}
