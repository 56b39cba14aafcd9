use crate::engine::{StrokeColor, StrokeWidth};
use crate::util::ResultExt;
use leptos::*;

#[component]
pub fn ColorInput(color: RwSignal<StrokeColor>) -> impl IntoView {
	let on_input = move |ev: leptos::ev::Event| {
		// An unparsable value keeps the previous color.
		if let Some(parsed) = StrokeColor::parse(&event_target_value(&ev)).ok_or_log() {
			color.set(parsed);
		}
	};

	view! {
		<input
			type="color"
			class="ColorInput"
			prop:value=move || color.get().to_string()
			on:input=on_input
		/>
	}
}

/// Range control for the stroke width. The browser enforces `min`/`max`, and the parser clamps
/// again for values that bypass the control.
#[component]
pub fn WidthInput(width: RwSignal<StrokeWidth>) -> impl IntoView {
	let on_input = move |ev: leptos::ev::Event| {
		let value = event_target_value(&ev);
		match StrokeWidth::parse(&value) {
			Some(parsed) => width.set(parsed),
			None => tracing::warn!(%value, "ignoring non-numeric width"),
		}
	};

	view! {
		<input
			type="range"
			class="WidthInput"
			min=StrokeWidth::MIN.to_string()
			max=StrokeWidth::MAX.to_string()
			step="1"
			prop:value=move || width.get().to_string()
			on:input=on_input
		/>
		<span class="WidthValue">{move || width.get().to_string()}</span>
	}
}
