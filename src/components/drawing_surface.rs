use crate::components::*;
use crate::config::SurfaceConfig;
use crate::engine::{Pen, StrokeStyle};
use crate::input::PointerListeners;
use crate::render::acquire_context;
use crate::util::{viewport_size, ResultExt};
use leptos::*;

/// A fixed-size canvas that paints freehand strokes, with color and width controls.
///
/// The surface is sized from the viewport once, when the component is created. Resizing the
/// window afterwards neither resizes the canvas nor preserves what was drawn if the canvas is
/// recreated.
#[component]
pub fn DrawingSurface(#[prop(optional)] config: Option<SurfaceConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();

	let color = create_rw_signal(config.initial_style.color.clone());
	let width = create_rw_signal(config.initial_style.width);
	let style = Signal::derive(move || StrokeStyle::new(color.get(), width.get()));

	let (surface_width, surface_height) = config.surface_size(viewport_size().unwrap_or_default());

	let canvas_ref = create_node_ref::<html::Canvas>();
	let listeners = store_value(None::<PointerListeners>);

	// Runs once per canvas element. Gesture state lives in the listeners, outside the reactive
	// graph, so pointer moves never cause reactive updates.
	create_effect(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		listeners.set_value(None);

		// Without a context the listeners still run but nothing is drawn.
		let handle = acquire_context(&canvas).ok_or_log();
		let pen = Pen::new(handle);
		let current_style = move || style.try_get_untracked().unwrap_or_default();
		listeners.set_value(PointerListeners::attach(&canvas, pen, current_style).ok_or_log());
	});

	on_cleanup(move || {
		listeners.try_update_value(|listeners| listeners.take());
	});

	view! {
		<div class="DrawingSurface" style="text-align: center;">
			<div class="BrushSettings">
				<BrushSetting name="Color">
					<ColorInput color=color/>
				</BrushSetting>
				<BrushSetting name="Width">
					<WidthInput width=width/>
				</BrushSetting>
			</div>
			<canvas
				class="Surface"
				node_ref=canvas_ref
				width=surface_width
				height=surface_height
				style=config.surface_css()
			></canvas>
		</div>
	}
}
