pub(crate) mod util;
pub use util::JsError;

mod components;
pub use components::DrawingSurface;

pub mod config;
pub mod engine;
pub mod input;
pub mod logging;
mod pages;
pub mod render;


use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html lang="en" dir="ltr"/>

		<Title formatter=|page| format!("Freehand - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes>
				<Route path="/" view=pages::Home/>
				<Route path="/*any" view=pages::NotFound/>
			</Routes>
		</Router>
	}
}
