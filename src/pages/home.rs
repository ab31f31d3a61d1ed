use leptos::prelude::*;

use crate::components::graph_canvas::GraphCanvas;

/// Shown until the user picks a file of their own.
const SAMPLE_GRAPH: &str = r#"<graph>
	<point id="1" x="80" y="80"/>
	<point id="2" x="260" y="60"/>
	<point id="3" x="420" y="140"/>
	<point id="4" x="140" y="260"/>
	<point id="5" x="330" y="300"/>
	<point id="6" x="520" y="320"/>
	<line from="1" to="2" weight="7"/>
	<line from="1" to="4" weight="9"/>
	<line from="1" to="5" weight="14"/>
	<line from="2" to="3" weight="10"/>
	<line from="2" to="4" weight="15"/>
	<line from="3" to="4" weight="11"/>
	<line from="3" to="6" weight="2"/>
	<line from="4" to="5" weight="2"/>
	<line from="5" to="6" weight="9"/>
</graph>"#;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<h1>"Shortest Path"</h1>
				<p class="subtitle">
					"Load an XML file of points and lines, then pick two node ids to highlight the cheapest route."
				</p>
				<GraphCanvas initial_markup=Some(SAMPLE_GRAPH) />
			</div>
		</ErrorBoundary>
	}
}
