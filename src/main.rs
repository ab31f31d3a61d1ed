use leptos::prelude::*;
use shortest_path_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| view! { <App /> })
}
