use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, FileReader, HtmlCanvasElement, Window};

use super::render::{RenderStyle, Renderer};
use super::state::{GraphCanvasState, describe_path, describe_read_failure, parse_node_id};
use super::surface::CanvasSurface;
use crate::graph::{GraphResult, NodeId};

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

fn redraw(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) -> GraphResult<()> {
	let mut surface = CanvasSurface::new(ctx, state.width, state.height);
	state.draw(&mut surface)
}

/// Asks for start and end ids; `Ok(None)` if the user cancels either prompt.
fn prompt_endpoints(window: &Window) -> GraphResult<Option<(NodeId, NodeId)>> {
	let ask = |message: &str| window.prompt_with_message(message).ok().flatten();
	let Some(start) = ask("Start node id:") else {
		return Ok(None);
	};
	let start = parse_node_id(&start)?;
	let Some(end) = ask("End node id:") else {
		return Ok(None);
	};
	Ok(Some((start, parse_node_id(&end)?)))
}

#[component]
pub fn GraphCanvas(
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = None)] initial_markup: Option<&'static str>,
	#[prop(optional)] style: Option<RenderStyle>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let file_ref = NodeRef::<leptos::html::Input>::new();
	let state = Rc::new(RefCell::new(GraphCanvasState::new(
		Renderer::new(style.unwrap_or_default()),
		width.unwrap_or(DEFAULT_WIDTH),
		height.unwrap_or(DEFAULT_HEIGHT),
	)));
	let ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let (status, set_status) = signal(String::from("Choose a graph file to begin."));
	let (error_msg, set_error_msg) = signal(None::<String>);

	let (state_init, ctx_init) = (state.clone(), ctx.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|&v| v > 0.0)
					.unwrap_or(DEFAULT_WIDTH)
			}),
			height.unwrap_or(DEFAULT_HEIGHT),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let context = match canvas.get_context("2d") {
			Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(context) = context else {
			error!("2D canvas context unavailable");
			return;
		};

		let mut s = state_init.borrow_mut();
		s.resize(w, h);
		if let Some(markup) = initial_markup {
			match s.load_markup(markup) {
				Ok(summary) => set_status.set(format!(
					"Loaded {} nodes and {} edges",
					summary.nodes, summary.edges
				)),
				Err(e) => set_error_msg.set(Some(e.to_string())),
			}
		}
		if let Err(e) = redraw(&s, &context) {
			set_error_msg.set(Some(e.to_string()));
		}
		*ctx_init.borrow_mut() = Some(context);
	});

	let (state_fc, ctx_fc) = (state.clone(), ctx.clone());
	let on_file_change = move |_| {
		let Some(input) = file_ref.get() else {
			return;
		};
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		let reader = match FileReader::new() {
			Ok(reader) => reader,
			Err(e) => {
				error!("FileReader unavailable: {e:?}");
				return;
			}
		};

		let (state_load, ctx_load, reader_load) = (state_fc.clone(), ctx_fc.clone(), reader.clone());
		let onload = Closure::once_into_js(move || {
			let Some(text) = reader_load.result().ok().and_then(|v| v.as_string()) else {
				set_error_msg.set(Some(describe_read_failure("")));
				return;
			};
			let mut state = state_load.borrow_mut();
			match state.load_markup(&text) {
				Ok(summary) => {
					set_error_msg.set(None);
					set_status.set(format!(
						"Loaded {} nodes and {} edges",
						summary.nodes, summary.edges
					));
				}
				Err(e) => {
					set_error_msg.set(Some(e.to_string()));
					return;
				}
			}
			if let Some(ctx) = ctx_load.borrow().as_ref() {
				if let Err(e) = redraw(&state, ctx) {
					set_error_msg.set(Some(e.to_string()));
				}
			}
		});
		let (name, reader_err) = (file.name(), reader.clone());
		let onerror = Closure::once_into_js(move || {
			error!("Reading {name} failed: {:?}", reader_err.error());
			set_error_msg.set(Some(describe_read_failure(&name)));
		});
		reader.set_onload(Some(onload.unchecked_ref::<js_sys::Function>()));
		reader.set_onerror(Some(onerror.unchecked_ref::<js_sys::Function>()));
		if let Err(e) = reader.read_as_text(&file) {
			error!("Reading {} failed: {e:?}", file.name());
			set_error_msg.set(Some(describe_read_failure(&file.name())));
		}
		// Lets the same file be picked again after editing it.
		input.set_value("");
	};

	let (state_fp, ctx_fp) = (state.clone(), ctx.clone());
	let on_find_path = move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let (start, end) = match prompt_endpoints(&window) {
			Ok(Some(endpoints)) => endpoints,
			Ok(None) => return,
			Err(e) => {
				set_error_msg.set(Some(e.to_string()));
				return;
			}
		};

		let mut state = state_fp.borrow_mut();
		match state.request_path(start, end) {
			Ok(path) => {
				set_status.set(describe_path(path, start, end));
				set_error_msg.set(None);
			}
			Err(e) => {
				set_error_msg.set(Some(e.to_string()));
				return;
			}
		}
		if let Some(ctx) = ctx_fp.borrow().as_ref() {
			if let Err(e) = redraw(&state, ctx) {
				set_error_msg.set(Some(e.to_string()));
			}
		}
	};

	view! {
		<div class="graph-canvas">
			<div class="graph-toolbar">
				<input
					node_ref=file_ref
					type="file"
					accept=".xml,application/xml,text/xml"
					on:change=on_file_change
				/>
				<button on:click=on_find_path>"Find path"</button>
				<span class="graph-status">{move || status.get()}</span>
			</div>
			{move || error_msg.get().map(|msg| view! { <p class="graph-error">{msg}</p> })}
			<canvas node_ref=canvas_ref class="graph-canvas-surface" style="display: block;" />
		</div>
	}
}
