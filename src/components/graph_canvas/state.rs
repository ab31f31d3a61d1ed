use log::{info, warn};

use crate::graph::{GraphError, GraphResult, GraphStore, NodeId, Path, parse_graph, shortest_path};

use super::render::Renderer;
use super::surface::DrawingSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadSummary {
	pub nodes: usize,
	pub edges: usize,
}

/// Application state behind the canvas: the loaded graph plus whatever path
/// is currently highlighted. Every operation either fully succeeds or leaves
/// the state as it was.
#[derive(Default)]
pub struct GraphCanvasState {
	store: GraphStore,
	highlight: Path,
	renderer: Renderer,
	pub width: f64,
	pub height: f64,
}

impl GraphCanvasState {
	pub fn new(renderer: Renderer, width: f64, height: f64) -> Self {
		Self {
			store: GraphStore::new(),
			highlight: Path::empty(),
			renderer,
			width,
			height,
		}
	}

	#[cfg(test)]
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	#[cfg(test)]
	pub fn highlight(&self) -> &Path {
		&self.highlight
	}

	pub fn load_markup(&mut self, markup: &str) -> GraphResult<LoadSummary> {
		let data = parse_graph(markup).inspect_err(|e| warn!("Rejected graph file: {e}"))?;
		self.store
			.load(data.nodes, data.edges)
			.inspect_err(|e| warn!("Rejected graph file: {e}"))?;
		self.highlight = Path::empty();
		Ok(LoadSummary {
			nodes: self.store.node_count(),
			edges: self.store.edge_count(),
		})
	}

	pub fn request_path(&mut self, start: NodeId, end: NodeId) -> GraphResult<&Path> {
		let path = shortest_path(self.store.graph(), start, end)
			.inspect_err(|e| warn!("Path request {start} -> {end} failed: {e}"))?;
		info!(
			"Path {start} -> {end}: {} edges, total weight {}",
			path.len(),
			path.total_weight()
		);
		self.highlight = path;
		Ok(&self.highlight)
	}

	pub fn draw(&self, surface: &mut impl DrawingSurface) -> GraphResult<()> {
		self.renderer
			.draw(self.store.graph(), &self.highlight, surface)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Parses prompt text as a node id.
pub fn parse_node_id(input: &str) -> GraphResult<NodeId> {
	let trimmed = input.trim();
	trimmed
		.parse()
		.map_err(|_| GraphError::InvalidNodeInput(trimmed.to_owned()))
}

/// Error line for a file the browser could not read.
pub fn describe_read_failure(file_name: &str) -> String {
	if file_name.is_empty() {
		"Could not read the selected file".to_owned()
	} else {
		format!("Could not read {file_name}")
	}
}

/// One-line description of a path result for the status bar.
pub fn describe_path(path: &Path, start: NodeId, end: NodeId) -> String {
	if start == end {
		return format!("Already at node {start}");
	}
	if path.is_empty() {
		return format!("No path from {start} to {end}");
	}
	let chain = path
		.node_chain(start)
		.iter()
		.map(|id| id.to_string())
		.collect::<Vec<_>>()
		.join(" → ");
	format!("Path {chain}, total weight {}", path.total_weight())
}
