use crate::graph::{Graph, GraphError, GraphResult, Path};

use super::surface::{DrawingSurface, StrokeStyle, TextAnchor, TextStyle};

pub const NODE_RADIUS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	pub node_radius: f64,
	pub node_fill: String,
	pub edge: StrokeStyle,
	pub highlight: StrokeStyle,
	pub node_label: TextStyle,
	pub weight_label: TextStyle,
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self {
			node_radius: NODE_RADIUS,
			node_fill: "purple".into(),
			edge: StrokeStyle {
				color: "gray".into(),
				width: 1.0,
			},
			highlight: StrokeStyle {
				color: "#f5c400".into(),
				width: 3.0,
			},
			node_label: TextStyle {
				color: "white".into(),
				font: "11px sans-serif".into(),
				anchor: TextAnchor::Center,
			},
			weight_label: TextStyle {
				color: "black".into(),
				font: "12px sans-serif".into(),
				anchor: TextAnchor::Start,
			},
		}
	}
}

/// Stateless painter: the same inputs always produce the same calls.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
	style: RenderStyle,
}

impl Renderer {
	pub fn new(style: RenderStyle) -> Self {
		Self { style }
	}

	#[cfg(test)]
	pub fn style(&self) -> &RenderStyle {
		&self.style
	}

	/// Clears the surface and paints every edge, then every node on top.
	pub fn draw(
		&self,
		graph: &Graph,
		highlight: &Path,
		surface: &mut impl DrawingSurface,
	) -> GraphResult<()> {
		surface.clear();
		draw_edges(&self.style, graph, highlight, surface)?;
		draw_nodes(&self.style, graph, surface);
		Ok(())
	}
}

fn draw_edges(
	style: &RenderStyle,
	graph: &Graph,
	highlight: &Path,
	surface: &mut impl DrawingSurface,
) -> GraphResult<()> {
	for (index, edge) in graph.edges().iter().enumerate() {
		let endpoint = |id| {
			graph
				.find_node(id)
				.map(|n| n.position())
				.ok_or(GraphError::DanglingEdge {
					from: edge.from,
					to: edge.to,
					missing: id,
				})
		};
		let (start, end) = (endpoint(edge.from)?, endpoint(edge.to)?);

		let stroke = if highlight.contains(index) {
			&style.highlight
		} else {
			&style.edge
		};
		surface.stroke_line(start, end, stroke);
		surface.fill_text(
			&edge.weight.to_string(),
			start.midpoint(end),
			&style.weight_label,
		);
	}
	Ok(())
}

fn draw_nodes(style: &RenderStyle, graph: &Graph, surface: &mut impl DrawingSurface) {
	for node in graph.nodes() {
		let center = node.position();
		surface.fill_circle(center, style.node_radius, &style.node_fill);
		surface.fill_text(&node.id.to_string(), center, &style.node_label);
	}
}
