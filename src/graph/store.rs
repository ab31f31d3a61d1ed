//! Validated graph storage.
//!
//! [`Graph`] is immutable once built and always satisfies the endpoint
//! invariant: every edge references nodes that exist. [`GraphStore`] owns the
//! current graph and swaps it wholesale on each load.

use std::collections::HashMap;

use log::{debug, info};

use super::error::{GraphError, GraphResult};
use super::types::{Edge, EdgeIndex, Node, NodeId};

/// A validated set of nodes and the edges between them.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	id_to_idx: HashMap<NodeId, usize>,
	adjacency: HashMap<NodeId, Vec<EdgeIndex>>,
}

impl Graph {
	/// Builds a graph, rejecting duplicate node ids and dangling edges.
	///
	/// Node and edge order is preserved. Parallel edges and self-loops are
	/// kept as given.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
		let mut id_to_idx = HashMap::with_capacity(nodes.len());
		let mut adjacency: HashMap<NodeId, Vec<EdgeIndex>> = HashMap::with_capacity(nodes.len());

		for (i, node) in nodes.iter().enumerate() {
			if id_to_idx.insert(node.id, i).is_some() {
				return Err(GraphError::DuplicateNode(node.id));
			}
			adjacency.insert(node.id, Vec::new());
		}

		for (i, edge) in edges.iter().enumerate() {
			for end in [edge.from, edge.to] {
				if !id_to_idx.contains_key(&end) {
					return Err(GraphError::DanglingEdge {
						from: edge.from,
						to: edge.to,
						missing: end,
					});
				}
			}
			if let Some(list) = adjacency.get_mut(&edge.from) {
				list.push(i);
			}
			if edge.to != edge.from {
				if let Some(list) = adjacency.get_mut(&edge.to) {
					list.push(i);
				}
			}
		}

		Ok(Self {
			nodes,
			edges,
			id_to_idx,
			adjacency,
		})
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Edges in insertion order; an edge's position is its [`EdgeIndex`].
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Edge at `index`, if any.
	pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
		self.edges.get(index)
	}

	/// Looks a node up by id.
	pub fn find_node(&self, id: NodeId) -> Option<&Node> {
		self.id_to_idx.get(&id).map(|&i| &self.nodes[i])
	}

	/// Whether `id` names a node of this graph.
	pub fn contains_node(&self, id: NodeId) -> bool {
		self.id_to_idx.contains_key(&id)
	}

	/// All edges with `id` as an endpoint, in storage order. A self-loop is
	/// yielded once. Unknown ids yield nothing.
	pub fn edges_touching(&self, id: NodeId) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
		self.adjacency
			.get(&id)
			.into_iter()
			.flatten()
			.map(|&i| (i, &self.edges[i]))
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}

/// Holder of the currently loaded graph.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	graph: Graph,
}

impl GraphStore {
	/// An empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the current graph with one built from `nodes` and `edges`.
	///
	/// The new graph is validated completely before the swap; on error the
	/// previously loaded graph stays active.
	pub fn load(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<()> {
		let graph = Graph::new(nodes, edges)?;
		debug!(
			"replacing graph ({} nodes) with {} nodes and {} edges",
			self.graph.node_count(),
			graph.node_count(),
			graph.edge_count()
		);
		self.graph = graph;
		info!(
			"Graph loaded: {} nodes, {} edges",
			self.graph.node_count(),
			self.graph.edge_count()
		);
		Ok(())
	}

	/// Current graph.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Looks a node up by id in the current graph.
	pub fn find_node(&self, id: NodeId) -> Option<&Node> {
		self.graph.find_node(id)
	}

	/// Edges touching `id` in the current graph, in storage order.
	pub fn edges_touching(&self, id: NodeId) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
		self.graph.edges_touching(id)
	}

	/// Number of nodes in the current graph.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of edges in the current graph.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}
}

#[cfg(test)]
mod tests {
	use rstest::{fixture, rstest};

	use super::*;

	#[fixture]
	fn triangle() -> GraphStore {
		let mut store = GraphStore::new();
		store
			.load(
				vec![
					Node::new(1, 0.0, 0.0),
					Node::new(2, 10.0, 0.0),
					Node::new(3, 10.0, 10.0),
				],
				vec![
					Edge::new(1, 2, 5.0),
					Edge::new(2, 3, 2.0),
					Edge::new(1, 3, 100.0),
				],
			)
			.unwrap();
		store
	}

	#[rstest]
	fn find_node_by_id(triangle: GraphStore) {
		assert_eq!(triangle.find_node(2), Some(&Node::new(2, 10.0, 0.0)));
		assert_eq!(triangle.find_node(7), None);
	}

	#[rstest]
	#[case(1, vec![0, 2])]
	#[case(2, vec![0, 1])]
	#[case(3, vec![1, 2])]
	#[case(42, vec![])]
	fn edges_touching_in_storage_order(
		triangle: GraphStore,
		#[case] id: NodeId,
		#[case] expected: Vec<EdgeIndex>,
	) {
		let got: Vec<EdgeIndex> = triangle.edges_touching(id).map(|(i, _)| i).collect();
		assert_eq!(got, expected);
	}

	#[test]
	fn self_loop_is_listed_once_and_parallel_edges_are_kept() {
		let graph = Graph::new(
			vec![Node::new(1, 0.0, 0.0), Node::new(2, 1.0, 1.0)],
			vec![
				Edge::new(1, 1, 3.0),
				Edge::new(1, 2, 4.0),
				Edge::new(2, 1, 4.0),
			],
		)
		.unwrap();
		let at_one: Vec<EdgeIndex> = graph.edges_touching(1).map(|(i, _)| i).collect();
		assert_eq!(at_one, vec![0, 1, 2]);
		assert_eq!(graph.edge_count(), 3);
	}

	#[test]
	fn rejects_duplicate_node_ids() {
		let err = Graph::new(
			vec![Node::new(1, 0.0, 0.0), Node::new(1, 5.0, 5.0)],
			vec![],
		)
		.unwrap_err();
		assert_eq!(err, GraphError::DuplicateNode(1));
	}

	#[test]
	fn rejects_dangling_edges() {
		let err = Graph::new(vec![Node::new(1, 0.0, 0.0)], vec![Edge::new(1, 9, 1.0)]).unwrap_err();
		assert_eq!(
			err,
			GraphError::DanglingEdge {
				from: 1,
				to: 9,
				missing: 9,
			}
		);
	}

	#[rstest]
	fn smaller_load_replaces_everything(mut triangle: GraphStore) {
		triangle
			.load(vec![Node::new(8, 1.0, 1.0)], vec![Edge::new(8, 8, 0.0)])
			.unwrap();
		assert_eq!(triangle.node_count(), 1);
		assert_eq!(triangle.edge_count(), 1);
		assert!(triangle.find_node(1).is_none());
		assert_eq!(triangle.edges_touching(1).count(), 0);
	}

	#[rstest]
	fn failed_load_keeps_previous_graph(mut triangle: GraphStore) {
		let err = triangle
			.load(vec![Node::new(5, 0.0, 0.0)], vec![Edge::new(5, 6, 1.0)])
			.unwrap_err();
		assert!(matches!(err, GraphError::DanglingEdge { missing: 6, .. }));
		assert_eq!(triangle.node_count(), 3);
		assert_eq!(triangle.edge_count(), 3);
		assert!(triangle.find_node(5).is_none());
	}
}
