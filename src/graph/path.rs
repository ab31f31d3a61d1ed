//! Least-cost paths over an undirected weighted [`Graph`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;

use super::error::{GraphError, GraphResult};
use super::store::Graph;
use super::types::{Edge, EdgeIndex, NodeId};

/// One edge of a [`Path`], tagged with its storage position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathEdge {
	/// Position of the edge in the graph it was found in.
	pub index: EdgeIndex,
	/// The edge itself.
	pub edge: Edge,
}

/// Ordered edges from a start node to an end node.
///
/// Empty when start and end coincide or when the end is unreachable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
	edges: Vec<PathEdge>,
}

impl Path {
	/// The empty path.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Steps from start to end.
	pub fn edges(&self) -> &[PathEdge] {
		&self.edges
	}

	/// Number of edges.
	pub fn len(&self) -> usize {
		self.edges.len()
	}

	/// True if there is nothing to traverse.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Whether the edge stored at `index` is part of this path.
	pub fn contains(&self, index: EdgeIndex) -> bool {
		self.edges.iter().any(|step| step.index == index)
	}

	/// Sum of the edge weights.
	pub fn total_weight(&self) -> f64 {
		self.edges.iter().map(|step| step.edge.weight).sum()
	}

	/// Node ids visited when walking the path from `start`, including both
	/// ends. An empty path yields just `start`.
	pub fn node_chain(&self, start: NodeId) -> Vec<NodeId> {
		let mut chain = Vec::with_capacity(self.edges.len() + 1);
		chain.push(start);
		let mut current = start;
		for step in &self.edges {
			match step.edge.other_end(current) {
				Some(next) => {
					chain.push(next);
					current = next;
				}
				None => break,
			}
		}
		chain
	}
}

/// Frontier entry; ordered so that `BinaryHeap` pops the smallest distance
/// first and, among equal distances, the earliest inserted entry.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
	distance: f64,
	seq: u64,
	node: NodeId,
}

impl PartialEq for FrontierEntry {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for FrontierEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		// Reversed on both keys: max-heap becomes min-heap.
		other
			.distance
			.total_cmp(&self.distance)
			.then_with(|| other.seq.cmp(&self.seq))
	}
}

/// Computes the least-cost path from `start` to `end` with Dijkstra's
/// algorithm, treating every edge as traversable in both directions.
///
/// Returns [`GraphError::UnknownNode`] if either id is not in `graph`.
/// Parallel edges are resolved to the one that produced the final distance.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<Path> {
	for id in [start, end] {
		if !graph.contains_node(id) {
			return Err(GraphError::UnknownNode(id));
		}
	}
	if start == end {
		return Ok(Path::empty());
	}

	let mut distances: HashMap<NodeId, f64> = graph
		.nodes()
		.iter()
		.map(|node| (node.id, f64::INFINITY))
		.collect();
	let mut predecessor: HashMap<NodeId, (NodeId, EdgeIndex)> = HashMap::new();
	let mut finalized: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
	let mut frontier = BinaryHeap::new();
	let mut seq = 0u64;

	distances.insert(start, 0.0);
	frontier.push(FrontierEntry {
		distance: 0.0,
		seq,
		node: start,
	});

	while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
		if !finalized.insert(current) {
			continue;
		}
		if current == end {
			break;
		}

		let base = distances.get(&current).copied().unwrap_or(f64::INFINITY);
		for (index, edge) in graph.edges_touching(current) {
			let Some(neighbor) = edge.other_end(current) else {
				continue;
			};
			// Finalized distances never change; keeps the predecessor map acyclic.
			if finalized.contains(&neighbor) {
				continue;
			}
			let candidate = base + edge.weight;
			let known = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
			if candidate < known {
				distances.insert(neighbor, candidate);
				predecessor.insert(neighbor, (current, index));
				seq += 1;
				frontier.push(FrontierEntry {
					distance: candidate,
					seq,
					node: neighbor,
				});
			}
		}
	}

	debug!(
		"dijkstra {start} -> {end}: finalized {} of {} nodes",
		finalized.len(),
		graph.node_count()
	);

	if !finalized.contains(&end) {
		return Ok(Path::empty());
	}

	let mut edges = Vec::new();
	let mut cursor = end;
	while cursor != start {
		let Some(&(prev, index)) = predecessor.get(&cursor) else {
			return Ok(Path::empty());
		};
		let Some(&edge) = graph.edge(index) else {
			return Ok(Path::empty());
		};
		edges.push(PathEdge { index, edge });
		cursor = prev;
	}
	edges.reverse();

	debug!("dijkstra {start} -> {end}: {} edges", edges.len());
	Ok(Path { edges })
}
