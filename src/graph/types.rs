/// Caller-assigned node identifier; not necessarily contiguous.
pub type NodeId = i64;

/// Position of an edge in its graph's storage order.
pub type EdgeIndex = usize;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Builds a point from its coordinates.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Point halfway between `self` and `other`.
	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// A graph vertex with a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	/// Unique id within a graph.
	pub id: NodeId,
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
}

impl Node {
	/// Builds a node.
	pub fn new(id: NodeId, x: f64, y: f64) -> Self {
		Self { id, x, y }
	}

	/// Node position as a [`Point`].
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// An undirected weighted connection between two node ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// One endpoint.
	pub from: NodeId,
	/// The other endpoint.
	pub to: NodeId,
	/// Traversal cost, assumed non-negative.
	pub weight: f64,
}

impl Edge {
	/// Builds an edge.
	pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
		Self { from, to, weight }
	}

	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: NodeId) -> bool {
		self.from == id || self.to == id
	}

	/// The endpoint opposite `id`, or `None` if the edge does not touch `id`.
	/// A self-loop returns `id` itself.
	pub fn other_end(&self, id: NodeId) -> Option<NodeId> {
		if self.from == id {
			Some(self.to)
		} else if self.to == id {
			Some(self.from)
		} else {
			None
		}
	}
}

/// Unvalidated node and edge collections as read from a file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in document order.
	pub nodes: Vec<Node>,
	/// Edges in document order.
	pub edges: Vec<Edge>,
}
