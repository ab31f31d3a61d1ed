//! Error taxonomy shared by loading, path finding and drawing.

use super::types::NodeId;

/// Result alias used throughout the graph core.
pub type GraphResult<T> = Result<T, GraphError>;

/// Everything that can go wrong between reading a file and drawing a path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
	/// The input is not well-formed markup.
	#[error("malformed graph markup: {0}")]
	Markup(String),

	/// A `point` or `line` element lacks a required attribute.
	#[error("<{element}> is missing the `{attribute}` attribute")]
	MissingAttribute {
		/// Element name, `point` or `line`.
		element: &'static str,
		/// Attribute that was expected.
		attribute: &'static str,
	},

	/// An attribute is present but not numeric.
	#[error("<{element}> has a non-numeric `{attribute}` attribute: {value:?}")]
	InvalidAttribute {
		/// Element name, `point` or `line`.
		element: &'static str,
		/// Attribute that failed to parse.
		attribute: &'static str,
		/// Raw attribute text.
		value: String,
	},

	/// Two nodes share the same id.
	#[error("node {0} is defined more than once")]
	DuplicateNode(NodeId),

	/// An edge references a node id that is not in the node set.
	#[error("edge {from}-{to} references unknown node {missing}")]
	DanglingEdge {
		/// Edge `from` endpoint.
		from: NodeId,
		/// Edge `to` endpoint.
		to: NodeId,
		/// The endpoint that could not be resolved.
		missing: NodeId,
	},

	/// A requested start or end node does not exist in the current graph.
	#[error("node {0} does not exist in the current graph")]
	UnknownNode(NodeId),

	/// User supplied text that is not a node id.
	#[error("{0:?} is not a valid node id")]
	InvalidNodeInput(String),
}

impl GraphError {
	/// True for errors raised while reading a graph file.
	pub fn is_parse_error(&self) -> bool {
		matches!(
			self,
			Self::Markup(_)
				| Self::MissingAttribute { .. }
				| Self::InvalidAttribute { .. }
				| Self::DuplicateNode(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_input() {
		let err = GraphError::InvalidAttribute {
			element: "point",
			attribute: "x",
			value: "abc".into(),
		};
		assert_eq!(
			err.to_string(),
			"<point> has a non-numeric `x` attribute: \"abc\""
		);

		let err = GraphError::DanglingEdge {
			from: 1,
			to: 9,
			missing: 9,
		};
		assert_eq!(err.to_string(), "edge 1-9 references unknown node 9");
	}

	#[test]
	fn parse_family_is_classified() {
		assert!(GraphError::Markup("eof".into()).is_parse_error());
		assert!(GraphError::DuplicateNode(3).is_parse_error());
		assert!(!GraphError::UnknownNode(3).is_parse_error());
		assert!(!GraphError::InvalidNodeInput("x".into()).is_parse_error());
	}
}
