//! Reads graph markup into [`GraphData`].
//!
//! The format is plain XML. `point` elements describe nodes and `line`
//! elements describe edges; both may appear at any depth and are collected in
//! document order:
//!
//! ```xml
//! <graph>
//!   <point id="1" x="0" y="0"/>
//!   <point id="2" x="10" y="0"/>
//!   <line from="1" to="2" weight="5"/>
//! </graph>
//! ```

use std::str::FromStr;

use log::debug;
use roxmltree::{Document, Node as XmlNode};

use super::error::{GraphError, GraphResult};
use super::types::{Edge, GraphData, Node, NodeId};

const POINT: &str = "point";
const LINE: &str = "line";

/// Parses markup text into unvalidated node and edge lists.
///
/// Only syntax is checked here; duplicate ids and dangling edges are caught
/// when the data is turned into a [`Graph`](super::Graph).
pub fn parse_graph(markup: &str) -> GraphResult<GraphData> {
	let doc = Document::parse(markup).map_err(|e| GraphError::Markup(e.to_string()))?;

	let mut data = GraphData::default();
	for element in doc.descendants().filter(|n| n.is_element()) {
		if element.has_tag_name(POINT) {
			data.nodes.push(Node {
				id: integer(&element, POINT, "id")?,
				x: number(&element, POINT, "x")?,
				y: number(&element, POINT, "y")?,
			});
		} else if element.has_tag_name(LINE) {
			data.edges.push(Edge {
				from: integer(&element, LINE, "from")?,
				to: integer(&element, LINE, "to")?,
				weight: number(&element, LINE, "weight")?,
			});
		}
	}

	debug!(
		"parsed markup: {} points, {} lines",
		data.nodes.len(),
		data.edges.len()
	);
	Ok(data)
}

fn raw<'a>(
	element: &XmlNode<'a, '_>,
	name: &'static str,
	attribute: &'static str,
) -> GraphResult<&'a str> {
	element
		.attribute(attribute)
		.map(str::trim)
		.ok_or(GraphError::MissingAttribute {
			element: name,
			attribute,
		})
}

fn parsed<T: FromStr>(
	element: &XmlNode<'_, '_>,
	name: &'static str,
	attribute: &'static str,
) -> GraphResult<T> {
	let text = raw(element, name, attribute)?;
	text.parse().map_err(|_| GraphError::InvalidAttribute {
		element: name,
		attribute,
		value: text.to_owned(),
	})
}

fn integer(
	element: &XmlNode<'_, '_>,
	name: &'static str,
	attribute: &'static str,
) -> GraphResult<NodeId> {
	parsed(element, name, attribute)
}

fn number(
	element: &XmlNode<'_, '_>,
	name: &'static str,
	attribute: &'static str,
) -> GraphResult<f64> {
	let value: f64 = parsed(element, name, attribute)?;
	if !value.is_finite() {
		return Err(GraphError::InvalidAttribute {
			element: name,
			attribute,
			value: raw(element, name, attribute)?.to_owned(),
		});
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const TRIANGLE: &str = r#"<?xml version="1.0"?>
<graph>
	<point id="1" x="0" y="0"/>
	<point id="2" x="10" y="0"/>
	<point id="3" x="10" y="10"/>
	<line from="1" to="2" weight="5"/>
	<line from="2" to="3" weight="2"/>
	<line from="1" to="3" weight="100"/>
</graph>"#;

	#[test]
	fn reads_points_and_lines_in_document_order() {
		let data = parse_graph(TRIANGLE).unwrap();
		assert_eq!(
			data.nodes,
			vec![
				Node::new(1, 0.0, 0.0),
				Node::new(2, 10.0, 0.0),
				Node::new(3, 10.0, 10.0),
			]
		);
		assert_eq!(
			data.edges,
			vec![
				Edge::new(1, 2, 5.0),
				Edge::new(2, 3, 2.0),
				Edge::new(1, 3, 100.0),
			]
		);
	}

	#[test]
	fn nested_and_unrelated_elements() {
		let markup = r#"<root><meta><title>t</title></meta>
			<nodes><point id=" 7 " x="1.5" y="-2"/></nodes>
			<edges><line from="7" to="7" weight="0"/></edges></root>"#;
		let data = parse_graph(markup).unwrap();
		assert_eq!(data.nodes, vec![Node::new(7, 1.5, -2.0)]);
		assert_eq!(data.edges, vec![Edge::new(7, 7, 0.0)]);
	}

	#[test]
	fn malformed_markup_is_a_parse_error() {
		let err = parse_graph("<graph><point id=\"1\"").unwrap_err();
		assert!(matches!(err, GraphError::Markup(_)));
		assert!(err.is_parse_error());
	}

	#[rstest]
	#[case(r#"<g><point x="1" y="2"/></g>"#, "point", "id")]
	#[case(r#"<g><point id="1" y="2"/></g>"#, "point", "x")]
	#[case(r#"<g><line from="1" to="2"/></g>"#, "line", "weight")]
	fn missing_attribute(
		#[case] markup: &str,
		#[case] element: &'static str,
		#[case] attribute: &'static str,
	) {
		assert_eq!(
			parse_graph(markup),
			Err(GraphError::MissingAttribute { element, attribute })
		);
	}

	#[rstest]
	#[case(r#"<g><point id="one" x="1" y="2"/></g>"#, "point", "id", "one")]
	#[case(r#"<g><point id="1" x="1" y="up"/></g>"#, "point", "y", "up")]
	#[case(r#"<g><line from="1" to="2.5" weight="1"/></g>"#, "line", "to", "2.5")]
	#[case(r#"<g><line from="1" to="2" weight="NaN"/></g>"#, "line", "weight", "NaN")]
	#[case(r#"<g><line from="1" to="2" weight="inf"/></g>"#, "line", "weight", "inf")]
	fn non_numeric_attribute(
		#[case] markup: &str,
		#[case] element: &'static str,
		#[case] attribute: &'static str,
		#[case] value: &str,
	) {
		assert_eq!(
			parse_graph(markup),
			Err(GraphError::InvalidAttribute {
				element,
				attribute,
				value: value.to_owned(),
			})
		);
	}

	#[test]
	fn empty_document_yields_empty_graph() {
		assert_eq!(parse_graph("<graph/>").unwrap(), GraphData::default());
	}
}
