//! Render-ready graph derived from a [`RawGraph`].

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use super::degree::DegreeIndex;
use super::leaf::is_leaf;
use super::raw::{RawEdge, RawGraph, RawNode};
use super::style::{EdgeStyle, StyleVariant};

/// Size of a node with no edges; every incident edge adds one.
pub const BASE_NODE_SIZE: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
	pub id: String,
	pub attributes: IndexMap<String, String>,
	/// Value of the first attribute; `None` when the parser sent no attributes.
	pub label: Option<String>,
	pub is_leaf: bool,
	pub degree: usize,
	/// Diameter in canvas units.
	pub size: f64,
}

impl DisplayNode {
	fn derive(node: &RawNode, degrees: &DegreeIndex) -> Self {
		let degree = degrees.degree(&node.id);
		Self {
			id: node.id.clone(),
			attributes: node.attributes.clone(),
			label: node.attributes.values().next().cloned(),
			is_leaf: is_leaf(&node.id, degrees),
			degree,
			size: BASE_NODE_SIZE + degree as f64,
		}
	}

	pub fn radius(&self) -> f64 {
		self.size / 2.0
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEdge {
	/// `"e<index>"` over the input order; only stable within one build.
	pub id: String,
	pub source: String,
	pub target: String,
	pub reciprocal: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	pub style_variant: StyleVariant,
}

impl DisplayEdge {
	fn derive(index: usize, edge: &RawEdge) -> Self {
		Self {
			id: format!("e{index}"),
			source: edge.source.clone(),
			target: edge.target.clone(),
			reciprocal: edge.reciprocal,
			label: edge.label.clone(),
			style_variant: StyleVariant::for_reciprocal(edge.reciprocal),
		}
	}

	pub fn style(&self) -> &'static EdgeStyle {
		self.style_variant.style()
	}
}

/// Nodes and edges ready for the rendering engine. Rebuilt from scratch on every render pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphModel {
	pub nodes: Vec<DisplayNode>,
	pub edges: Vec<DisplayEdge>,
}

impl GraphModel {
	pub fn build(raw: &RawGraph) -> Self {
		let degrees = DegreeIndex::compute(&raw.edges);
		let nodes = raw
			.nodes
			.iter()
			.map(|node| DisplayNode::derive(node, &degrees))
			.collect();
		let edges = raw
			.edges
			.iter()
			.enumerate()
			.map(|(i, edge)| DisplayEdge::derive(i, edge))
			.collect();
		Self { nodes, edges }
	}

	pub fn node(&self, id: &str) -> Option<&DisplayNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Ids referenced by an edge but missing from the node list, in first-seen order.
	///
	/// These still count towards degrees but are never drawn, and neither are their edges.
	pub fn dangling_endpoints(&self) -> Vec<&str> {
		let known: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
		let mut seen = HashSet::new();
		self.edges
			.iter()
			.flat_map(|e| [e.source.as_str(), e.target.as_str()])
			.filter(|id| !known.contains(id) && seen.insert(*id))
			.collect()
	}
}
