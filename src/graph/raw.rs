//! Graph shapes as returned by the parsing service, before any display derivation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An entity produced by the parser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
	pub id: String,
	/// Attribute order matters: the first entry becomes the display label.
	#[serde(default)]
	pub attributes: IndexMap<String, String>,
}

/// A relation between two entities.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
	pub source: String,
	pub target: String,
	#[serde(default)]
	pub reciprocal: bool,
	/// Relation name, when the parser supplies one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

/// The `{nodes, edges}` pair. Missing keys decode as empty lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
	#[serde(default)]
	pub nodes: Vec<RawNode>,
	#[serde(default)]
	pub edges: Vec<RawEdge>,
}

/// Body sent to the parsing service.
#[derive(Clone, Debug, Serialize)]
pub struct ParseRequest<'a> {
	pub code: &'a str,
}
