//! Fixed visual styles for nodes and the two edge variants.

use serde::Serialize;

/// Triangle drawn at the target end of a directed edge.
///
/// The glyph points along +x with its tip at the origin: `M 0,0 L 8,4 L 8,-4 Z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowGlyph {
	pub length: f64,
	pub half_width: f64,
	pub fill: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLabelStyle {
	pub auto_rotate: bool,
	pub halo: &'static str,
	pub halo_width: f64,
	pub font_size: f64,
	pub fill: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub color: &'static str,
	pub line_width: f64,
	pub label: EdgeLabelStyle,
	pub end_arrow: Option<ArrowGlyph>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub stroke: &'static str,
	pub fill: &'static str,
	pub line_width: f64,
	pub label_fill: &'static str,
	pub font_size: f64,
}

pub const ARROW: ArrowGlyph = ArrowGlyph {
	length: 8.0,
	half_width: 4.0,
	fill: "#e2e2e2",
};

const BASE_EDGE: EdgeStyle = EdgeStyle {
	color: "#e2e2e2",
	line_width: 1.0,
	label: EdgeLabelStyle {
		auto_rotate: true,
		halo: "#fff",
		halo_width: 5.0,
		font_size: 12.0,
		fill: "#333",
	},
	end_arrow: None,
};

pub static WITH_ARROW: EdgeStyle = EdgeStyle {
	end_arrow: Some(ARROW),
	..BASE_EDGE
};

pub static NO_ARROW: EdgeStyle = BASE_EDGE;

pub static NODE: NodeStyle = NodeStyle {
	stroke: "#5B8FF9",
	fill: "#C6E5FF",
	line_width: 2.0,
	label_fill: "#000",
	font_size: 12.0,
};

/// Which of the two edge styles an edge is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum StyleVariant {
	#[default]
	WithArrow,
	NoArrow,
}

impl StyleVariant {
	/// Reciprocal relations have no direction and so no arrowhead.
	pub fn for_reciprocal(reciprocal: bool) -> Self {
		if reciprocal {
			StyleVariant::NoArrow
		} else {
			StyleVariant::WithArrow
		}
	}

	pub fn style(self) -> &'static EdgeStyle {
		match self {
			StyleVariant::WithArrow => &WITH_ARROW,
			StyleVariant::NoArrow => &NO_ARROW,
		}
	}
}
